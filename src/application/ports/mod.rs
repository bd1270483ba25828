// src/application/ports/mod.rs
pub mod ai;
pub mod time;
pub mod util;
