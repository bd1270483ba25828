// src/presentation/http/controllers/mod.rs
pub mod blogs;
pub mod catalogs;
pub mod chat;
pub mod contact;
pub mod knowledge;
pub mod sitemap;
pub mod submissions;
