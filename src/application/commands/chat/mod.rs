// src/application/commands/chat/mod.rs
mod prompt;
mod send;
mod service;

pub use prompt::build_prompt;
pub use send::ChatCommand;
pub use service::ChatCommandService;
