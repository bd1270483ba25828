// src/application/commands/knowledge/mod.rs
mod service;
mod update;

pub use service::KnowledgeCommandService;
pub use update::UpdateKnowledgeCommand;
