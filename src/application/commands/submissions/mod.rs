// src/application/commands/submissions/mod.rs
mod contact;
mod service;
mod update;

pub use contact::{CONTACT_RECEIVED, ContactCommand};
pub use service::SubmissionCommandService;
pub use update::UpdateSubmissionCommand;
