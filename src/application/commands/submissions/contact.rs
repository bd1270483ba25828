// src/application/commands/submissions/contact.rs
use super::SubmissionCommandService;
use crate::{
    application::{
        dto::MessageDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::ledger::{NewSubmission, SubmissionType},
};

pub const CONTACT_RECEIVED: &str = "Your message has been received. We'll get back to you soon!";

#[derive(Debug, Default)]
pub struct ContactCommand {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    pub mode: Option<String>,
}

impl SubmissionCommandService {
    /// Accept a contact or quote form. Ledger failures never reach the
    /// visitor.
    pub async fn submit_contact(&self, command: ContactCommand) -> ApplicationResult<MessageDto> {
        let present = |v: Option<String>| v.filter(|s| !s.is_empty());
        let (Some(name), Some(email), Some(message)) = (
            present(command.name),
            present(command.email),
            present(command.message),
        ) else {
            return Err(ApplicationError::validation(
                "Name, email, and message are required.",
            ));
        };

        let kind = SubmissionType::from_mode(command.mode.as_deref());
        tracing::info!(%email, kind = %kind, "submission received");

        match &self.ledger {
            Some(ledger) => {
                let submission = NewSubmission {
                    name,
                    email: email.clone(),
                    message,
                    kind,
                };
                if let Err(err) = ledger.append_submission(submission).await {
                    tracing::warn!(error = %err, %email, "failed to record submission");
                }
            }
            None => tracing::warn!(%email, "submission ledger not configured, submission not recorded"),
        }

        Ok(MessageDto::new(CONTACT_RECEIVED))
    }
}
