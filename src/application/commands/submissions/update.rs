// src/application/commands/submissions/update.rs
use super::SubmissionCommandService;
use crate::{
    application::{
        dto::MessageDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{errors::DomainError, ledger::SubmissionUpdate},
};

#[derive(Debug, Default)]
pub struct UpdateSubmissionCommand {
    pub email: Option<String>,
    pub timestamp: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

impl SubmissionCommandService {
    pub async fn update_submission(
        &self,
        command: UpdateSubmissionCommand,
    ) -> ApplicationResult<MessageDto> {
        let ledger = self
            .ledger
            .as_ref()
            .ok_or_else(|| ApplicationError::unavailable("submission ledger is not configured"))?;

        let (Some(email), Some(timestamp)) = (
            command.email.filter(|e| !e.trim().is_empty()),
            command.timestamp.filter(|t| !t.is_empty()),
        ) else {
            return Err(ApplicationError::validation("Email and timestamp are required"));
        };

        let update = SubmissionUpdate {
            status: command.status,
            notes: command.notes,
        };
        match ledger.update_submission(&email, &timestamp, update).await {
            Ok(()) => Ok(MessageDto::new("Submission updated")),
            Err(DomainError::NotFound(msg)) => Err(ApplicationError::not_found(msg)),
            Err(err) => Err(err.into()),
        }
    }
}
