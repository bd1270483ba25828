// src/application/commands/knowledge/update.rs
use super::KnowledgeCommandService;
use crate::{
    application::{
        dto::KnowledgeDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::knowledge::defaults::DEFAULT_SYSTEM_PROMPT,
};

pub struct UpdateKnowledgeCommand {
    pub document: Option<String>,
    pub system_prompt: Option<String>,
}

impl KnowledgeCommandService {
    pub async fn update_knowledge(
        &self,
        command: UpdateKnowledgeCommand,
    ) -> ApplicationResult<KnowledgeDto> {
        let document = command
            .document
            .filter(|d| !d.trim().is_empty())
            .ok_or_else(|| ApplicationError::validation("Document content is required"))?;
        let system_prompt = command
            .system_prompt
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string());

        let saved = self
            .repo
            .upsert(document, system_prompt, self.clock.now())
            .await?;
        tracing::info!("knowledge document updated");
        Ok(saved.into())
    }
}
