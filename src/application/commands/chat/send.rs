// src/application/commands/chat/send.rs
use super::{ChatCommandService, prompt::build_prompt};
use crate::{
    application::{
        dto::{ChatReplyDto, ChatTurnDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{knowledge::KnowledgeBase, ledger::ChatConversation},
};

pub const AI_NOT_CONFIGURED: &str =
    "AI service is not configured. Please contact the administrator.";

#[derive(Debug, Default)]
pub struct ChatCommand {
    pub message: Option<String>,
    pub conversation_history: Vec<ChatTurnDto>,
    pub user_email: Option<String>,
}

impl ChatCommandService {
    pub async fn chat(&self, command: ChatCommand) -> ApplicationResult<ChatReplyDto> {
        let generator = self
            .generator
            .as_ref()
            .ok_or_else(|| ApplicationError::unavailable(AI_NOT_CONFIGURED))?;

        let message = command
            .message
            .filter(|m| !m.trim().is_empty())
            .ok_or_else(|| ApplicationError::validation("Message is required"))?;

        let knowledge = match self.knowledge_repo.find().await? {
            Some(knowledge) => knowledge,
            None => KnowledgeBase::builtin(self.clock.now()),
        };

        let prompt = build_prompt(
            &knowledge.system_prompt,
            &knowledge.document,
            &command.conversation_history,
            &message,
        );
        let response = generator.generate(&prompt).await?;

        let email = command
            .user_email
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());
        if let Some(email) = email {
            self.record_conversation(email, message, response.clone())
                .await;
        }

        Ok(ChatReplyDto { response })
    }

    async fn record_conversation(&self, email: String, user_message: String, bot_response: String) {
        let Some(ledger) = &self.ledger else {
            tracing::debug!("submission ledger not configured, chat not recorded");
            return;
        };

        let conversation = ChatConversation {
            email,
            user_message,
            bot_response,
        };
        let email = conversation.email.clone();
        if let Err(err) = ledger.append_chat_conversation(conversation).await {
            tracing::warn!(error = %err, %email, "failed to record chat conversation");
        }
    }
}
