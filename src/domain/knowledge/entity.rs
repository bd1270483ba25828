// src/domain/knowledge/entity.rs
use crate::domain::document::DocumentId;
use crate::domain::knowledge::defaults::{DEFAULT_DOCUMENT, DEFAULT_SYSTEM_PROMPT};
use chrono::{DateTime, Utc};

/// Discriminator stored on the single knowledge document.
pub const KNOWLEDGE_TYPE: &str = "company_knowledge";

/// Company knowledge fed to the chat assistant.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    /// `None` until an administrator saves the document for the first time.
    pub id: Option<DocumentId>,
    pub document: String,
    pub system_prompt: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl KnowledgeBase {
    pub fn builtin(now: DateTime<Utc>) -> Self {
        Self {
            id: None,
            document: DEFAULT_DOCUMENT.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}
