use crate::domain::knowledge::{KnowledgeBase, entity::KNOWLEDGE_TYPE};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeDto {
    /// `null` while the built-in default is in use.
    #[serde(rename = "_id")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub document: String,
    pub system_prompt: String,
    #[serde(default, with = "serde_time::option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "serde_time::option")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<KnowledgeBase> for KnowledgeDto {
    fn from(knowledge: KnowledgeBase) -> Self {
        Self {
            id: knowledge.id.map(String::from),
            kind: KNOWLEDGE_TYPE.to_string(),
            document: knowledge.document,
            system_prompt: knowledge.system_prompt,
            created_at: knowledge.created_at,
            updated_at: knowledge.updated_at,
        }
    }
}
