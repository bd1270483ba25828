// src/domain/knowledge/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::knowledge::entity::KnowledgeBase;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait KnowledgeRepository: Send + Sync {
    async fn find(&self) -> DomainResult<Option<KnowledgeBase>>;
    /// Insert or replace the single knowledge document. `created_at` is only
    /// applied when the document does not exist yet.
    async fn upsert(
        &self,
        document: String,
        system_prompt: String,
        now: DateTime<Utc>,
    ) -> DomainResult<KnowledgeBase>;
}
