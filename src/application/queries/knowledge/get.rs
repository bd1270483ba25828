use super::KnowledgeQueryService;
use crate::{
    application::{dto::KnowledgeDto, error::ApplicationResult},
    domain::knowledge::KnowledgeBase,
};

impl KnowledgeQueryService {
    /// Stored knowledge, or the built-in default when none was saved yet.
    pub async fn get_knowledge(&self) -> ApplicationResult<KnowledgeDto> {
        let knowledge = match self.repo.find().await? {
            Some(stored) => stored,
            None => KnowledgeBase::builtin(self.clock.now()),
        };
        Ok(knowledge.into())
    }
}
