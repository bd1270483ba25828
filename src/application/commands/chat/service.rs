// src/application/commands/chat/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{ai::TextGenerator, time::Clock},
    domain::{knowledge::KnowledgeRepository, ledger::SubmissionLedger},
};

pub struct ChatCommandService {
    pub(super) knowledge_repo: Arc<dyn KnowledgeRepository>,
    /// `None` when no AI key is configured.
    pub(super) generator: Option<Arc<dyn TextGenerator>>,
    pub(super) ledger: Option<Arc<SubmissionLedger>>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ChatCommandService {
    pub fn new(
        knowledge_repo: Arc<dyn KnowledgeRepository>,
        generator: Option<Arc<dyn TextGenerator>>,
        ledger: Option<Arc<SubmissionLedger>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            knowledge_repo,
            generator,
            ledger,
            clock,
        }
    }
}
