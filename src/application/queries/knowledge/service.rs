use std::sync::Arc;

use crate::{application::ports::time::Clock, domain::knowledge::KnowledgeRepository};

pub struct KnowledgeQueryService {
    pub(super) repo: Arc<dyn KnowledgeRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl KnowledgeQueryService {
    pub fn new(repo: Arc<dyn KnowledgeRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}
