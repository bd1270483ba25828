// src/application/commands/submissions/service.rs
use std::sync::Arc;

use crate::domain::ledger::SubmissionLedger;

pub struct SubmissionCommandService {
    /// `None` when no ledger is configured; intake then only logs.
    pub(super) ledger: Option<Arc<SubmissionLedger>>,
}

impl SubmissionCommandService {
    pub fn new(ledger: Option<Arc<SubmissionLedger>>) -> Self {
        Self { ledger }
    }
}
