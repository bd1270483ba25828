// src/domain/ledger/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::ledger::entity::CellUpdate;
use async_trait::async_trait;

/// Spreadsheet holding the submission ledger.
///
/// Rows are returned as the store reports them, header first, with trailing
/// empty cells possibly omitted.
#[async_trait]
pub trait LedgerSheet: Send + Sync {
    async fn read_header(&self) -> DomainResult<Option<Vec<String>>>;
    async fn write_header(&self, header: &[&str]) -> DomainResult<()>;
    async fn read_rows(&self) -> DomainResult<Vec<Vec<String>>>;
    async fn update_cells(&self, updates: Vec<CellUpdate>) -> DomainResult<()>;
    async fn append_row(&self, row: Vec<String>) -> DomainResult<()>;
}
