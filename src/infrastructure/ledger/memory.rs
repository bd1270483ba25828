use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ledger::{CellUpdate, LedgerSheet};
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Process-local ledger used for development and tests. Contents are lost on
/// restart.
#[derive(Default)]
pub struct InMemoryLedgerSheet {
    rows: Mutex<Vec<Vec<String>>>,
    header_writes: Mutex<usize>,
}

impl InMemoryLedgerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every row, header included.
    pub fn snapshot(&self) -> Vec<Vec<String>> {
        self.rows.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn push_row(&self, row: Vec<String>) {
        self.rows
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(row);
    }

    pub fn header_writes(&self) -> usize {
        *self
            .header_writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn rows(&self) -> DomainResult<MutexGuard<'_, Vec<Vec<String>>>> {
        self.rows
            .lock()
            .map_err(|_| DomainError::persistence("in-memory ledger lock poisoned"))
    }
}

#[async_trait]
impl LedgerSheet for InMemoryLedgerSheet {
    async fn read_header(&self) -> DomainResult<Option<Vec<String>>> {
        Ok(self.rows()?.first().cloned())
    }

    async fn write_header(&self, header: &[&str]) -> DomainResult<()> {
        let header: Vec<String> = header.iter().map(|h| (*h).to_string()).collect();
        {
            let mut rows = self.rows()?;
            match rows.first_mut() {
                Some(first) => *first = header,
                None => rows.push(header),
            }
        }
        *self
            .header_writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner) += 1;
        Ok(())
    }

    async fn read_rows(&self) -> DomainResult<Vec<Vec<String>>> {
        Ok(self.rows()?.clone())
    }

    async fn update_cells(&self, updates: Vec<CellUpdate>) -> DomainResult<()> {
        let mut rows = self.rows()?;
        for update in updates {
            if update.row == 0 {
                return Err(DomainError::persistence("ledger rows are 1-based"));
            }
            let index = update.row - 1;
            if rows.len() <= index {
                rows.resize(index + 1, Vec::new());
            }
            let row = &mut rows[index];
            let column = update.column.index();
            if row.len() <= column {
                row.resize(column + 1, String::new());
            }
            row[column] = update.value;
        }
        Ok(())
    }

    async fn append_row(&self, row: Vec<String>) -> DomainResult<()> {
        self.rows()?.push(row);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ledger::LedgerColumn;

    #[tokio::test]
    async fn cell_updates_pad_short_rows() {
        let sheet = InMemoryLedgerSheet::new();
        sheet.push_row(vec!["h".into()]);
        sheet.push_row(vec!["ts".into(), "name".into()]);

        sheet
            .update_cells(vec![CellUpdate::new(2, LedgerColumn::Notes, "called back")])
            .await
            .unwrap();

        let rows = sheet.snapshot();
        assert_eq!(rows[1].len(), 7);
        assert_eq!(rows[1][6], "called back");
    }

    #[tokio::test]
    async fn empty_sheet_has_no_header() {
        let sheet = InMemoryLedgerSheet::new();
        assert!(sheet.read_header().await.unwrap().is_none());
    }
}
