pub mod entity;
pub mod repository;
pub mod services;

pub use entity::{
    CellUpdate, ChatConversation, LEDGER_HEADERS, LedgerColumn, MESSAGE_SEPARATOR, NewSubmission,
    SubmissionType, SubmissionUpdate,
};
pub use repository::LedgerSheet;
pub use services::SubmissionLedger;
