pub mod auth;
pub mod memory;
pub mod sheets;

pub use auth::{AccessTokenProvider, ServiceAccountCredentials, ServiceAccountTokenProvider, StaticTokenProvider};
pub use memory::InMemoryLedgerSheet;
pub use sheets::{GoogleSheetsConfig, GoogleSheetsLedger};
