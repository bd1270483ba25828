pub mod blog;
pub mod catalog;
pub mod document;
pub mod errors;
pub mod knowledge;
pub mod ledger;
pub mod slug;
