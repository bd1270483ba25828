pub mod ai;
pub mod database;
pub mod ledger;
pub mod repositories;
pub mod time;
pub mod util;
