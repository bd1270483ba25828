// src/application/commands/catalogs/mod.rs
mod create;
mod delete;
mod seed;
mod service;
mod update;

pub use create::{CatalogContent, CreateCatalogCommand};
pub use delete::DeleteCatalogCommand;
pub use service::CatalogCommandService;
pub use update::UpdateCatalogCommand;
