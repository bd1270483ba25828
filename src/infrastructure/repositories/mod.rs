// src/infrastructure/repositories/mod.rs
mod error;
mod mongo_blog;
mod mongo_catalog;
mod mongo_knowledge;

pub use mongo_blog::{BLOGS_COLLECTION, MongoBlogRepository};
pub use mongo_catalog::{CATALOGS_COLLECTION, MongoCatalogRepository};
pub use mongo_knowledge::{KNOWLEDGE_COLLECTION, MongoKnowledgeRepository};
