pub mod defaults;
pub mod entity;
pub mod repository;

pub use entity::KnowledgeBase;
pub use repository::KnowledgeRepository;
