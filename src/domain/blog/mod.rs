pub mod entity;
pub mod repository;

pub use entity::{Blog, BlogUpdate, NewBlog, derive_excerpt};
pub use repository::{BlogReadRepository, BlogWriteRepository};
