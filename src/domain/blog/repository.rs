// src/domain/blog/repository.rs
use crate::domain::blog::entity::{Blog, BlogUpdate, NewBlog};
use crate::domain::document::DocumentId;
use crate::domain::errors::DomainResult;
use crate::domain::slug::{Slug, SlugLookup};
use async_trait::async_trait;

#[async_trait]
pub trait BlogWriteRepository: Send + Sync {
    async fn insert(&self, blog: NewBlog) -> DomainResult<Blog>;
    async fn update(&self, update: BlogUpdate) -> DomainResult<Blog>;
    async fn delete(&self, id: &DocumentId) -> DomainResult<()>;
}

#[async_trait]
pub trait BlogReadRepository: SlugLookup {
    async fn find_by_id(&self, id: &DocumentId) -> DomainResult<Option<Blog>>;
    async fn find_by_slug(&self, slug: &Slug, published_only: bool) -> DomainResult<Option<Blog>>;
    /// Newest first.
    async fn list(&self, include_drafts: bool) -> DomainResult<Vec<Blog>>;
}
