// src/domain/catalog/repository.rs
use crate::domain::catalog::entity::{Catalog, CatalogUpdate, NewCatalog};
use crate::domain::document::DocumentId;
use crate::domain::errors::DomainResult;
use crate::domain::slug::{Slug, SlugLookup};
use async_trait::async_trait;

#[async_trait]
pub trait CatalogWriteRepository: Send + Sync {
    async fn insert(&self, catalog: NewCatalog) -> DomainResult<Catalog>;
    async fn update(&self, update: CatalogUpdate) -> DomainResult<Catalog>;
    async fn delete(&self, id: &DocumentId) -> DomainResult<()>;
}

#[async_trait]
pub trait CatalogReadRepository: SlugLookup {
    async fn find_by_id(&self, id: &DocumentId) -> DomainResult<Option<Catalog>>;
    async fn find_by_slug(
        &self,
        slug: &Slug,
        published_only: bool,
    ) -> DomainResult<Option<Catalog>>;
    /// Newest first.
    async fn list(&self, include_drafts: bool) -> DomainResult<Vec<Catalog>>;
}
