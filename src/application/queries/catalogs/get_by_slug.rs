use super::CatalogQueryService;
use crate::{
    application::{
        dto::CatalogDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{catalog::Catalog, document::DocumentId, slug::Slug},
};

pub struct GetCatalogBySlugQuery {
    pub slug: String,
}

impl CatalogQueryService {
    /// Same lookup chain as blog posts: stored slug, raw id, derived slug.
    pub async fn get_catalog_by_slug(
        &self,
        query: GetCatalogBySlugQuery,
    ) -> ApplicationResult<CatalogDto> {
        self.find_published(&query.slug)
            .await?
            .map(CatalogDto::from)
            .ok_or_else(|| ApplicationError::not_found("Catalog not found"))
    }

    async fn find_published(&self, value: &str) -> ApplicationResult<Option<Catalog>> {
        let Ok(slug) = Slug::new(value) else {
            return Ok(None);
        };

        if let Some(catalog) = self.read_repo.find_by_slug(&slug, true).await? {
            return Ok(Some(catalog));
        }

        if let Ok(id) = DocumentId::parse(value) {
            if let Some(catalog) = self.read_repo.find_by_id(&id).await? {
                if catalog.published {
                    return Ok(Some(catalog));
                }
            }
        }

        let published = self.read_repo.list(false).await?;
        Ok(published
            .into_iter()
            .find(|catalog| catalog.public_slug() == value))
    }
}
