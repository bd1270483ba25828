// src/application/commands/catalogs/update.rs
use super::{CatalogCommandService, create::CatalogContent};
use crate::{
    application::{
        dto::CatalogDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{catalog::CatalogUpdate, document::DocumentId},
};

#[derive(Debug, Default)]
pub struct UpdateCatalogCommand {
    pub id: String,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: CatalogContent,
}

impl CatalogCommandService {
    /// Unlike blogs, a catalog's slug is recomputed on every update unless
    /// the caller supplies one.
    pub async fn update_catalog(
        &self,
        command: UpdateCatalogCommand,
    ) -> ApplicationResult<CatalogDto> {
        let id = DocumentId::parse(&command.id)
            .map_err(|_| ApplicationError::not_found("Catalog not found"))?;
        let existing = self
            .read_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Catalog not found"))?;

        let title_source = command
            .title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(&existing.title);
        let slug = self
            .slug_service
            .assign(
                self.read_repo.as_ref(),
                command.slug.as_deref(),
                title_source,
                &existing.id,
                Some(&existing.id),
            )
            .await?;

        let content = command.content;
        let mut update = CatalogUpdate::new(id, self.clock.now()).with_slug(slug);
        update.title = command.title;
        update.description = content.description;
        update.hero_image = content.hero_image;
        update.secondary_image = content.secondary_image;
        update.icon = content.icon;
        update.color_theme = content.color_theme;
        update.sections = content.sections;
        update.cta = content.cta;
        update.published = content.published;

        let updated = self.write_repo.update(update).await?;
        Ok(updated.into())
    }
}
