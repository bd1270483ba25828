// src/application/commands/catalogs/create.rs
use super::CatalogCommandService;
use crate::{
    application::{
        dto::CatalogDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::catalog::{CatalogCta, CatalogSections, ColorTheme, NewCatalog},
};

/// Catalog fields besides title and slug, shared by create and update.
#[derive(Debug, Default)]
pub struct CatalogContent {
    pub description: Option<String>,
    pub hero_image: Option<String>,
    pub secondary_image: Option<String>,
    pub icon: Option<String>,
    pub color_theme: Option<ColorTheme>,
    pub sections: Option<CatalogSections>,
    pub cta: Option<CatalogCta>,
    pub published: Option<bool>,
}

#[derive(Debug, Default)]
pub struct CreateCatalogCommand {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: CatalogContent,
}

impl CatalogCommandService {
    pub async fn create_catalog(
        &self,
        command: CreateCatalogCommand,
    ) -> ApplicationResult<CatalogDto> {
        let title = command
            .title
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| ApplicationError::validation("Title is required"))?;

        let id = self.ids.next_id();
        let slug = self
            .slug_service
            .assign(
                self.read_repo.as_ref(),
                command.slug.as_deref(),
                &title,
                &id,
                None,
            )
            .await?;

        let content = command.content;
        let now = self.clock.now();
        let new_catalog = NewCatalog {
            id,
            title,
            slug,
            description: content.description.unwrap_or_default(),
            hero_image: content.hero_image.unwrap_or_default(),
            secondary_image: content.secondary_image.unwrap_or_default(),
            icon: content.icon.unwrap_or_default(),
            color_theme: content.color_theme.unwrap_or_default(),
            sections: content.sections.unwrap_or_default(),
            cta: content.cta.unwrap_or_default(),
            published: content.published.unwrap_or(false),
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_catalog).await?;
        tracing::info!(id = %created.id, slug = %created.public_slug(), "catalog created");
        Ok(created.into())
    }
}
