use crate::domain::catalog::{Catalog, CatalogCta, CatalogSections, ColorTheme};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub hero_image: String,
    pub secondary_image: String,
    pub icon: String,
    pub color_theme: ColorTheme,
    pub sections: CatalogSections,
    pub cta: CatalogCta,
    pub published: bool,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Catalog> for CatalogDto {
    fn from(catalog: Catalog) -> Self {
        let slug = catalog.public_slug();
        Self {
            id: catalog.id.into(),
            title: catalog.title,
            slug,
            description: catalog.description,
            hero_image: catalog.hero_image,
            secondary_image: catalog.secondary_image,
            icon: catalog.icon,
            color_theme: catalog.color_theme,
            sections: catalog.sections,
            cta: catalog.cta,
            published: catalog.published,
            created_at: catalog.created_at,
            updated_at: catalog.updated_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SeedAction {
    Created,
    Updated,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SeedResultDto {
    pub slug: String,
    pub action: SeedAction,
}
