// src/domain/catalog/seed.rs
use crate::domain::catalog::value_objects::{CatalogCta, CatalogSections, ColorTheme};
use crate::domain::errors::{DomainError, DomainResult};
use serde::Deserialize;

const BUILTIN_CATALOGS: &str = include_str!("../../../seed/catalogs.json");

/// Catalog shipped with the service and restored by the seed operation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedCatalog {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub hero_image: String,
    #[serde(default)]
    pub secondary_image: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color_theme: ColorTheme,
    #[serde(default)]
    pub sections: CatalogSections,
    #[serde(default)]
    pub cta: CatalogCta,
    #[serde(default)]
    pub published: bool,
}

pub fn builtin_catalogs() -> DomainResult<Vec<SeedCatalog>> {
    serde_json::from_str(BUILTIN_CATALOGS)
        .map_err(|err| DomainError::Validation(format!("invalid built-in catalog data: {err}")))
}
