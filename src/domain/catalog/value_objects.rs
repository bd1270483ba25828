// src/domain/catalog/value_objects.rs
//
// Nested catalog content. Every field defaults so documents edited by hand or
// written by older admin builds still load.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorTheme {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub gradient: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductDescription {
    pub title: String,
    pub content: Vec<String>,
    pub image: String,
    pub badges: Vec<String>,
}

/// One product variant: a `name` plus whatever attributes the catalog lists
/// for it (size, purity, origin, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct CatalogVariant(pub BTreeMap<String, String>);

impl CatalogVariant {
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Specification {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogSections {
    pub product_description: ProductDescription,
    pub variants: Vec<CatalogVariant>,
    pub packaging: Vec<String>,
    pub specifications: Vec<Specification>,
    pub certifications: Vec<String>,
    pub use_cases: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogCta {
    pub title: String,
    pub description: String,
    pub button_text: String,
}
