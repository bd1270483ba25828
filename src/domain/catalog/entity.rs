// src/domain/catalog/entity.rs
use crate::domain::catalog::value_objects::{CatalogCta, CatalogSections, ColorTheme};
use crate::domain::document::DocumentId;
use crate::domain::slug::{Slug, effective_slug};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Catalog {
    pub id: DocumentId,
    pub title: String,
    pub slug: Option<Slug>,
    pub description: String,
    pub hero_image: String,
    pub secondary_image: String,
    pub icon: String,
    pub color_theme: ColorTheme,
    pub sections: CatalogSections,
    pub cta: CatalogCta,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Catalog {
    pub fn public_slug(&self) -> String {
        effective_slug(self.slug.as_ref(), &self.title, &self.id)
    }
}

#[derive(Debug, Clone)]
pub struct NewCatalog {
    pub id: DocumentId,
    pub title: String,
    pub slug: Slug,
    pub description: String,
    pub hero_image: String,
    pub secondary_image: String,
    pub icon: String,
    pub color_theme: ColorTheme,
    pub sections: CatalogSections,
    pub cta: CatalogCta,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update. `None` leaves the stored field untouched.
#[derive(Debug, Clone)]
pub struct CatalogUpdate {
    pub id: DocumentId,
    pub title: Option<String>,
    pub slug: Option<Slug>,
    pub description: Option<String>,
    pub hero_image: Option<String>,
    pub secondary_image: Option<String>,
    pub icon: Option<String>,
    pub color_theme: Option<ColorTheme>,
    pub sections: Option<CatalogSections>,
    pub cta: Option<CatalogCta>,
    pub published: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

impl CatalogUpdate {
    pub fn new(id: DocumentId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            description: None,
            hero_image: None,
            secondary_image: None,
            icon: None,
            color_theme: None,
            sections: None,
            cta: None,
            published: None,
            updated_at,
        }
    }

    pub fn with_slug(mut self, slug: Slug) -> Self {
        self.slug = Some(slug);
        self
    }
}
