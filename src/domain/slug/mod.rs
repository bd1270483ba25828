// src/domain/slug/mod.rs
mod service;

pub use service::UniqueSlugService;

use crate::domain::document::DocumentId;
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::fmt;

/// Derive a URL-safe slug from free text.
///
/// Lowercases and trims the input, drops every character that is not an ASCII
/// word character, whitespace or hyphen, and joins the remaining words with a
/// single hyphen. Input without any word characters yields an empty string.
pub fn generate_slug(title: &str) -> String {
    let lowered = title.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_separator = false;

    for ch in lowered.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch);
        } else if ch == '_' || ch == '-' || ch.is_whitespace() {
            pending_separator = true;
        }
        // anything else is removed and does not break a separator run
    }

    slug
}

/// Slug exposed for a stored document: its own slug, else one derived from
/// the title, else the document id.
pub fn effective_slug(stored: Option<&Slug>, title: &str, id: &DocumentId) -> String {
    if let Some(slug) = stored {
        return slug.as_str().to_string();
    }
    let derived = generate_slug(title);
    if derived.is_empty() {
        id.as_str().to_string()
    } else {
        derived
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        Ok(Self(value))
    }

    /// Build a slug from a stored value, treating blank values as absent.
    pub fn from_stored(value: Option<String>) -> Option<Self> {
        value.and_then(|v| Self::new(v).ok())
    }

    pub fn from_id(id: &DocumentId) -> Self {
        Self(id.as_str().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

/// Collection probe used while picking a free slug.
#[async_trait]
pub trait SlugLookup: Send + Sync {
    async fn slug_in_use(&self, slug: &Slug, exclude: Option<&DocumentId>) -> DomainResult<bool>;
}
