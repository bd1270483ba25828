// src/domain/blog/entity.rs
use crate::domain::document::DocumentId;
use crate::domain::slug::{Slug, effective_slug};
use chrono::{DateTime, Utc};

const EXCERPT_CHARS: usize = 200;

#[derive(Debug, Clone)]
pub struct Blog {
    pub id: DocumentId,
    pub title: String,
    pub slug: Option<Slug>,
    pub content: String,
    pub excerpt: String,
    pub author: String,
    pub category: String,
    pub image: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Blog {
    /// Slug used in public URLs, also for legacy posts stored without one.
    pub fn public_slug(&self) -> String {
        effective_slug(self.slug.as_ref(), &self.title, &self.id)
    }
}

#[derive(Debug, Clone)]
pub struct NewBlog {
    pub id: DocumentId,
    pub title: String,
    pub slug: Slug,
    pub content: String,
    pub excerpt: String,
    pub author: String,
    pub category: String,
    pub image: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct BlogUpdate {
    pub id: DocumentId,
    pub title: Option<String>,
    pub slug: Option<Slug>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub published: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

impl BlogUpdate {
    pub fn new(id: DocumentId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            content: None,
            excerpt: None,
            author: None,
            category: None,
            image: None,
            published: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    pub fn with_slug(mut self, slug: Option<Slug>) -> Self {
        self.slug = slug;
        self
    }

    pub fn with_content(mut self, content: Option<String>) -> Self {
        self.content = content;
        self
    }

    pub fn with_excerpt(mut self, excerpt: Option<String>) -> Self {
        self.excerpt = excerpt;
        self
    }

    pub fn with_author(mut self, author: Option<String>) -> Self {
        self.author = author;
        self
    }

    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    pub fn with_image(mut self, image: Option<String>) -> Self {
        self.image = image;
        self
    }

    pub fn with_published(mut self, published: Option<bool>) -> Self {
        self.published = published;
        self
    }
}

/// Plain-text teaser for a post body: markup removed, cut to 200 characters
/// and followed by an ellipsis.
pub fn derive_excerpt(content: &str) -> String {
    let mut text = String::with_capacity(content.len());
    let mut rest = content;

    while let Some(open) = rest.find('<') {
        text.push_str(&rest[..open]);
        match rest[open..].find('>') {
            Some(close) => rest = &rest[open + close + 1..],
            None => {
                text.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    text.push_str(rest);

    let mut excerpt: String = text.chars().take(EXCERPT_CHARS).collect();
    excerpt.push_str("...");
    excerpt
}
