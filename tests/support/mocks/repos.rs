// tests/support/mocks/repos.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use oseberg_backend::domain::{
    blog::{Blog, BlogReadRepository, BlogUpdate, BlogWriteRepository, NewBlog},
    catalog::{Catalog, CatalogReadRepository, CatalogUpdate, CatalogWriteRepository, NewCatalog},
    document::DocumentId,
    errors::{DomainError, DomainResult},
    knowledge::{KnowledgeBase, KnowledgeRepository},
    slug::{Slug, SlugLookup},
};
use std::sync::Mutex;

/* ------------------------------- blogs ------------------------------- */

#[derive(Default)]
pub struct InMemoryBlogs {
    items: Mutex<Vec<Blog>>,
}

impl InMemoryBlogs {
    /// Store a post directly, e.g. a legacy post without a slug.
    pub fn seed(&self, blog: Blog) {
        self.items.lock().unwrap().push(blog);
    }

    pub fn all(&self) -> Vec<Blog> {
        self.items.lock().unwrap().clone()
    }
}

#[async_trait]
impl SlugLookup for InMemoryBlogs {
    async fn slug_in_use(&self, slug: &Slug, exclude: Option<&DocumentId>) -> DomainResult<bool> {
        Ok(self.items.lock().unwrap().iter().any(|blog| {
            blog.slug.as_ref() == Some(slug) && exclude != Some(&blog.id)
        }))
    }
}

#[async_trait]
impl BlogReadRepository for InMemoryBlogs {
    async fn find_by_id(&self, id: &DocumentId) -> DomainResult<Option<Blog>> {
        Ok(self.items.lock().unwrap().iter().find(|b| &b.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug, published_only: bool) -> DomainResult<Option<Blog>> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.slug.as_ref() == Some(slug) && (b.published || !published_only))
            .cloned())
    }

    async fn list(&self, include_drafts: bool) -> DomainResult<Vec<Blog>> {
        let mut blogs: Vec<Blog> = self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|b| include_drafts || b.published)
            .cloned()
            .collect();
        blogs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(blogs)
    }
}

#[async_trait]
impl BlogWriteRepository for InMemoryBlogs {
    async fn insert(&self, blog: NewBlog) -> DomainResult<Blog> {
        let stored = Blog {
            id: blog.id,
            title: blog.title,
            slug: Some(blog.slug),
            content: blog.content,
            excerpt: blog.excerpt,
            author: blog.author,
            category: blog.category,
            image: blog.image,
            published: blog.published,
            created_at: blog.created_at,
            updated_at: blog.updated_at,
        };
        self.items.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: BlogUpdate) -> DomainResult<Blog> {
        let mut items = self.items.lock().unwrap();
        let blog = items
            .iter_mut()
            .find(|b| b.id == update.id)
            .ok_or_else(|| DomainError::NotFound("blog not found".into()))?;
        if let Some(title) = update.title {
            blog.title = title;
        }
        if let Some(slug) = update.slug {
            blog.slug = Some(slug);
        }
        if let Some(content) = update.content {
            blog.content = content;
        }
        if let Some(excerpt) = update.excerpt {
            blog.excerpt = excerpt;
        }
        if let Some(author) = update.author {
            blog.author = author;
        }
        if let Some(category) = update.category {
            blog.category = category;
        }
        if let Some(image) = update.image {
            blog.image = image;
        }
        if let Some(published) = update.published {
            blog.published = published;
        }
        blog.updated_at = update.updated_at;
        Ok(blog.clone())
    }

    async fn delete(&self, id: &DocumentId) -> DomainResult<()> {
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|b| &b.id != id);
        if items.len() == before {
            return Err(DomainError::NotFound("blog not found".into()));
        }
        Ok(())
    }
}

/* ------------------------------ catalogs ------------------------------ */

#[derive(Default)]
pub struct InMemoryCatalogs {
    items: Mutex<Vec<Catalog>>,
}

impl InMemoryCatalogs {
    pub fn all(&self) -> Vec<Catalog> {
        self.items.lock().unwrap().clone()
    }
}

#[async_trait]
impl SlugLookup for InMemoryCatalogs {
    async fn slug_in_use(&self, slug: &Slug, exclude: Option<&DocumentId>) -> DomainResult<bool> {
        Ok(self.items.lock().unwrap().iter().any(|catalog| {
            catalog.slug.as_ref() == Some(slug) && exclude != Some(&catalog.id)
        }))
    }
}

#[async_trait]
impl CatalogReadRepository for InMemoryCatalogs {
    async fn find_by_id(&self, id: &DocumentId) -> DomainResult<Option<Catalog>> {
        Ok(self.items.lock().unwrap().iter().find(|c| &c.id == id).cloned())
    }

    async fn find_by_slug(
        &self,
        slug: &Slug,
        published_only: bool,
    ) -> DomainResult<Option<Catalog>> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.slug.as_ref() == Some(slug) && (c.published || !published_only))
            .cloned())
    }

    async fn list(&self, include_drafts: bool) -> DomainResult<Vec<Catalog>> {
        let mut catalogs: Vec<Catalog> = self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|c| include_drafts || c.published)
            .cloned()
            .collect();
        catalogs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(catalogs)
    }
}

#[async_trait]
impl CatalogWriteRepository for InMemoryCatalogs {
    async fn insert(&self, catalog: NewCatalog) -> DomainResult<Catalog> {
        let stored = Catalog {
            id: catalog.id,
            title: catalog.title,
            slug: Some(catalog.slug),
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
        };
        self.items.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: CatalogUpdate) -> DomainResult<Catalog> {
        let mut items = self.items.lock().unwrap();
        let catalog = items
            .iter_mut()
            .find(|c| c.id == update.id)
            .ok_or_else(|| DomainError::NotFound("catalog not found".into()))?;
        if let Some(title) = update.title {
            catalog.title = title;
        }
        if let Some(slug) = update.slug {
            catalog.slug = Some(slug);
        }
        if let Some(description) = update.description {
            catalog.description = description;
        }
        if let Some(hero_image) = update.hero_image {
            catalog.hero_image = hero_image;
        }
        if let Some(secondary_image) = update.secondary_image {
            catalog.secondary_image = secondary_image;
        }
        if let Some(icon) = update.icon {
            catalog.icon = icon;
        }
        if let Some(color_theme) = update.color_theme {
            catalog.color_theme = color_theme;
        }
        if let Some(sections) = update.sections {
            catalog.sections = sections;
        }
        if let Some(cta) = update.cta {
            catalog.cta = cta;
        }
        if let Some(published) = update.published {
            catalog.published = published;
        }
        catalog.updated_at = update.updated_at;
        Ok(catalog.clone())
    }

    async fn delete(&self, id: &DocumentId) -> DomainResult<()> {
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|c| &c.id != id);
        if items.len() == before {
            return Err(DomainError::NotFound("catalog not found".into()));
        }
        Ok(())
    }
}

/* ------------------------------ knowledge ------------------------------ */

pub const KNOWLEDGE_ID: &str = "0000000000000000000000ff";

#[derive(Default)]
pub struct InMemoryKnowledge {
    stored: Mutex<Option<KnowledgeBase>>,
}

#[async_trait]
impl KnowledgeRepository for InMemoryKnowledge {
    async fn find(&self) -> DomainResult<Option<KnowledgeBase>> {
        Ok(self.stored.lock().unwrap().clone())
    }

    async fn upsert(
        &self,
        document: String,
        system_prompt: String,
        now: DateTime<Utc>,
    ) -> DomainResult<KnowledgeBase> {
        let mut stored = self.stored.lock().unwrap();
        let created_at = stored.as_ref().and_then(|k| k.created_at).unwrap_or(now);
        let knowledge = KnowledgeBase {
            id: Some(DocumentId::parse(KNOWLEDGE_ID)?),
            document,
            system_prompt,
            created_at: Some(created_at),
            updated_at: Some(now),
        };
        *stored = Some(knowledge.clone());
        Ok(knowledge)
    }
}
