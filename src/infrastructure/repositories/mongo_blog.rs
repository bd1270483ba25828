// src/infrastructure/repositories/mongo_blog.rs
use super::error::{map_mongo, object_id};
use crate::domain::blog::{Blog, BlogReadRepository, BlogUpdate, BlogWriteRepository, NewBlog};
use crate::domain::document::DocumentId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{Slug, SlugLookup};
use async_trait::async_trait;
use bson::{Document, doc, oid::ObjectId};
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{Collection, Database, options::ReturnDocument};
use serde::{Deserialize, Serialize};

pub const BLOGS_COLLECTION: &str = "blogs";

#[derive(Clone)]
pub struct MongoBlogRepository {
    collection: Collection<BlogRecord>,
}

impl MongoBlogRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(BLOGS_COLLECTION),
        }
    }
}

/// Stored shape. Every field but `_id` may be missing on documents written by
/// older admin builds.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BlogRecord {
    #[serde(rename = "_id")]
    id: ObjectId,
    #[serde(default)]
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    slug: Option<String>,
    #[serde(default)]
    content: String,
    #[serde(default)]
    excerpt: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    published: bool,
    #[serde(default)]
    created_at: Option<bson::DateTime>,
    #[serde(default)]
    updated_at: Option<bson::DateTime>,
}

impl TryFrom<BlogRecord> for Blog {
    type Error = DomainError;

    fn try_from(record: BlogRecord) -> Result<Self, Self::Error> {
        let created_at = record
            .created_at
            .map_or(DateTime::<Utc>::UNIX_EPOCH, bson::DateTime::to_chrono);
        Ok(Blog {
            id: record.id.into(),
            title: record.title,
            slug: Slug::from_stored(record.slug),
            content: record.content,
            excerpt: record.excerpt,
            author: record.author,
            category: record.category,
            image: record.image,
            published: record.published,
            created_at,
            updated_at: record.updated_at.map_or(created_at, bson::DateTime::to_chrono),
        })
    }
}

fn published_filter(published_only: bool) -> Document {
    if published_only {
        doc! { "published": true }
    } else {
        doc! {}
    }
}

#[async_trait]
impl SlugLookup for MongoBlogRepository {
    async fn slug_in_use(&self, slug: &Slug, exclude: Option<&DocumentId>) -> DomainResult<bool> {
        let mut filter = doc! { "slug": slug.as_str() };
        if let Some(id) = exclude {
            filter.insert("_id", doc! { "$ne": object_id(id)? });
        }
        let count = self
            .collection
            .count_documents(filter)
            .limit(1)
            .await
            .map_err(map_mongo)?;
        Ok(count > 0)
    }
}

#[async_trait]
impl BlogReadRepository for MongoBlogRepository {
    async fn find_by_id(&self, id: &DocumentId) -> DomainResult<Option<Blog>> {
        self.collection
            .find_one(doc! { "_id": object_id(id)? })
            .await
            .map_err(map_mongo)?
            .map(Blog::try_from)
            .transpose()
    }

    async fn find_by_slug(&self, slug: &Slug, published_only: bool) -> DomainResult<Option<Blog>> {
        let mut filter = published_filter(published_only);
        filter.insert("slug", slug.as_str());
        self.collection
            .find_one(filter)
            .await
            .map_err(map_mongo)?
            .map(Blog::try_from)
            .transpose()
    }

    async fn list(&self, include_drafts: bool) -> DomainResult<Vec<Blog>> {
        let records: Vec<BlogRecord> = self
            .collection
            .find(published_filter(!include_drafts))
            .sort(doc! { "createdAt": -1 })
            .await
            .map_err(map_mongo)?
            .try_collect()
            .await
            .map_err(map_mongo)?;
        records.into_iter().map(Blog::try_from).collect()
    }
}

#[async_trait]
impl BlogWriteRepository for MongoBlogRepository {
    async fn insert(&self, blog: NewBlog) -> DomainResult<Blog> {
        let record = BlogRecord {
            id: object_id(&blog.id)?,
            title: blog.title,
            slug: Some(blog.slug.into_inner()),
            content: blog.content,
            excerpt: blog.excerpt,
            author: blog.author,
            category: blog.category,
            image: blog.image,
            published: blog.published,
            created_at: Some(bson::DateTime::from_chrono(blog.created_at)),
            updated_at: Some(bson::DateTime::from_chrono(blog.updated_at)),
        };
        self.collection
            .insert_one(&record)
            .await
            .map_err(map_mongo)?;
        Blog::try_from(record)
    }

    async fn update(&self, update: BlogUpdate) -> DomainResult<Blog> {
        let BlogUpdate {
            id,
            title,
            slug,
            content,
            excerpt,
            author,
            category,
            image,
            published,
            updated_at,
        } = update;

        let mut set = doc! { "updatedAt": bson::DateTime::from_chrono(updated_at) };
        if let Some(title) = title {
            set.insert("title", title);
        }
        if let Some(slug) = slug {
            set.insert("slug", slug.into_inner());
        }
        if let Some(content) = content {
            set.insert("content", content);
        }
        if let Some(excerpt) = excerpt {
            set.insert("excerpt", excerpt);
        }
        if let Some(author) = author {
            set.insert("author", author);
        }
        if let Some(category) = category {
            set.insert("category", category);
        }
        if let Some(image) = image {
            set.insert("image", image);
        }
        if let Some(published) = published {
            set.insert("published", published);
        }

        self.collection
            .find_one_and_update(doc! { "_id": object_id(&id)? }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await
            .map_err(map_mongo)?
            .ok_or_else(|| DomainError::NotFound("blog not found".into()))
            .and_then(Blog::try_from)
    }

    async fn delete(&self, id: &DocumentId) -> DomainResult<()> {
        let result = self
            .collection
            .delete_one(doc! { "_id": object_id(id)? })
            .await
            .map_err(map_mongo)?;
        if result.deleted_count == 0 {
            return Err(DomainError::NotFound("blog not found".into()));
        }
        Ok(())
    }
}
