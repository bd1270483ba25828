use crate::domain::blog::Blog;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub author: String,
    pub category: String,
    pub image: String,
    pub published: bool,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Blog> for BlogDto {
    fn from(blog: Blog) -> Self {
        let slug = blog.public_slug();
        Self {
            id: blog.id.into(),
            title: blog.title,
            slug,
            content: blog.content,
            excerpt: blog.excerpt,
            author: blog.author,
            category: blog.category,
            image: blog.image,
            published: blog.published,
            created_at: blog.created_at,
            updated_at: blog.updated_at,
        }
    }
}
