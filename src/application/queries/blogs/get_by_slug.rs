use super::BlogQueryService;
use crate::{
    application::{
        dto::BlogDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{blog::Blog, document::DocumentId, slug::Slug},
};

pub struct GetBlogBySlugQuery {
    pub slug: String,
}

impl BlogQueryService {
    /// Public lookup of a published post. Accepts a stored slug, a raw id
    /// (old links) or the slug derived from the title of a post saved
    /// without one.
    pub async fn get_blog_by_slug(&self, query: GetBlogBySlugQuery) -> ApplicationResult<BlogDto> {
        self.find_published(&query.slug)
            .await?
            .map(BlogDto::from)
            .ok_or_else(|| ApplicationError::not_found("Blog not found"))
    }

    async fn find_published(&self, value: &str) -> ApplicationResult<Option<Blog>> {
        let Ok(slug) = Slug::new(value) else {
            return Ok(None);
        };

        if let Some(blog) = self.read_repo.find_by_slug(&slug, true).await? {
            return Ok(Some(blog));
        }

        if let Ok(id) = DocumentId::parse(value) {
            if let Some(blog) = self.read_repo.find_by_id(&id).await? {
                if blog.published {
                    return Ok(Some(blog));
                }
            }
        }

        let published = self.read_repo.list(false).await?;
        Ok(published
            .into_iter()
            .find(|blog| blog.public_slug() == value))
    }
}
