// src/application/commands/blogs/create.rs
use super::BlogCommandService;
use crate::{
    application::{
        dto::BlogDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::blog::{NewBlog, derive_excerpt},
};

const DEFAULT_AUTHOR: &str = "Admin";
const DEFAULT_CATEGORY: &str = "General";

#[derive(Debug, Default)]
pub struct CreateBlogCommand {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub published: Option<bool>,
    pub slug: Option<String>,
}

impl BlogCommandService {
    pub async fn create_blog(&self, command: CreateBlogCommand) -> ApplicationResult<BlogDto> {
        let (title, content) = match (non_empty(command.title), non_empty(command.content)) {
            (Some(title), Some(content)) => (title, content),
            _ => return Err(ApplicationError::validation("Title and content are required")),
        };

        let id = self.ids.next_id();
        let slug = self
            .slug_service
            .assign(
                self.read_repo.as_ref(),
                command.slug.as_deref(),
                &title,
                &id,
                None,
            )
            .await?;

        let excerpt = non_empty(command.excerpt).unwrap_or_else(|| derive_excerpt(&content));
        let now = self.clock.now();

        let new_blog = NewBlog {
            id,
            title,
            slug,
            content,
            excerpt,
            author: non_empty(command.author).unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            category: non_empty(command.category)
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            image: command.image.unwrap_or_default(),
            published: command.published.unwrap_or(false),
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_blog).await?;
        tracing::info!(id = %created.id, slug = %created.public_slug(), "blog created");
        Ok(created.into())
    }
}

pub(super) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
