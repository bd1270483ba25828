// src/application/commands/blogs/update.rs
use super::{BlogCommandService, create::non_empty};
use crate::{
    application::{
        dto::BlogDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        blog::BlogUpdate,
        document::DocumentId,
        slug::Slug,
    },
};

/// Partial update; `None` fields are left as stored.
#[derive(Debug, Default)]
pub struct UpdateBlogCommand {
    pub id: String,
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
    pub async fn update_blog(&self, command: UpdateBlogCommand) -> ApplicationResult<BlogDto> {
        let id = DocumentId::parse(&command.id)
            .map_err(|_| ApplicationError::not_found("Blog not found"))?;
        let existing = self
            .read_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Blog not found"))?;

        // A new title re-derives the slug unless the caller pinned one.
        let slug = match (&command.title, non_empty(command.slug)) {
            (_, Some(explicit)) => Some(Slug::new(explicit)?),
            (Some(title), None) if !title.is_empty() => Some(
                self.slug_service
                    .assign(self.read_repo.as_ref(), None, title, &existing.id, Some(&existing.id))
                    .await?,
            ),
            _ => None,
        };

        let update = BlogUpdate::new(id, self.clock.now())
            .with_title(command.title)
            .with_slug(slug)
            .with_content(command.content)
            .with_excerpt(command.excerpt)
            .with_author(command.author)
            .with_category(command.category)
            .with_image(command.image)
            .with_published(command.published);

        let updated = self.write_repo.update(update).await?;
        Ok(updated.into())
    }
}
