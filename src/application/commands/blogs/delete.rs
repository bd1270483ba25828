// src/application/commands/blogs/delete.rs
use super::BlogCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{document::DocumentId, errors::DomainError},
};

pub struct DeleteBlogCommand {
    pub id: String,
}

impl BlogCommandService {
    pub async fn delete_blog(&self, command: DeleteBlogCommand) -> ApplicationResult<()> {
        let id = DocumentId::parse(&command.id)
            .map_err(|_| ApplicationError::not_found("Blog not found"))?;

        match self.write_repo.delete(&id).await {
            Ok(()) => {
                tracing::info!(id = %id, "blog deleted");
                Ok(())
            }
            Err(DomainError::NotFound(_)) => Err(ApplicationError::not_found("Blog not found")),
            Err(err) => Err(err.into()),
        }
    }
}
