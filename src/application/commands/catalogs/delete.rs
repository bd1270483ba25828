// src/application/commands/catalogs/delete.rs
use super::CatalogCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{document::DocumentId, errors::DomainError},
};

pub struct DeleteCatalogCommand {
    pub id: String,
}

impl CatalogCommandService {
    pub async fn delete_catalog(&self, command: DeleteCatalogCommand) -> ApplicationResult<()> {
        let id = DocumentId::parse(&command.id)
            .map_err(|_| ApplicationError::not_found("Catalog not found"))?;

        match self.write_repo.delete(&id).await {
            Ok(()) => {
                tracing::info!(id = %id, "catalog deleted");
                Ok(())
            }
            Err(DomainError::NotFound(_)) => Err(ApplicationError::not_found("Catalog not found")),
            Err(err) => Err(err.into()),
        }
    }
}
