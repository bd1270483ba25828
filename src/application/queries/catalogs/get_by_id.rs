use super::CatalogQueryService;
use crate::{
    application::{
        dto::CatalogDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::document::DocumentId,
};

pub struct GetCatalogByIdQuery {
    pub id: String,
}

impl CatalogQueryService {
    pub async fn get_catalog_by_id(
        &self,
        query: GetCatalogByIdQuery,
    ) -> ApplicationResult<CatalogDto> {
        let id = DocumentId::parse(query.id)
            .map_err(|_| ApplicationError::not_found("Catalog not found"))?;
        self.read_repo
            .find_by_id(&id)
            .await?
            .map(CatalogDto::from)
            .ok_or_else(|| ApplicationError::not_found("Catalog not found"))
    }
}
