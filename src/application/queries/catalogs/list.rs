use super::CatalogQueryService;
use crate::application::{dto::CatalogDto, error::ApplicationResult};

pub struct ListCatalogsQuery {
    pub include_drafts: bool,
}

impl CatalogQueryService {
    pub async fn list_catalogs(
        &self,
        query: ListCatalogsQuery,
    ) -> ApplicationResult<Vec<CatalogDto>> {
        let catalogs = self.read_repo.list(query.include_drafts).await?;
        Ok(catalogs.into_iter().map(CatalogDto::from).collect())
    }
}
