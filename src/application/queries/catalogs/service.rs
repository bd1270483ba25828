use std::sync::Arc;

use crate::domain::catalog::CatalogReadRepository;

pub struct CatalogQueryService {
    pub(super) read_repo: Arc<dyn CatalogReadRepository>,
}

impl CatalogQueryService {
    pub fn new(read_repo: Arc<dyn CatalogReadRepository>) -> Self {
        Self { read_repo }
    }
}
