// src/application/commands/catalogs/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{time::Clock, util::IdGenerator},
    domain::{
        catalog::{CatalogReadRepository, CatalogWriteRepository},
        slug::UniqueSlugService,
    },
};

pub struct CatalogCommandService {
    pub(super) write_repo: Arc<dyn CatalogWriteRepository>,
    pub(super) read_repo: Arc<dyn CatalogReadRepository>,
    pub(super) slug_service: Arc<UniqueSlugService>,
    pub(super) ids: Arc<dyn IdGenerator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CatalogCommandService {
    pub fn new(
        write_repo: Arc<dyn CatalogWriteRepository>,
        read_repo: Arc<dyn CatalogReadRepository>,
        slug_service: Arc<UniqueSlugService>,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            ids,
            clock,
        }
    }
}
