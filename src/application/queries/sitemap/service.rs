use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{blog::BlogReadRepository, catalog::CatalogReadRepository},
};

pub struct SitemapQueryService {
    pub(super) blogs: Arc<dyn BlogReadRepository>,
    pub(super) catalogs: Arc<dyn CatalogReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) site_url: String,
}

impl SitemapQueryService {
    pub fn new(
        blogs: Arc<dyn BlogReadRepository>,
        catalogs: Arc<dyn CatalogReadRepository>,
        clock: Arc<dyn Clock>,
        site_url: impl Into<String>,
    ) -> Self {
        let site_url: String = site_url.into();
        Self {
            blogs,
            catalogs,
            clock,
            site_url: site_url.trim_end_matches('/').to_string(),
        }
    }
}
