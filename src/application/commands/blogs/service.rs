// src/application/commands/blogs/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{time::Clock, util::IdGenerator},
    domain::{
        blog::{BlogReadRepository, BlogWriteRepository},
        slug::UniqueSlugService,
    },
};

pub struct BlogCommandService {
    pub(super) write_repo: Arc<dyn BlogWriteRepository>,
    pub(super) read_repo: Arc<dyn BlogReadRepository>,
    pub(super) slug_service: Arc<UniqueSlugService>,
    pub(super) ids: Arc<dyn IdGenerator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl BlogCommandService {
    pub fn new(
        write_repo: Arc<dyn BlogWriteRepository>,
        read_repo: Arc<dyn BlogReadRepository>,
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
