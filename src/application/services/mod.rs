// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            blogs::BlogCommandService, catalogs::CatalogCommandService, chat::ChatCommandService,
            knowledge::KnowledgeCommandService, submissions::SubmissionCommandService,
        },
        ports::{
            ai::TextGenerator,
            time::Clock,
            util::{IdGenerator, SlugGenerator},
        },
        queries::{
            blogs::BlogQueryService, catalogs::CatalogQueryService,
            knowledge::KnowledgeQueryService, sitemap::SitemapQueryService,
        },
    },
    domain::{
        blog::{BlogReadRepository, BlogWriteRepository},
        catalog::{CatalogReadRepository, CatalogWriteRepository},
        knowledge::KnowledgeRepository,
        ledger::{LedgerSheet, SubmissionLedger},
        slug::UniqueSlugService,
    },
};

/// Everything the application layer needs from the outside world.
pub struct ServiceDependencies {
    pub blog_write_repo: Arc<dyn BlogWriteRepository>,
    pub blog_read_repo: Arc<dyn BlogReadRepository>,
    pub catalog_write_repo: Arc<dyn CatalogWriteRepository>,
    pub catalog_read_repo: Arc<dyn CatalogReadRepository>,
    pub knowledge_repo: Arc<dyn KnowledgeRepository>,
    /// Absent when the submission ledger is not configured.
    pub ledger_sheet: Option<Arc<dyn LedgerSheet>>,
    /// Absent when no AI key is configured.
    pub text_generator: Option<Arc<dyn TextGenerator>>,
    pub clock: Arc<dyn Clock>,
    pub slugger: Arc<dyn SlugGenerator>,
    pub ids: Arc<dyn IdGenerator>,
    pub site_url: String,
}

pub struct ApplicationServices {
    pub blog_commands: Arc<BlogCommandService>,
    pub blog_queries: Arc<BlogQueryService>,
    pub catalog_commands: Arc<CatalogCommandService>,
    pub catalog_queries: Arc<CatalogQueryService>,
    pub knowledge_commands: Arc<KnowledgeCommandService>,
    pub knowledge_queries: Arc<KnowledgeQueryService>,
    pub chat_commands: Arc<ChatCommandService>,
    pub submission_commands: Arc<SubmissionCommandService>,
    pub sitemap_queries: Arc<SitemapQueryService>,
}

impl ApplicationServices {
    pub fn new(deps: ServiceDependencies) -> Self {
        let slug_service = Arc::new(UniqueSlugService::new(Arc::clone(&deps.slugger)));
        let ledger = deps.ledger_sheet.map(|sheet| {
            Arc::new(SubmissionLedger::new(sheet, Arc::clone(&deps.clock)))
        });

        let blog_commands = Arc::new(BlogCommandService::new(
            Arc::clone(&deps.blog_write_repo),
            Arc::clone(&deps.blog_read_repo),
            Arc::clone(&slug_service),
            Arc::clone(&deps.ids),
            Arc::clone(&deps.clock),
        ));
        let blog_queries = Arc::new(BlogQueryService::new(Arc::clone(&deps.blog_read_repo)));

        let catalog_commands = Arc::new(CatalogCommandService::new(
            Arc::clone(&deps.catalog_write_repo),
            Arc::clone(&deps.catalog_read_repo),
            Arc::clone(&slug_service),
            Arc::clone(&deps.ids),
            Arc::clone(&deps.clock),
        ));
        let catalog_queries =
            Arc::new(CatalogQueryService::new(Arc::clone(&deps.catalog_read_repo)));

        let knowledge_commands = Arc::new(KnowledgeCommandService::new(
            Arc::clone(&deps.knowledge_repo),
            Arc::clone(&deps.clock),
        ));
        let knowledge_queries = Arc::new(KnowledgeQueryService::new(
            Arc::clone(&deps.knowledge_repo),
            Arc::clone(&deps.clock),
        ));

        let chat_commands = Arc::new(ChatCommandService::new(
            Arc::clone(&deps.knowledge_repo),
            deps.text_generator,
            ledger.clone(),
            Arc::clone(&deps.clock),
        ));
        let submission_commands = Arc::new(SubmissionCommandService::new(ledger));

        let sitemap_queries = Arc::new(SitemapQueryService::new(
            Arc::clone(&deps.blog_read_repo),
            Arc::clone(&deps.catalog_read_repo),
            Arc::clone(&deps.clock),
            deps.site_url,
        ));

        Self {
            blog_commands,
            blog_queries,
            catalog_commands,
            catalog_queries,
            knowledge_commands,
            knowledge_queries,
            chat_commands,
            submission_commands,
            sitemap_queries,
        }
    }
}
