mod build;
mod service;

pub use service::SitemapQueryService;
