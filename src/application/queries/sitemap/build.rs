use super::SitemapQueryService;
use crate::application::{
    dto::{ChangeFrequency, SitemapEntryDto},
    error::ApplicationResult,
};
use chrono::{DateTime, Utc};

impl SitemapQueryService {
    /// Static pages followed by every published post and catalog. A
    /// collection that cannot be read is left out rather than failing the
    /// whole sitemap.
    pub async fn build_sitemap(&self) -> ApplicationResult<Vec<SitemapEntryDto>> {
        let now = self.clock.now();
        let mut entries = vec![
            self.entry("", now, ChangeFrequency::Weekly, 1.0),
            self.entry("/catalog", now, ChangeFrequency::Weekly, 0.9),
            self.entry("/blog", now, ChangeFrequency::Daily, 0.9),
        ];

        match self.blogs.list(false).await {
            Ok(blogs) => entries.extend(blogs.iter().map(|blog| {
                self.entry(
                    &format!("/blog/{}", blog.public_slug()),
                    blog.updated_at,
                    ChangeFrequency::Weekly,
                    0.8,
                )
            })),
            Err(err) => tracing::error!(error = %err, "sitemap: failed to list blogs"),
        }

        match self.catalogs.list(false).await {
            Ok(catalogs) => entries.extend(catalogs.iter().map(|catalog| {
                self.entry(
                    &format!("/catalog/{}", catalog.public_slug()),
                    catalog.updated_at,
                    ChangeFrequency::Monthly,
                    0.8,
                )
            })),
            Err(err) => tracing::error!(error = %err, "sitemap: failed to list catalogs"),
        }

        Ok(entries)
    }

    fn entry(
        &self,
        path: &str,
        last_modified: DateTime<Utc>,
        change_frequency: ChangeFrequency,
        priority: f32,
    ) -> SitemapEntryDto {
        SitemapEntryDto {
            url: format!("{}{path}", self.site_url),
            last_modified,
            change_frequency,
            priority,
        }
    }
}
