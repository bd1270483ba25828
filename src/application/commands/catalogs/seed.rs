// src/application/commands/catalogs/seed.rs
use super::CatalogCommandService;
use crate::{
    application::{
        dto::{SeedAction, SeedResultDto},
        error::ApplicationResult,
    },
    domain::{
        catalog::{CatalogUpdate, NewCatalog, builtin_catalogs},
        slug::Slug,
    },
};

impl CatalogCommandService {
    /// Restore the built-in catalogs, matching existing documents by slug.
    pub async fn seed_catalogs(&self) -> ApplicationResult<Vec<SeedResultDto>> {
        let mut results = Vec::new();

        for seed in builtin_catalogs()? {
            let slug = Slug::new(seed.slug)?;
            let now = self.clock.now();

            let action = match self.read_repo.find_by_slug(&slug, false).await? {
                Some(existing) => {
                    let mut update = CatalogUpdate::new(existing.id, now).with_slug(slug.clone());
                    update.title = Some(seed.title);
                    update.description = Some(seed.description);
                    update.hero_image = Some(seed.hero_image);
                    update.secondary_image = Some(seed.secondary_image);
                    update.icon = Some(seed.icon);
                    update.color_theme = Some(seed.color_theme);
                    update.sections = Some(seed.sections);
                    update.cta = Some(seed.cta);
                    update.published = Some(seed.published);
                    self.write_repo.update(update).await?;
                    SeedAction::Updated
                }
                None => {
                    self.write_repo
                        .insert(NewCatalog {
                            id: self.ids.next_id(),
                            title: seed.title,
                            slug: slug.clone(),
                            description: seed.description,
                            hero_image: seed.hero_image,
                            secondary_image: seed.secondary_image,
                            icon: seed.icon,
                            color_theme: seed.color_theme,
                            sections: seed.sections,
                            cta: seed.cta,
                            published: seed.published,
                            created_at: now,
                            updated_at: now,
                        })
                        .await?;
                    SeedAction::Created
                }
            };

            tracing::info!(slug = %slug, ?action, "catalog seeded");
            results.push(SeedResultDto {
                slug: slug.into_inner(),
                action,
            });
        }

        Ok(results)
    }
}
