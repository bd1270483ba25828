// src/domain/slug/service.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::document::DocumentId;
use crate::domain::errors::DomainResult;

use super::{Slug, SlugLookup};

/// Domain service responsible for producing collection-unique slugs.
///
/// Uniqueness is established by probing the collection before the caller
/// writes, so two concurrent writers deriving the same slug can still collide.
pub struct UniqueSlugService {
    generator: Arc<dyn SlugGenerator>,
}

impl UniqueSlugService {
    pub fn new(generator: Arc<dyn SlugGenerator>) -> Self {
        Self { generator }
    }

    /// Pick the slug for a document: the explicit slug when one is given,
    /// otherwise one derived from `title`, suffixed until it is free.
    /// Falls back to the document id when nothing usable remains.
    pub async fn assign<L>(
        &self,
        lookup: &L,
        explicit: Option<&str>,
        title: &str,
        id: &DocumentId,
        exclude: Option<&DocumentId>,
    ) -> DomainResult<Slug>
    where
        L: SlugLookup + ?Sized,
    {
        let candidate = match explicit.filter(|value| !value.trim().is_empty()) {
            Some(value) => value.to_string(),
            None => self.generator.slugify(title),
        };

        if candidate.is_empty() {
            return Ok(Slug::from_id(id));
        }

        self.ensure_unique(lookup, &candidate, exclude).await
    }

    /// Return `candidate` if no other document uses it, else the first free
    /// `candidate-N` for N = 1, 2, ...
    pub async fn ensure_unique<L>(
        &self,
        lookup: &L,
        candidate: &str,
        exclude: Option<&DocumentId>,
    ) -> DomainResult<Slug>
    where
        L: SlugLookup + ?Sized,
    {
        let mut slug = Slug::new(candidate)?;
        let mut counter = 1u64;

        while lookup.slug_in_use(&slug, exclude).await? {
            slug = Slug::new(format!("{candidate}-{counter}"))?;
            counter += 1;
        }

        Ok(slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;

    struct AsciiSlugger;

    impl SlugGenerator for AsciiSlugger {
        fn slugify(&self, input: &str) -> String {
            crate::domain::slug::generate_slug(input)
        }
    }

    /// slug -> owning document id
    struct TakenSlugs(HashMap<String, String>);

    #[async_trait]
    impl SlugLookup for TakenSlugs {
        async fn slug_in_use(
            &self,
            slug: &Slug,
            exclude: Option<&DocumentId>,
        ) -> DomainResult<bool> {
            Ok(match self.0.get(slug.as_str()) {
                Some(owner) => exclude.is_none_or(|id| id.as_str() != owner),
                None => false,
            })
        }
    }

    fn id(n: u8) -> DocumentId {
        DocumentId::parse(format!("{n:024x}")).unwrap()
    }

    fn taken(pairs: &[(&str, u8)]) -> TakenSlugs {
        TakenSlugs(
            pairs
                .iter()
                .map(|(slug, owner)| ((*slug).to_string(), id(*owner).as_str().to_string()))
                .collect(),
        )
    }

    fn service() -> UniqueSlugService {
        UniqueSlugService::new(Arc::new(AsciiSlugger))
    }

    #[tokio::test]
    async fn free_candidate_is_kept() {
        let lookup = taken(&[]);
        let slug = service().ensure_unique(&lookup, "a-b", None).await.unwrap();
        assert_eq!(slug.as_str(), "a-b");
    }

    #[tokio::test]
    async fn collisions_get_the_next_free_suffix() {
        let lookup = taken(&[("a-b", 1), ("a-b-1", 2)]);
        let slug = service().ensure_unique(&lookup, "a-b", None).await.unwrap();
        assert_eq!(slug.as_str(), "a-b-2");
    }

    #[tokio::test]
    async fn own_slug_does_not_collide_when_excluded() {
        let lookup = taken(&[("a-b", 1)]);
        let slug = service()
            .ensure_unique(&lookup, "a-b", Some(&id(1)))
            .await
            .unwrap();
        assert_eq!(slug.as_str(), "a-b");
    }

    #[tokio::test]
    async fn explicit_slug_wins_over_title_but_is_still_deduplicated() {
        let lookup = taken(&[("makhana", 3)]);
        let slug = service()
            .assign(&lookup, Some("makhana"), "Other title", &id(9), None)
            .await
            .unwrap();
        assert_eq!(slug.as_str(), "makhana-1");
    }

    #[tokio::test]
    async fn blank_explicit_slug_falls_back_to_title() {
        let lookup = taken(&[]);
        let slug = service()
            .assign(&lookup, Some("  "), "Spices Catalog", &id(9), None)
            .await
            .unwrap();
        assert_eq!(slug.as_str(), "spices-catalog");
    }

    #[tokio::test]
    async fn untitled_documents_use_their_id() {
        let lookup = taken(&[]);
        let slug = service()
            .assign(&lookup, None, "???", &id(7), None)
            .await
            .unwrap();
        assert_eq!(slug.as_str(), id(7).as_str());
    }
}
