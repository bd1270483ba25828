// src/infrastructure/repositories/mongo_catalog.rs
use super::error::{map_bson_ser, map_mongo, object_id};
use crate::domain::catalog::{
    Catalog, CatalogCta, CatalogReadRepository, CatalogSections, CatalogUpdate,
    CatalogWriteRepository, ColorTheme, NewCatalog,
};
use crate::domain::document::DocumentId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{Slug, SlugLookup};
use async_trait::async_trait;
use bson::{Document, doc, oid::ObjectId};
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{Collection, Database, options::ReturnDocument};
use serde::{Deserialize, Serialize};

pub const CATALOGS_COLLECTION: &str = "catalogs";

#[derive(Clone)]
pub struct MongoCatalogRepository {
    collection: Collection<CatalogRecord>,
}

impl MongoCatalogRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(CATALOGS_COLLECTION),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogRecord {
    #[serde(rename = "_id")]
    id: ObjectId,
    #[serde(default)]
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    slug: Option<String>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    hero_image: String,
    #[serde(default)]
    secondary_image: String,
    #[serde(default)]
    icon: String,
    #[serde(default)]
    color_theme: ColorTheme,
    #[serde(default)]
    sections: CatalogSections,
    #[serde(default)]
    cta: CatalogCta,
    #[serde(default)]
    published: bool,
    #[serde(default)]
    created_at: Option<bson::DateTime>,
    #[serde(default)]
    updated_at: Option<bson::DateTime>,
}

impl TryFrom<CatalogRecord> for Catalog {
    type Error = DomainError;

    fn try_from(record: CatalogRecord) -> Result<Self, Self::Error> {
        let created_at = record
            .created_at
            .map_or(DateTime::<Utc>::UNIX_EPOCH, bson::DateTime::to_chrono);
        Ok(Catalog {
            id: record.id.into(),
            title: record.title,
            slug: Slug::from_stored(record.slug),
            description: record.description,
            hero_image: record.hero_image,
            secondary_image: record.secondary_image,
            icon: record.icon,
            color_theme: record.color_theme,
            sections: record.sections,
            cta: record.cta,
            published: record.published,
            created_at,
            updated_at: record.updated_at.map_or(created_at, bson::DateTime::to_chrono),
        })
    }
}

fn published_filter(published_only: bool) -> Document {
    if published_only {
        doc! { "published": true }
    } else {
        doc! {}
    }
}

fn set_nested<T: Serialize>(set: &mut Document, key: &str, value: Option<T>) -> DomainResult<()> {
    if let Some(value) = value {
        set.insert(key, bson::to_bson(&value).map_err(map_bson_ser)?);
    }
    Ok(())
}

#[async_trait]
impl SlugLookup for MongoCatalogRepository {
    async fn slug_in_use(&self, slug: &Slug, exclude: Option<&DocumentId>) -> DomainResult<bool> {
        let mut filter = doc! { "slug": slug.as_str() };
        if let Some(id) = exclude {
            filter.insert("_id", doc! { "$ne": object_id(id)? });
        }
        let count = self
            .collection
            .count_documents(filter)
            .limit(1)
            .await
            .map_err(map_mongo)?;
        Ok(count > 0)
    }
}

#[async_trait]
impl CatalogReadRepository for MongoCatalogRepository {
    async fn find_by_id(&self, id: &DocumentId) -> DomainResult<Option<Catalog>> {
        self.collection
            .find_one(doc! { "_id": object_id(id)? })
            .await
            .map_err(map_mongo)?
            .map(Catalog::try_from)
            .transpose()
    }

    async fn find_by_slug(
        &self,
        slug: &Slug,
        published_only: bool,
    ) -> DomainResult<Option<Catalog>> {
        let mut filter = published_filter(published_only);
        filter.insert("slug", slug.as_str());
        self.collection
            .find_one(filter)
            .await
            .map_err(map_mongo)?
            .map(Catalog::try_from)
            .transpose()
    }

    async fn list(&self, include_drafts: bool) -> DomainResult<Vec<Catalog>> {
        let records: Vec<CatalogRecord> = self
            .collection
            .find(published_filter(!include_drafts))
            .sort(doc! { "createdAt": -1 })
            .await
            .map_err(map_mongo)?
            .try_collect()
            .await
            .map_err(map_mongo)?;
        records.into_iter().map(Catalog::try_from).collect()
    }
}

#[async_trait]
impl CatalogWriteRepository for MongoCatalogRepository {
    async fn insert(&self, catalog: NewCatalog) -> DomainResult<Catalog> {
        let record = CatalogRecord {
            id: object_id(&catalog.id)?,
            title: catalog.title,
            slug: Some(catalog.slug.into_inner()),
            description: catalog.description,
            hero_image: catalog.hero_image,
            secondary_image: catalog.secondary_image,
            icon: catalog.icon,
            color_theme: catalog.color_theme,
            sections: catalog.sections,
            cta: catalog.cta,
            published: catalog.published,
            created_at: Some(bson::DateTime::from_chrono(catalog.created_at)),
            updated_at: Some(bson::DateTime::from_chrono(catalog.updated_at)),
        };
        self.collection
            .insert_one(&record)
            .await
            .map_err(map_mongo)?;
        Catalog::try_from(record)
    }

    async fn update(&self, update: CatalogUpdate) -> DomainResult<Catalog> {
        let CatalogUpdate {
            id,
            title,
            slug,
            description,
            hero_image,
            secondary_image,
            icon,
            color_theme,
            sections,
            cta,
            published,
            updated_at,
        } = update;

        let mut set = doc! { "updatedAt": bson::DateTime::from_chrono(updated_at) };
        if let Some(title) = title {
            set.insert("title", title);
        }
        if let Some(slug) = slug {
            set.insert("slug", slug.into_inner());
        }
        if let Some(description) = description {
            set.insert("description", description);
        }
        if let Some(hero_image) = hero_image {
            set.insert("heroImage", hero_image);
        }
        if let Some(secondary_image) = secondary_image {
            set.insert("secondaryImage", secondary_image);
        }
        if let Some(icon) = icon {
            set.insert("icon", icon);
        }
        set_nested(&mut set, "colorTheme", color_theme)?;
        set_nested(&mut set, "sections", sections)?;
        set_nested(&mut set, "cta", cta)?;
        if let Some(published) = published {
            set.insert("published", published);
        }

        self.collection
            .find_one_and_update(doc! { "_id": object_id(&id)? }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await
            .map_err(map_mongo)?
            .ok_or_else(|| DomainError::NotFound("catalog not found".into()))
            .and_then(Catalog::try_from)
    }

    async fn delete(&self, id: &DocumentId) -> DomainResult<()> {
        let result = self
            .collection
            .delete_one(doc! { "_id": object_id(id)? })
            .await
            .map_err(map_mongo)?;
        if result.deleted_count == 0 {
            return Err(DomainError::NotFound("catalog not found".into()));
        }
        Ok(())
    }
}
