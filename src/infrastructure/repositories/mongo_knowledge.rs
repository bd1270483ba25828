// src/infrastructure/repositories/mongo_knowledge.rs
use super::error::map_mongo;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::knowledge::{KnowledgeBase, KnowledgeRepository, entity::KNOWLEDGE_TYPE};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use chrono::{DateTime, Utc};
use mongodb::{Collection, Database, options::ReturnDocument};
use serde::{Deserialize, Serialize};

pub const KNOWLEDGE_COLLECTION: &str = "ai_knowledge";

#[derive(Clone)]
pub struct MongoKnowledgeRepository {
    collection: Collection<KnowledgeRecord>,
}

impl MongoKnowledgeRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(KNOWLEDGE_COLLECTION),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct KnowledgeRecord {
    #[serde(rename = "_id")]
    id: ObjectId,
    #[serde(default)]
    document: String,
    #[serde(default)]
    system_prompt: String,
    #[serde(default)]
    created_at: Option<bson::DateTime>,
    #[serde(default)]
    updated_at: Option<bson::DateTime>,
}

impl TryFrom<KnowledgeRecord> for KnowledgeBase {
    type Error = DomainError;

    fn try_from(record: KnowledgeRecord) -> Result<Self, Self::Error> {
        Ok(KnowledgeBase {
            id: Some(record.id.into()),
            document: record.document,
            system_prompt: record.system_prompt,
            created_at: record.created_at.map(bson::DateTime::to_chrono),
            updated_at: record.updated_at.map(bson::DateTime::to_chrono),
        })
    }
}

#[async_trait]
impl KnowledgeRepository for MongoKnowledgeRepository {
    async fn find(&self) -> DomainResult<Option<KnowledgeBase>> {
        self.collection
            .find_one(doc! { "type": KNOWLEDGE_TYPE })
            .await
            .map_err(map_mongo)?
            .map(KnowledgeBase::try_from)
            .transpose()
    }

    async fn upsert(
        &self,
        document: String,
        system_prompt: String,
        now: DateTime<Utc>,
    ) -> DomainResult<KnowledgeBase> {
        let now = bson::DateTime::from_chrono(now);
        let update = doc! {
            "$set": {
                "type": KNOWLEDGE_TYPE,
                "document": document,
                "systemPrompt": system_prompt,
                "updatedAt": now,
            },
            "$setOnInsert": { "createdAt": now },
        };

        self.collection
            .find_one_and_update(doc! { "type": KNOWLEDGE_TYPE }, update)
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await
            .map_err(map_mongo)?
            .ok_or_else(|| DomainError::persistence("knowledge upsert returned no document"))
            .and_then(KnowledgeBase::try_from)
    }
}
