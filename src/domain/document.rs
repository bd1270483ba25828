// src/domain/document.rs
use crate::domain::errors::{DomainError, DomainResult};
use bson::oid::ObjectId;
use std::fmt;

/// Identifier of a stored document, kept in its 24-character hex form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn parse(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if Self::is_valid(&value) {
            Ok(Self(value.to_ascii_lowercase()))
        } else {
            Err(DomainError::Validation(format!("invalid document id: {value}")))
        }
    }

    pub fn is_valid(value: &str) -> bool {
        value.len() == 24 && value.bytes().all(|b| b.is_ascii_hexdigit())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ObjectId> for DocumentId {
    fn from(oid: ObjectId) -> Self {
        Self(oid.to_hex())
    }
}

impl From<DocumentId> for String {
    fn from(value: DocumentId) -> Self {
        value.0
    }
}
