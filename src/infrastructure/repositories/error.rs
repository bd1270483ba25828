use crate::domain::document::DocumentId;
use crate::domain::errors::DomainError;
use bson::oid::ObjectId;
use mongodb::error::{ErrorKind, WriteFailure};

const DUPLICATE_KEY: i32 = 11000;

pub fn map_mongo(err: mongodb::error::Error) -> DomainError {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_err)) if write_err.code == DUPLICATE_KEY => {
            DomainError::Conflict("duplicate key".into())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

pub fn map_bson_ser(err: bson::ser::Error) -> DomainError {
    DomainError::Persistence(format!("failed to encode document: {err}"))
}

pub fn object_id(id: &DocumentId) -> Result<ObjectId, DomainError> {
    ObjectId::parse_str(id.as_str())
        .map_err(|err| DomainError::Validation(format!("invalid document id: {err}")))
}
