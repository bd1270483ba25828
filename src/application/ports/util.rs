// src/application/ports/util.rs
use crate::domain::document::DocumentId;

pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}

/// Allocates identifiers for documents before they are written, so a slug can
/// fall back to the id of the document being created.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> DocumentId;
}
