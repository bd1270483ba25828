use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Human-readable acknowledgement for operations without a resource body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
