use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One earlier turn of the visitor's conversation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatTurnDto {
    pub role: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatReplyDto {
    pub response: String,
}
