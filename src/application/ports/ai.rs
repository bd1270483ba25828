// src/application/ports/ai.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

/// Single-shot text completion.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> ApplicationResult<String>;
}
