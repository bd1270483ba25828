// tests/support/mocks/ai.rs
use async_trait::async_trait;
use oseberg_backend::application::{ApplicationResult, ports::ai::TextGenerator};
use std::sync::Mutex;

pub const CANNED_REPLY: &str = "We export makhana, spices and grains.";

/// Answers every prompt with [`CANNED_REPLY`] and keeps the prompts.
#[derive(Default)]
pub struct FakeGenerator {
    prompts: Mutex<Vec<String>>,
}

impl FakeGenerator {
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(&self, prompt: &str) -> ApplicationResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(CANNED_REPLY.to_string())
    }
}
