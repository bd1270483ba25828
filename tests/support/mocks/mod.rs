// tests/support/mocks/mod.rs
pub mod ai;
pub mod repos;
pub mod time;

pub use ai::{CANNED_REPLY, FakeGenerator};
pub use repos::{InMemoryBlogs, InMemoryCatalogs, InMemoryKnowledge, KNOWLEDGE_ID};
pub use time::{SequentialIds, SteppingClock};
