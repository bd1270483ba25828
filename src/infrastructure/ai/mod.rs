pub mod gemini;

pub use gemini::{GeminiConfig, GeminiTextGenerator};
