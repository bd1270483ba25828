// src/application/commands/chat/prompt.rs
use crate::{application::dto::ChatTurnDto, domain::knowledge::defaults::FALLBACK_SYSTEM_PROMPT};

const HISTORY_TURNS: usize = 5;

/// Assemble the single prompt sent to the model: instructions, knowledge
/// document, the last few turns and the visitor's question.
pub fn build_prompt(
    system_prompt: &str,
    document: &str,
    history: &[ChatTurnDto],
    message: &str,
) -> String {
    let system_prompt = if system_prompt.is_empty() {
        FALLBACK_SYSTEM_PROMPT
    } else {
        system_prompt
    };

    let mut prompt = format!("{system_prompt}\n\nKnowledge Document:\n{document}\n\n");

    if !history.is_empty() {
        prompt.push_str("Previous Conversation:\n");
        let skip = history.len().saturating_sub(HISTORY_TURNS);
        for turn in &history[skip..] {
            let speaker = if turn.role == "user" { "User" } else { "Assistant" };
            prompt.push_str(speaker);
            prompt.push_str(": ");
            prompt.push_str(&turn.text);
            prompt.push('\n');
        }
        prompt.push('\n');
    }

    prompt.push_str("Current Question: ");
    prompt.push_str(message);
    prompt.push_str(
        "\n\nPlease provide a helpful and accurate response based on the knowledge document.",
    );
    prompt
}
