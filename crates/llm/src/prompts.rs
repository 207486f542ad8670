//! Prompt templates for summarization

use crate::types::ChatMessage;

/// Instruction token that suppresses the model's extended thinking output
pub const NO_THINK: &str = "/no_think";

/// Build the summarization prompt
///
/// The raw prompt is embedded verbatim, unescaped and without a length
/// limit. The instruction token appears at both start and end.
pub fn summary_prompt(raw: &str) -> String {
    format!("{} Summarise this : {} {}", NO_THINK, raw, NO_THINK)
}

/// Wrap the summarization prompt into a single-message conversation
pub fn summary_messages(raw: &str) -> Vec<ChatMessage> {
    vec![ChatMessage::user(summary_prompt(raw))]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_prompt_template() {
        let prompt = summary_prompt("The sky is blue.");
        assert!(prompt.contains("Summarise this :"));
        assert!(prompt.contains("The sky is blue."));
        assert!(prompt.starts_with(NO_THINK));
        assert!(prompt.ends_with(NO_THINK));
    }

    #[test]
    fn test_summary_prompt_embeds_raw_text_verbatim() {
        // Special characters pass through unescaped
        let raw = "line one\nline two \"quoted\" {braces} </think>";
        let prompt = summary_prompt(raw);
        assert!(prompt.contains(raw));
    }

    #[test]
    fn test_summary_prompt_empty_input() {
        // Empty prompts are not rejected, they are forwarded as-is
        let prompt = summary_prompt("");
        assert_eq!(prompt, "/no_think Summarise this :  /no_think");
    }

    #[test]
    fn test_summary_messages_single_user_message() {
        let messages = summary_messages("hello");
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, "user");
        assert!(messages[0].content.contains("hello"));
    }
}
