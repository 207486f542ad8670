//! Reply sanitization
//!
//! Models emit their internal deliberation between `<think>` and
//! `</think>` markers. The user-visible reply is everything else.

use once_cell::sync::Lazy;
use regex::Regex;

// Non-greedy so that independent spans are removed individually instead
// of one match swallowing everything from the first opener to the last
// closer. (?s) makes '.' match line breaks inside a span.
static THINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<think>.*?</think>").expect("think-span regex is valid"));

/// Strip delimited reasoning spans and trim surrounding whitespace
///
/// Idempotent: text without a marker pair comes back unchanged except
/// for whitespace trimming. An opener without a matching closer is left
/// untouched, both delimiters must match.
pub fn sanitize_reply(raw: &str) -> String {
    THINK_RE.replace_all(raw, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_span_returns_trimmed_text() {
        assert_eq!(sanitize_reply("  plain reply \n"), "plain reply");
        assert_eq!(sanitize_reply("plain reply"), "plain reply");
    }

    #[test]
    fn test_single_span_removed() {
        let raw = "A<think>B</think>C";
        assert_eq!(sanitize_reply(raw), "AC");
    }

    #[test]
    fn test_span_with_line_breaks_removed() {
        let raw = "<think>step 1\nstep 2\n\nstep 3</think>The sky is a clear summer blue.";
        assert_eq!(sanitize_reply(raw), "The sky is a clear summer blue.");
    }

    #[test]
    fn test_two_independent_spans_removed() {
        let raw = "A<think>X</think>B<think>Y</think>C";
        assert_eq!(sanitize_reply(raw), "ABC");
    }

    #[test]
    fn test_unterminated_opener_left_untouched() {
        // Both delimiters must match; a partial span is not removed
        let raw = "A<think>never closed";
        assert_eq!(sanitize_reply(raw), "A<think>never closed");
    }

    #[test]
    fn test_stray_closer_left_untouched() {
        let raw = "A</think>B";
        assert_eq!(sanitize_reply(raw), "A</think>B");
    }

    #[test]
    fn test_nested_markers_pair_with_nearest_closer() {
        // Left-to-right scan: the first opener pairs with the nearest
        // following closer, the trailing closer survives
        let raw = "<think>a<think>b</think>c</think>";
        assert_eq!(sanitize_reply(raw), "c</think>");
    }

    #[test]
    fn test_idempotent() {
        let raw = "  A<think>B</think>C  ";
        let once = sanitize_reply(raw);
        assert_eq!(sanitize_reply(&once), once);

        let clean = "already clean";
        assert_eq!(sanitize_reply(&sanitize_reply(clean)), sanitize_reply(clean));
    }

    #[test]
    fn test_reply_that_is_only_a_span() {
        assert_eq!(sanitize_reply("<think>all reasoning</think>"), "");
    }
}
