//! Markdown cleanup applied to generated text before display

use regex::Regex;
use std::sync::LazyLock;

/// Ordered `(pattern, replacement)` rules; order matters (bold before italic)
static RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        // Bold
        (r"\*\*(.*?)\*\*", "${1}"),
        // Italic
        (r"\*(.*?)\*", "${1}"),
        // Headers
        (r"(?m)^#{1,6}\s+", ""),
        // Links keep their text; citation markers are never followed by `(`
        (r"\[([^\]]+)\]\([^)]+\)", "${1}"),
        // Fenced code
        (r"(?s)```.*?```", ""),
        // Inline code
        (r"`([^`]+)`", "${1}"),
        // Bullets
        (r"(?m)^\s*[-*+]\s+", "• "),
        // Numbered list markers
        (r"(?m)^\s*\d+\.\s+", ""),
        // Blank-line runs
        (r"\n\s*\n", "\n\n"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        (
            Regex::new(pattern).expect("markdown cleanup pattern is valid"),
            replacement,
        )
    })
    .collect()
});

/// Strip markdown formatting from generated text
///
/// Emphasis, headers, link targets, code fences and list markers are removed,
/// bullets become `• `, runs of blank lines collapse to one, and the result is
/// trimmed. Citation markers survive unchanged, so this can run before
/// [`crate::normalize`].
///
/// # Examples
///
/// ```
/// use citeline_normalizer::strip_markdown;
///
/// assert_eq!(strip_markdown("**Revenue** grew [doc_a:2]."), "Revenue grew [doc_a:2].");
/// ```
pub fn strip_markdown(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let cleaned = RULES
        .iter()
        .fold(text.to_string(), |acc, (re, replacement)| {
            re.replace_all(&acc, *replacement).into_owned()
        });
    cleaned.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emphasis_and_headers() {
        let text = "**Revenue** grew [doc_a:2].\n\n\n## Outlook\n- item [doc_b:1]";
        assert_eq!(
            strip_markdown(text),
            "Revenue grew [doc_a:2].\n\nOutlook\n• item [doc_b:1]"
        );
    }

    #[test]
    fn test_links_keep_text() {
        assert_eq!(
            strip_markdown("see [the filing](https://example.com/f.pdf) [doc:3]"),
            "see the filing [doc:3]"
        );
    }

    #[test]
    fn test_code() {
        assert_eq!(strip_markdown("run `cargo` now"), "run cargo now");
        assert_eq!(strip_markdown("before\n```\nlet x = 1;\n```\nafter"), "before\n\nafter");
    }

    #[test]
    fn test_numbered_lists() {
        assert_eq!(strip_markdown("1. first\n2. second"), "first\nsecond");
    }

    #[test]
    fn test_italic() {
        assert_eq!(strip_markdown("an *important* point"), "an important point");
    }

    #[test]
    fn test_empty() {
        assert_eq!(strip_markdown(""), "");
        assert_eq!(strip_markdown("   \n  "), "");
    }
}
