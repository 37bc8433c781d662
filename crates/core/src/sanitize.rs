//! Post-processing for provider-generated text.
//!
//! Generated completions arrive with wrapping punctuation, trailing lines,
//! stray quotation marks, or an echo of the instruction template. `clean`
//! normalizes all of that; `is_acceptable` then rejects degenerate or
//! runaway completions so the caller can substitute a fallback quote.

/// Minimum accepted length, in characters, after cleaning.
pub const MIN_QUOTE_CHARS: usize = 12;
/// Maximum accepted length, in characters, after cleaning.
pub const MAX_QUOTE_CHARS: usize = 200;

/// Instruction fragments some providers repeat back before the quote itself.
const ECHO_PREFIXES: &[&str] = &[
    "here is an uplifting quote:",
    "here is an uplifting quote",
    "here's an uplifting quote:",
    "here's an uplifting quote",
    "create an uplifting quote for someone feeling:",
    "create an uplifting quote for someone feeling",
];

const WRAPPING_QUOTES: [char; 6] = ['"', '\'', '\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}'];

/// Normalize a raw completion into a presentable single-line quote.
pub fn clean(raw: &str) -> String {
    let first_line = raw.trim().lines().next().unwrap_or("");
    let mut text = strip_wrapping(first_line).to_string();

    if let Some(stripped) = strip_echo(&text) {
        text = strip_wrapping(stripped).to_string();
    }

    if let Some(cut) = stray_closing_quote(&text) {
        text.truncate(cut);
        text = strip_wrapping(&text).to_string();
    }

    text
}

/// Length gate applied after `clean`.
pub fn is_acceptable(text: &str) -> bool {
    let chars = text.chars().count();
    (MIN_QUOTE_CHARS..=MAX_QUOTE_CHARS).contains(&chars)
}

fn strip_wrapping(text: &str) -> &str {
    text.trim().trim_matches(|c| WRAPPING_QUOTES.contains(&c)).trim()
}

fn strip_echo(text: &str) -> Option<&str> {
    for prefix in ECHO_PREFIXES {
        let Some(head) = text.get(..prefix.len()) else { continue };
        if head.eq_ignore_ascii_case(prefix) {
            return Some(text[prefix.len()..].trim_start_matches([':', '-', ' ']));
        }
    }
    None
}

/// Byte offset of the first closing quotation mark appearing after the 10th
/// character, if any. Completions sometimes close a quote early and keep
/// rambling; everything from that mark on is dropped.
fn stray_closing_quote(text: &str) -> Option<usize> {
    text.char_indices()
        .enumerate()
        .find(|(char_idx, (_, ch))| *char_idx >= 10 && matches!(ch, '"' | '\u{201D}'))
        .map(|(_, (byte_idx, _))| byte_idx)
}

#[cfg(test)]
mod tests {
    use super::{clean, is_acceptable};

    #[test]
    fn strips_wrapping_quote_punctuation() {
        assert_eq!(clean("\"Keep going, the road rises with you.\""), "Keep going, the road rises with you.");
        assert_eq!(clean("\u{201C}Storms pass, you remain.\u{201D}"), "Storms pass, you remain.");
        assert_eq!(clean("'Small steps still move you forward.'"), "Small steps still move you forward.");
    }

    #[test]
    fn keeps_only_the_first_line() {
        let raw = "The dawn always finds the patient.\n\nI hope this helps you feel better!";
        assert_eq!(clean(raw), "The dawn always finds the patient.");
    }

    #[test]
    fn truncates_at_stray_closing_quote_after_tenth_char() {
        let raw = "Hope is the quiet engine of mornings.\" And remember to hydrate";
        assert_eq!(clean(raw), "Hope is the quiet engine of mornings.");
    }

    #[test]
    fn early_quote_marks_are_wrapping_not_stray() {
        // A closing mark inside the first ten characters is treated as
        // wrapping punctuation, not a truncation point.
        assert_eq!(
            clean("\"Rise up\" and greet the day with an open heart."),
            "Rise up\" and greet the day with an open heart."
        );
    }

    #[test]
    fn strips_instruction_echo() {
        let raw = "Here is an uplifting quote: \"You carry more light than you know.\"";
        assert_eq!(clean(raw), "You carry more light than you know.");
    }

    #[test]
    fn echo_strip_is_case_insensitive() {
        let raw = "HERE IS AN UPLIFTING QUOTE: Courage grows each time you choose it.";
        assert_eq!(clean(raw), "Courage grows each time you choose it.");
    }

    #[test]
    fn acceptability_rejects_short_and_runaway_text() {
        assert!(!is_acceptable(""));
        assert!(!is_acceptable("Stay up."));
        assert!(is_acceptable("You are stronger than this moment."));
        assert!(!is_acceptable(&"a".repeat(201)));
        assert!(is_acceptable(&"a".repeat(200)));
    }

    #[test]
    fn whitespace_only_input_cleans_to_empty() {
        assert_eq!(clean("   \n  "), "");
        assert!(!is_acceptable(&clean("   \n  ")));
    }
}
