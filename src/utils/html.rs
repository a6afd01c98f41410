use regex::Regex;
use std::sync::OnceLock;

static TAG_PATTERN: OnceLock<Regex> = OnceLock::new();

fn tag_pattern() -> &'static Regex {
    TAG_PATTERN.get_or_init(|| Regex::new(r"<[^>]+>").unwrap())
}

/// Remove HTML tags from a rich-text description, leaving plain text.
pub fn strip_tags(input: &str) -> String {
    tag_pattern().replace_all(input, "").into_owned()
}

/// Tag-stripped preview of at most `max_chars` characters.
pub fn excerpt(input: &str, max_chars: usize) -> String {
    let plain = strip_tags(input);
    if plain.chars().count() <= max_chars {
        return plain;
    }
    plain.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_nested_markup() {
        let html = "<p>Account-based <strong>marketing</strong> works</p>";
        assert_eq!(strip_tags(html), "Account-based marketing works");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(strip_tags("no markup here"), "no markup here");
    }

    #[test]
    fn excerpt_cuts_long_text() {
        assert_eq!(excerpt("<p>abcdefghij</p>", 5), "abcde");
    }

    #[test]
    fn excerpt_keeps_short_text_intact() {
        assert_eq!(excerpt("<em>short</em>", 150), "short");
    }
}
