//! Post text cleanup ahead of scoring.

use std::sync::LazyLock;

use regex::Regex;

/// Mentions, any character outside `[0-9A-Za-z \t]`, and `scheme://...` links.
static NOISE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(@[A-Za-z0-9]+)|([^0-9A-Za-z \t])|(\w+://\S+)").expect("valid noise regex")
});

/// Strips mentions, links, and punctuation from `text`, then collapses runs
/// of whitespace to single spaces.
///
/// The output only contains ASCII letters, digits, and single spaces, with no
/// leading or trailing space.
#[must_use]
pub fn clean(text: &str) -> String {
    let stripped = NOISE.replace_all(text, " ");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_links_and_mentions() {
        assert_eq!(
            clean("Check this http://example.com now @bob"),
            "Check this now"
        );
    }

    #[test]
    fn removes_https_links_with_paths() {
        assert_eq!(
            clean("read https://t.co/AbC123?x=1 later"),
            "read later"
        );
    }

    #[test]
    fn hashtags_keep_their_word() {
        assert_eq!(clean("I love my job! #work"), "I love my job work");
    }

    #[test]
    fn mention_prefix_only_consumes_alphanumerics() {
        // "@bob" goes, the apostrophe goes, the "s" stays.
        assert_eq!(clean("@bob's desk"), "s desk");
    }

    #[test]
    fn non_ascii_characters_are_removed() {
        assert_eq!(clean("caf\u{e9} \u{1f600} time"), "caf time");
    }

    #[test]
    fn collapses_tabs_newlines_and_repeated_spaces() {
        assert_eq!(clean("  too\t\tmany\n\nspaces   "), "too many spaces");
    }

    #[test]
    fn empty_and_noise_only_input_yield_empty_string() {
        assert_eq!(clean(""), "");
        assert_eq!(clean("!!! @someone ..."), "");
    }

    #[test]
    fn output_alphabet_and_spacing_invariant() {
        let samples = [
            "RT @boss: Mondays are the WORST!!! \u{1f62b} https://t.co/x #work",
            "\tMixed\u{a0}whitespace\u{2003}and\r\nbreaks",
            "ftp://files.example.org/a b@c d",
            "___under_scores___ and 100% effort",
        ];
        for sample in samples {
            let cleaned = clean(sample);
            assert!(
                cleaned
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == ' '),
                "unexpected char in {cleaned:?}"
            );
            assert!(!cleaned.contains("  "), "double space in {cleaned:?}");
            assert_eq!(cleaned, cleaned.trim(), "untrimmed {cleaned:?}");
        }
    }

    #[test]
    fn clean_is_idempotent() {
        let once = clean("Deadlines @pm, deadlines... http://jira.example.com/T-1");
        assert_eq!(clean(&once), once);
    }
}
