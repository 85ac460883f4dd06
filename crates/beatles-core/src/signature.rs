//! Text transforms that reduce titles and queries to comparable keys.
//!
//! A *signature* keeps only the ASCII letters of its input, lower-cased, in
//! their original order. Digits, punctuation, whitespace and non-ASCII
//! letters (including accented ones) are dropped, so "Bésame Mucho" and
//! "B-samemucho!" share the signature `bsamemucho`.

use once_cell::sync::Lazy;
use regex::Regex;

/// Innermost parenthesized annotations: "(Remix)", "(This Bird Has Flown)".
#[allow(clippy::unwrap_used)]
pub static PAREN_ANNOTATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\([^()]+\)").unwrap());

/// Reduce arbitrary text to its signature.
///
/// Total over every input: text without ASCII letters yields an empty
/// signature. Numeric distinctions are lost, so "Revolution 1" and
/// "Revolution 9" collide.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Strip parenthesized annotations from a raw query, then trim.
///
/// Applied to queries only, never to catalog titles. A single pass is made,
/// so only the innermost group of nested parentheses is removed.
pub fn purge_annotations(text: &str) -> String {
    PAREN_ANNOTATION.replace_all(text, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_keeps_ascii_letters() {
        assert_eq!(normalize("A Hard Day's Night"), "aharddaysnight");
        assert_eq!(normalize("12-Bar Original"), "baroriginal");
        assert_eq!(normalize("Being for the Benefit of Mr. Kite!"), "beingforthebenefitofmrkite");
    }

    #[test]
    fn test_normalize_drops_accented_letters() {
        assert_eq!(normalize("Bésame Mucho"), "bsamemucho");
    }

    #[test]
    fn test_normalize_without_letters_is_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("1964 -- 1970!"), "");
        assert_eq!(normalize("   \t\n"), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            "Eight Days a Week",
            "Christmas Time (Is Here Again)",
            "Ob-La-Di, Ob-La-Da",
            "Bésame Mucho",
            "",
            "!!!",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_purge_annotations_removes_parentheses() {
        let purged = purge_annotations("Norwegian Wood (This Bird Has Flown)");
        assert_eq!(purged, "Norwegian Wood");
        assert_eq!(normalize(&purged), normalize("Norwegian Wood "));
    }

    #[test]
    fn test_purge_annotations_multiple_groups() {
        assert_eq!(purge_annotations("Help (Live) (1965 Mix)"), "Help");
        assert_eq!(purge_annotations("(Intro) Taxman"), "Taxman");
    }

    #[test]
    fn test_purge_annotations_leaves_plain_text() {
        assert_eq!(purge_annotations("Yesterday"), "Yesterday");
        assert_eq!(purge_annotations("Empty () parens"), "Empty () parens");
    }

    #[test]
    fn test_purge_annotations_nested_takes_innermost() {
        assert_eq!(purge_annotations("Song (a (b) c)"), "Song (a  c)");
    }
}
