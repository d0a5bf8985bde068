//! Canonicalizes free-text titles so that cosmetic differences do not affect matching.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PARENTHESIZED_YEAR: Regex = Regex::new(r"\s*\([0-9]{4}\)\s*$").unwrap();
    static ref PUNCTUATION: Regex = Regex::new(r#"[.,!?;:()\[\]{}"'\-]"#).unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref LEADING_ARTICLE: Regex = Regex::new(r"^(the|a|an)\s+").unwrap();
    static ref TRAILING_DESCRIPTOR: Regex =
        Regex::new(r"(?i)\s+(movie|film|show|series|part|chapter)(\s*[0-9]+)?$").unwrap();
}

/// Normalize a title for comparison.
///
/// Lower-cases, drops a trailing `(YYYY)`, turns punctuation into spaces, collapses whitespace,
/// then strips a leading article and a trailing descriptor word such as `part 2`. The last two
/// steps repeat until nothing changes, which keeps the function idempotent.
///
/// # Examples
///
/// ```
/// use streamscout_matching::normalize_title;
///
/// assert_eq!("inceptions", normalize_title("The Inceptions: Part 2"));
/// assert_eq!("inception", normalize_title("Inception (2010)"));
/// ```
pub fn normalize_title(title: &str) -> String {
    let lowered = title.to_lowercase();
    let without_year = PARENTHESIZED_YEAR.replace(&lowered, "");
    let spaced = PUNCTUATION.replace_all(&without_year, " ");
    let mut current = WHITESPACE.replace_all(&spaced, " ").trim().to_string();

    loop {
        let stripped = LEADING_ARTICLE.replace(&current, "");
        let stripped = TRAILING_DESCRIPTOR.replace(&stripped, "").trim().to_string();
        if stripped == current {
            return current;
        }
        current = stripped;
    }
}
