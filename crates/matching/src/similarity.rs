//! Composite title similarity.
//!
//! Three signals over normalized titles are blended: token overlap, containment and edit
//! distance. Token overlap carries the most weight so that word-order changes and extra
//! suffixes matter less than shared words. The relevance thresholds are calibrated against
//! these exact weights.

use crate::title_normalizer::normalize_title;

pub const WORD_WEIGHT: f64 = 0.5;
pub const SUBSTRING_WEIGHT: f64 = 0.3;
pub const LEVENSHTEIN_WEIGHT: f64 = 0.2;

/// Award for a target word that only partially matches a candidate word.
const PARTIAL_WORD_MATCH: f64 = 0.8;

/// Similarity in `[0, 1]` between two raw titles. Identical normalized titles score exactly `1.0`.
pub fn similarity(target: &str, candidate: &str) -> f64 {
    let target = normalize_title(target);
    let candidate = normalize_title(candidate);
    if target == candidate {
        return 1.0;
    }

    WORD_WEIGHT * word_similarity(&target, &candidate)
        + SUBSTRING_WEIGHT * substring_similarity(&target, &candidate)
        + LEVENSHTEIN_WEIGHT * levenshtein_similarity(&target, &candidate)
}

/// Share of target words found among the candidate words.
///
/// Words of a single character are ignored. An exact match is worth `1.0`; otherwise the first
/// candidate word that contains the target word, or is contained by it, is worth `0.8`. The sum
/// is divided by the larger word count. Because only target words are visited this is not
/// symmetric.
pub fn word_similarity(target: &str, candidate: &str) -> f64 {
    let target_words = significant_words(target);
    let candidate_words = significant_words(candidate);
    if target_words.is_empty() || candidate_words.is_empty() {
        return 0.0;
    }

    let matches: f64 = target_words
        .iter()
        .map(|word| {
            if candidate_words.contains(word) {
                1.0
            } else if candidate_words
                .iter()
                .any(|other| other.contains(word) || word.contains(other))
            {
                PARTIAL_WORD_MATCH
            } else {
                0.0
            }
        })
        .sum();

    matches / target_words.len().max(candidate_words.len()) as f64
}

fn significant_words(title: &str) -> Vec<&str> {
    title
        .split_whitespace()
        .filter(|word| word.chars().count() > 1)
        .collect()
}

/// Length ratio of the shorter title to the longer one when the shorter is contained in the
/// longer, `0` otherwise. Two empty titles score `1.0`.
pub fn substring_similarity(a: &str, b: &str) -> f64 {
    let (a_len, b_len) = (a.chars().count(), b.chars().count());
    let (longer, longer_len, shorter, shorter_len) = if a_len > b_len {
        (a, a_len, b, b_len)
    } else {
        (b, b_len, a, a_len)
    };
    if longer_len == 0 {
        return 1.0;
    }
    if longer.contains(shorter) {
        shorter_len as f64 / longer_len as f64
    } else {
        0.0
    }
}

/// `1 - distance / max_len` using the Levenshtein edit distance. Two empty titles score `1.0`.
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    let distance = levenshtein_distance(a, b);
    (max_len - distance) as f64 / max_len as f64
}

/// Unit-cost insertion/deletion/substitution distance over characters.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, a_char) in a.chars().enumerate() {
        current[0] = i + 1;
        for (j, b_char) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(a_char != *b_char);
            current[j + 1] = substitution.min(previous[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}
