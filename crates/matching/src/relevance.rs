//! Turns similarity scores into relevance verdicts.

use crate::models::{CandidateRecord, Confidence, RelevanceVerdict, ScoredCandidate};
use crate::similarity::similarity;
use crate::title_normalizer::normalize_title;
use std::collections::BTreeMap;
use tracing::debug;

pub const HIGH_CONFIDENCE_THRESHOLD: f64 = 0.9;
pub const MEDIUM_CONFIDENCE_THRESHOLD: f64 = 0.7;
pub const LOW_CONFIDENCE_THRESHOLD: f64 = 0.5;

/// Well-known franchise tokens that may rescue a borderline match.
pub const DEFAULT_FRANCHISE_KEYWORDS: [&str; 6] =
    ["inception", "avengers", "batman", "spider", "marvel", "dc"];

/// Table of franchise keywords (`keyword -> applies`).
///
/// Only consulted for scores in the low band. A keyword shared by both normalized titles turns
/// such a score into a low-confidence match. It never demotes a medium or high match.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordTable {
    entries: BTreeMap<String, bool>,
}

impl KeywordTable {
    /// An empty table; no borderline match is ever rescued.
    pub fn empty() -> Self {
        KeywordTable {
            entries: BTreeMap::new(),
        }
    }

    /// Build a table from a comma-separated list such as `"batman, avengers"`.
    pub fn from_list(list: &str) -> Self {
        let mut table = KeywordTable::empty();
        for keyword in list.split(',') {
            table.set(keyword, true);
        }
        table
    }

    /// Add or update a keyword. Keywords are stored normalized; blank ones are ignored.
    pub fn set(&mut self, keyword: &str, applies: bool) {
        let keyword = normalize_title(keyword);
        if !keyword.is_empty() {
            self.entries.insert(keyword, applies);
        }
    }

    /// The first applicable keyword contained in both normalized titles.
    pub fn shared_keyword(&self, normalized_a: &str, normalized_b: &str) -> Option<&str> {
        self.entries
            .iter()
            .filter(|(_, applies)| **applies)
            .map(|(keyword, _)| keyword.as_str())
            .find(|keyword| normalized_a.contains(keyword) && normalized_b.contains(keyword))
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        let mut table = KeywordTable::empty();
        for keyword in DEFAULT_FRANCHISE_KEYWORDS {
            table.set(keyword, true);
        }
        table
    }
}

/// Decides whether candidate titles are the same work as a canonical title.
#[derive(Debug, Clone, Default)]
pub struct RelevanceClassifier {
    keywords: KeywordTable,
}

impl RelevanceClassifier {
    pub fn new(keywords: KeywordTable) -> Self {
        RelevanceClassifier { keywords }
    }

    /// Classify a candidate title against the canonical title. Depends only on the two titles.
    pub fn classify(&self, target_title: &str, candidate_title: &str) -> RelevanceVerdict {
        let score = similarity(target_title, candidate_title);
        self.verdict_for_score(score, target_title, candidate_title)
    }

    /// Map an already computed score to a verdict. The titles are only used for the keyword check.
    pub fn verdict_for_score(
        &self,
        score: f64,
        target_title: &str,
        candidate_title: &str,
    ) -> RelevanceVerdict {
        if score >= HIGH_CONFIDENCE_THRESHOLD {
            return RelevanceVerdict::relevant(Confidence::High, score);
        }
        if score >= MEDIUM_CONFIDENCE_THRESHOLD {
            return RelevanceVerdict::relevant(Confidence::Medium, score);
        }
        if score >= LOW_CONFIDENCE_THRESHOLD {
            let target = normalize_title(target_title);
            let candidate = normalize_title(candidate_title);
            if let Some(keyword) = self.keywords.shared_keyword(&target, &candidate) {
                debug!(
                    "Rescuing \"{}\" with score {:.3} through keyword \"{}\".",
                    candidate_title, score, keyword
                );
                return RelevanceVerdict::relevant(Confidence::Low, score);
            }
        }

        RelevanceVerdict::not_relevant(score)
    }

    /// Attach a verdict to a search result without altering it.
    pub fn score_candidate(&self, target_title: &str, record: CandidateRecord) -> ScoredCandidate {
        let verdict = self.classify(target_title, &record.title);
        ScoredCandidate { record, verdict }
    }
}
