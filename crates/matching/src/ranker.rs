//! Orders classified candidates for stream lookup.

use crate::models::ScoredCandidate;

/// Drop candidates that are not relevant, then order the rest by confidence tier and score,
/// both descending. The sort is stable: candidates with equal tier and score keep their
/// search-result order.
pub fn rank_candidates(candidates: Vec<ScoredCandidate>) -> Vec<ScoredCandidate> {
    let mut relevant: Vec<ScoredCandidate> = candidates
        .into_iter()
        .filter(|c| c.verdict.is_relevant)
        .collect();

    relevant.sort_by(|a, b| {
        b.verdict
            .confidence
            .rank()
            .cmp(&a.verdict.confidence.rank())
            .then_with(|| b.verdict.score.total_cmp(&a.verdict.score))
    });
    relevant
}
