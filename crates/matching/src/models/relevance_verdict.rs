use serde::Serialize;
use strum_macros::AsRefStr;

/// Discrete bucket summarizing a similarity score. Variants are declared in ascending order.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Confidence {
    None,
    Low,
    Medium,
    High,
}

impl Confidence {
    /// Numeric rank used for ordering candidates: `high` = 3 down to `none` = 0.
    pub fn rank(&self) -> u8 {
        match self {
            Confidence::High => 3,
            Confidence::Medium => 2,
            Confidence::Low => 1,
            Confidence::None => 0,
        }
    }
}

/// Whether a candidate is the same work as the canonical title, and how sure we are.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RelevanceVerdict {
    pub is_relevant: bool,
    pub confidence: Confidence,
    /// Composite similarity in `[0, 1]`.
    pub score: f64,
}

impl RelevanceVerdict {
    pub fn relevant(confidence: Confidence, score: f64) -> Self {
        RelevanceVerdict {
            is_relevant: true,
            confidence,
            score,
        }
    }

    pub fn not_relevant(score: f64) -> Self {
        RelevanceVerdict {
            is_relevant: false,
            confidence: Confidence::None,
            score,
        }
    }
}
