use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::answer::ItemId;

/// The outcome of scoring one questionnaire administration.
///
/// Constructed fresh per scoring call and immutable once returned.
/// Serialized camelCase — these are the exact shapes the frontend and
/// report renderers consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScoringResult {
    pub total_score: f64,
    pub is_percent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_scores: Option<BTreeMap<String, f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpretation: Option<String>,
    /// Set only when the definition failed schema validation. Callers
    /// must not display `total_score` in that case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScoringResult {
    /// The zero result returned when the definition is structurally
    /// unusable.
    pub fn failed(message: impl Into<String>) -> Self {
        ScoringResult {
            total_score: 0.0,
            is_percent: false,
            domain_scores: None,
            interpretation: None,
            error: Some(message.into()),
        }
    }
}

/// Whether every required leaf has an answer. Completeness is a
/// separate, explicit check — scoring itself tolerates missing answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AnswerCompleteness {
    pub valid: bool,
    pub missing_items: Vec<ItemId>,
}

/// Qualitative findings produced by the result analyzer. Advisory
/// narrative text only — never fed back into computation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreAnalysis {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}
