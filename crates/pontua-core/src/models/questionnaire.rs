use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::answer::ItemId;

/// A complete questionnaire definition, loaded once from the catalog.
///
/// Item order is semantically meaningful (numbering, display, domain
/// grouping) and must never be reordered.
///
/// Missing fields deserialize to empty values rather than failing, so the
/// schema validator can report them as structured issues.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionnaireDefinition {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub acronym: String,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub scoring: Scoring,
}

/// How a questionnaire item is presented. Presentation only — no effect
/// on scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ItemFormat {
    Table,
    DualScale,
}

/// A single questionnaire item.
///
/// An item is either "simple" (answerable directly through its own
/// `options`) or "composite" (answerable only through its `subitems`) —
/// never both.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    #[serde(default)]
    pub id: ItemId,
    #[serde(default)]
    pub text: String,
    /// Free-text display grouping. Independent of the scoring domains in
    /// `Scoring::domains`.
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub reverse_scored: bool,
    #[serde(default)]
    pub options: Vec<ItemOption>,
    #[serde(default)]
    pub subitems: Option<Vec<SubItem>>,
    #[serde(default)]
    pub format: Option<ItemFormat>,
}

impl Item {
    /// True when the item is answered through sub-items rather than its
    /// own options.
    pub fn is_composite(&self) -> bool {
        self.subitems.as_ref().is_some_and(|s| !s.is_empty())
    }
}

/// One selectable option of an item or sub-item. `score` values need not
/// be contiguous or start at zero.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemOption {
    pub label: String,
    pub score: f64,
}

/// A sub-item of a composite item. Sub-items marked `not_scored` exist
/// for contextual display only and never contribute to totals, domain
/// sums, or completeness checks.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubItem {
    #[serde(default)]
    pub id: ItemId,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub options: Vec<ItemOption>,
    #[serde(default)]
    pub not_scored: bool,
}

/// Scoring rules for a questionnaire.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Scoring {
    #[serde(default)]
    pub domains: Vec<ScoringDomain>,
    /// Human-authored formula text. Recognized shapes are pattern-matched
    /// by the engine; anything else falls back to the raw sum.
    #[serde(default)]
    pub total_formula: Option<String>,
    #[serde(default)]
    pub range: Option<ScoreRange>,
    /// Free-text guidance attached unmodified to results.
    #[serde(default)]
    pub interpretation: Option<String>,
}

/// A named partition of leaves used to compute a sub-score.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoringDomain {
    #[serde(default)]
    pub name: String,
    /// Item or sub-item ids whose contributions make up this domain.
    #[serde(default)]
    pub items: Vec<ItemId>,
    #[serde(default)]
    pub formula: Option<String>,
}

/// Inclusive range of the reported output scale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
}

impl ScoreRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }
}
