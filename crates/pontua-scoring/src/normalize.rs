//! Answer normalization: flattening a definition into its scorable
//! leaves.
//!
//! A leaf is a directly answerable unit — a simple item, or a
//! non-`not_scored` sub-item of a composite item. Sub-items marked
//! `not_scored` exist for contextual display only (e.g. reference
//! sliders in dual-scale items) and never appear here.

use std::collections::BTreeSet;

use pontua_core::models::answer::{AnswerSet, ItemId};
use pontua_core::models::questionnaire::{ItemOption, QuestionnaireDefinition};

/// One scorable leaf of a definition, borrowing from it.
#[derive(Debug, Clone, Copy)]
pub struct Leaf<'a> {
    pub id: &'a ItemId,
    pub text: &'a str,
    /// Display grouping inherited from the parent item.
    pub domain: Option<&'a str>,
    /// Inherited from the parent item; applied per leaf against the
    /// leaf's own option set.
    pub reverse_scored: bool,
    pub options: &'a [ItemOption],
}

impl Leaf<'_> {
    /// Highest declared option score, 0 when the leaf has no options.
    pub fn max_option_score(&self) -> f64 {
        self.options
            .iter()
            .map(|o| o.score)
            .reduce(f64::max)
            .unwrap_or(0.0)
    }

    /// Lowest declared option score, 0 when the leaf has no options.
    pub fn min_option_score(&self) -> f64 {
        self.options
            .iter()
            .map(|o| o.score)
            .reduce(f64::min)
            .unwrap_or(0.0)
    }

    /// The score this leaf contributes to sums for a given raw answer,
    /// with reverse scoring applied against this leaf's own maximum.
    pub fn contribution(&self, raw: f64) -> f64 {
        if self.reverse_scored {
            self.max_option_score() - raw
        } else {
            raw
        }
    }

    /// True when the selected value matches one of the declared option
    /// scores.
    pub fn has_option_score(&self, value: f64) -> bool {
        self.options.iter().any(|o| o.score == value)
    }
}

/// All scorable leaves of a definition, in item order.
pub fn scored_leaves(definition: &QuestionnaireDefinition) -> Vec<Leaf<'_>> {
    let mut leaves = Vec::new();
    for item in &definition.items {
        if item.is_composite() {
            for subitem in item.subitems.iter().flatten() {
                if subitem.not_scored {
                    continue;
                }
                leaves.push(Leaf {
                    id: &subitem.id,
                    text: subitem.text.as_deref().unwrap_or(&item.text),
                    domain: item.domain.as_deref(),
                    reverse_scored: item.reverse_scored,
                    options: &subitem.options,
                });
            }
        } else {
            leaves.push(Leaf {
                id: &item.id,
                text: &item.text,
                domain: item.domain.as_deref(),
                reverse_scored: item.reverse_scored,
                options: &item.options,
            });
        }
    }
    leaves
}

/// Every leaf id that must be answered for the questionnaire to count
/// as complete.
pub fn required_leaf_ids(definition: &QuestionnaireDefinition) -> BTreeSet<ItemId> {
    scored_leaves(definition)
        .iter()
        .map(|leaf| leaf.id.clone())
        .collect()
}

/// The required leaf ids that actually have an entry in `answers`.
pub fn answered_leaf_ids(
    definition: &QuestionnaireDefinition,
    answers: &AnswerSet,
) -> BTreeSet<ItemId> {
    scored_leaves(definition)
        .iter()
        .filter(|leaf| answers.contains(leaf.id))
        .map(|leaf| leaf.id.clone())
        .collect()
}
