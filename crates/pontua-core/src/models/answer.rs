use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Identifier of an item or sub-item within one questionnaire.
///
/// Newtype over the raw catalog string so ids from different
/// questionnaires cannot be mixed up silently.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        ItemId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        ItemId(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        ItemId(id)
    }
}

/// The raw answers for one questionnaire administration: item or
/// sub-item id → the selected option's score.
///
/// Backed by a `BTreeMap` so iteration order is deterministic and two
/// scoring calls over identical answers produce identical results.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct AnswerSet(pub BTreeMap<ItemId, f64>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &ItemId) -> Option<f64> {
        self.0.get(id).copied()
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.0.contains_key(id)
    }

    pub fn insert(&mut self, id: impl Into<ItemId>, score: f64) {
        self.0.insert(id.into(), score);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, f64)> {
        self.0.iter().map(|(id, score)| (id, *score))
    }
}

impl<I: Into<ItemId>> FromIterator<(I, f64)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (I, f64)>>(iter: T) -> Self {
        AnswerSet(iter.into_iter().map(|(id, s)| (id.into(), s)).collect())
    }
}

/// A single answered leaf as presented to the result analyzer.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Answer {
    pub item_id: ItemId,
    pub item_text: String,
    #[serde(default)]
    pub option_label: Option<String>,
    pub score: f64,
}
