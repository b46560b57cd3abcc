//! Built-in questionnaire definitions, one module per instrument.

pub mod dash;
pub mod koos;
pub mod nordico;
pub mod odi;
pub mod wosi;

use pontua_core::models::questionnaire::ItemOption;

/// Build an option list from `(label, score)` pairs.
pub(crate) fn options(pairs: &[(&str, f64)]) -> Vec<ItemOption> {
    pairs
        .iter()
        .map(|(label, score)| ItemOption {
            label: (*label).to_string(),
            score: *score,
        })
        .collect()
}
