//! pontua-catalog
//!
//! Built-in questionnaire definitions (Brazilian-Portuguese orthopedic
//! PROM instruments), the JSON loader for external catalogs, and the
//! catalog validation report consumed by the developer tooling and the
//! in-app validation view.

pub mod error;
pub mod loader;
pub mod questionnaires;
pub mod report;

use pontua_core::models::questionnaire::QuestionnaireDefinition;

/// Return all built-in questionnaire definitions.
pub fn all() -> Vec<QuestionnaireDefinition> {
    vec![
        questionnaires::dash::definition(),
        questionnaires::koos::definition(),
        questionnaires::wosi::definition(),
        questionnaires::odi::definition(),
        questionnaires::nordico::definition(),
    ]
}

/// Look up a built-in questionnaire by ID.
pub fn get(id: &str) -> Option<QuestionnaireDefinition> {
    all().into_iter().find(|q| q.id == id)
}
