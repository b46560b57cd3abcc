//! Catalog-wide validation reporting.
//!
//! Used by the "validar questionários" developer script and the in-app
//! validation view. The serialized shape is stable so reports can be
//! diffed between catalog versions.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use pontua_core::models::questionnaire::QuestionnaireDefinition;
use pontua_scoring::validate::{Issue, validate};

/// The validation outcome for one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CatalogReport {
    pub questionnaire_id: String,
    pub name: String,
    pub acronym: String,
    pub issues: Vec<Issue>,
}

impl CatalogReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Validate every definition in a catalog, in catalog order.
pub fn validate_catalog(definitions: &[QuestionnaireDefinition]) -> Vec<CatalogReport> {
    definitions
        .iter()
        .map(|definition| CatalogReport {
            questionnaire_id: definition.id.clone(),
            name: definition.name.clone(),
            acronym: definition.acronym.clone(),
            issues: validate(definition).issues,
        })
        .collect()
}
