//! JSON loading for externally authored questionnaire catalogs.
//!
//! Only syntactic parsing happens here; semantic validation is the
//! engine's `validate` pass, run separately so malformed definitions
//! still produce a structured report instead of a parse failure.

use pontua_core::models::questionnaire::QuestionnaireDefinition;

use crate::error::CatalogError;

/// Parse a single questionnaire definition from JSON.
pub fn from_json(json: &str) -> Result<QuestionnaireDefinition, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a whole catalog (a JSON array of definitions).
pub fn catalog_from_json(json: &str) -> Result<Vec<QuestionnaireDefinition>, CatalogError> {
    Ok(serde_json::from_str(json)?)
}
