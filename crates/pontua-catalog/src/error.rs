use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown questionnaire: {0}")]
    UnknownQuestionnaire(String),
}
