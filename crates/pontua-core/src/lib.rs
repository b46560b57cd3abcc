//! pontua-core
//!
//! Pure domain types for questionnaire definitions, answers, and scoring
//! results. No engine logic — this is the shared vocabulary of the Pontua
//! system.

pub mod error;
pub mod models;
