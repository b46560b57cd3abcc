//! pontua-scoring
//!
//! The questionnaire scoring engine: schema validation, answer
//! normalization, formula evaluation, score orchestration, and
//! qualitative result analysis. Pure synchronous computation over
//! in-memory data — no I/O, no shared state.

pub mod analyze;
pub mod engine;
pub mod formula;
pub mod normalize;
pub mod validate;

pub use analyze::analyze;
pub use engine::{score, validate_answers};
pub use validate::{Issue, Severity, ValidationReport, validate};
