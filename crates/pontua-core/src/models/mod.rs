pub mod answer;
pub mod questionnaire;
pub mod result;
