use pontua_core::models::answer::{AnswerSet, ItemId};
use pontua_core::models::questionnaire::ScoreRange;
use pontua_core::models::result::ScoringResult;

#[test]
fn scoring_result_serializes_camel_case() {
    let result = ScoringResult {
        total_score: 62.5,
        is_percent: true,
        domain_scores: None,
        interpretation: None,
        error: None,
    };
    let json = serde_json::to_string(&result).unwrap();
    assert_eq!(json, r#"{"totalScore":62.5,"isPercent":true}"#);
}

#[test]
fn failed_result_is_zeroed_with_an_error() {
    let result = ScoringResult::failed("definição inválida");
    assert_eq!(result.total_score, 0.0);
    assert!(!result.is_percent);
    assert_eq!(result.error.as_deref(), Some("definição inválida"));
}

#[test]
fn answer_set_deserializes_from_a_plain_json_map() {
    let answers: AnswerSet = serde_json::from_str(r#"{"q2": 3, "q1": 1.5}"#).unwrap();
    assert_eq!(answers.len(), 2);
    assert_eq!(answers.get(&ItemId::new("q1")), Some(1.5));
    assert_eq!(answers.get(&ItemId::new("q2")), Some(3.0));
    assert!(!answers.contains(&ItemId::new("q3")));
}

#[test]
fn score_range_contains_and_clamps() {
    let range = ScoreRange { min: 0.0, max: 100.0 };
    assert!(range.contains(0.0));
    assert!(range.contains(100.0));
    assert!(!range.contains(100.5));
    assert_eq!(range.clamp(-3.0), 0.0);
    assert_eq!(range.clamp(250.0), 100.0);
    assert_eq!(range.clamp(40.0), 40.0);
}
