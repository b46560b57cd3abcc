//! Score orchestration: validator + normalizer + formula evaluator.

use std::collections::BTreeMap;

use tracing::warn;

use pontua_core::models::answer::{AnswerSet, ItemId};
use pontua_core::models::questionnaire::QuestionnaireDefinition;
use pontua_core::models::result::{AnswerCompleteness, ScoringResult};

use crate::formula::{DomainFormula, TotalFormula};
use crate::normalize::{answered_leaf_ids, required_leaf_ids, scored_leaves};
use crate::validate::validate;

/// Score one questionnaire administration.
///
/// Pure function: no I/O, no shared state, identical inputs yield
/// identical output. Missing answers contribute 0 to every sum —
/// completeness is the separate [`validate_answers`] check. The only
/// fatal condition is a definition that fails schema validation.
pub fn score(definition: &QuestionnaireDefinition, answers: &AnswerSet) -> ScoringResult {
    let report = validate(definition);
    if !report.success() {
        let summary = report
            .errors()
            .map(|issue| issue.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        return ScoringResult::failed(format!("definição inválida: {summary}"));
    }

    let leaves = scored_leaves(definition);

    // Contributed score per leaf: reverse scoring applied against the
    // leaf's own option maximum, unanswered leaves at 0.
    let mut raw_sum = 0.0;
    let mut contributions = BTreeMap::new();
    let mut answered = BTreeMap::new();
    for leaf in &leaves {
        let Some(raw) = answers.get(leaf.id) else {
            contributions.insert(leaf.id.clone(), 0.0);
            continue;
        };
        if !leaf.has_option_score(raw) {
            warn!(
                item = %leaf.id,
                value = raw,
                "resposta fora das opções declaradas do item"
            );
        }
        let contributed = leaf.contribution(raw);
        raw_sum += contributed;
        contributions.insert(leaf.id.clone(), contributed);
        answered.insert(leaf.id.clone(), contributed);
    }

    let domain_scores = compute_domain_scores(definition, &contributions, &answered);

    let scoring = &definition.scoring;
    let total_formula = TotalFormula::classify(scoring.total_formula.as_deref());
    if total_formula == TotalFormula::Raw
        && scoring.total_formula.as_deref().is_some_and(|t| !t.trim().is_empty())
    {
        warn!(
            questionnaire = %definition.id,
            formula = scoring.total_formula.as_deref().unwrap_or_default(),
            "fórmula total não reconhecida, usando soma bruta"
        );
    }

    let mut final_score = total_formula.evaluate(raw_sum);
    if let Some(range) = &scoring.range {
        final_score = range.clamp(final_score);
    }

    ScoringResult {
        total_score: round2(final_score),
        is_percent: scoring.range.is_some_and(|r| r.max == 100.0),
        domain_scores,
        interpretation: scoring.interpretation.clone(),
        error: None,
    }
}

/// Check whether every required leaf has an answer.
///
/// Sub-items marked `not_scored` are never required. Deliberately
/// decoupled from [`score`]: scoring runs fine on incomplete answers,
/// and callers that want full completion gate on this check.
pub fn validate_answers(
    definition: &QuestionnaireDefinition,
    answers: &AnswerSet,
) -> AnswerCompleteness {
    let answered = answered_leaf_ids(definition, answers);
    let missing_items: Vec<_> = required_leaf_ids(definition)
        .into_iter()
        .filter(|id| !answered.contains(id))
        .collect();

    AnswerCompleteness {
        valid: missing_items.is_empty(),
        missing_items,
    }
}

fn compute_domain_scores(
    definition: &QuestionnaireDefinition,
    contributions: &BTreeMap<ItemId, f64>,
    answered: &BTreeMap<ItemId, f64>,
) -> Option<BTreeMap<String, f64>> {
    let domains = &definition.scoring.domains;
    if domains.is_empty() {
        return None;
    }

    let mut scores = BTreeMap::new();
    for domain in domains {
        let domain_sum: f64 = domain
            .items
            .iter()
            .filter_map(|id| contributions.get(id))
            .sum();
        let answered_count = domain
            .items
            .iter()
            .filter(|id| answered.contains_key(*id))
            .count();

        let formula = DomainFormula::classify(domain.formula.as_deref());
        scores.insert(domain.name.clone(), formula.evaluate(domain_sum, answered_count));
    }
    Some(scores)
}

/// Report totals at 2 decimal places; intermediate domain math stays
/// unrounded.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
