//! Qualitative result analysis.
//!
//! Turns per-item scores into "positive/negative finding" sentences for
//! the report narrative. Keyword heuristics over the item's domain and
//! text pick a symptom, functional, or generic framing; the score's
//! position inside the item's own option range picks the band.
//! Advisory text only — nothing here feeds back into scoring.

use std::collections::BTreeMap;

use pontua_core::models::answer::Answer;
use pontua_core::models::questionnaire::QuestionnaireDefinition;
use pontua_core::models::result::ScoreAnalysis;

use crate::normalize::{Leaf, scored_leaves};

const MAX_FINDINGS: usize = 10;

const SYMPTOM_KEYWORDS: &[&str] = &["dor", "sintoma", "rigidez", "desconforto"];
const FUNCTIONAL_KEYWORDS: &[&str] = &["atividade", "função", "funcao", "capacidade"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Framing {
    Symptom,
    Functional,
    Generic,
}

/// Analyze a set of answered items into qualitative findings.
///
/// Leaves that cannot be classified (unknown id, no options) are
/// omitted; the analysis itself never fails.
pub fn analyze(definition: &QuestionnaireDefinition, answers: &[Answer]) -> ScoreAnalysis {
    let leaves: BTreeMap<_, _> = scored_leaves(definition)
        .into_iter()
        .map(|leaf| (leaf.id.clone(), leaf))
        .collect();

    let mut analysis = ScoreAnalysis::default();
    let mut severity_sum = 0.0;
    let mut classified = 0usize;

    for answer in answers {
        let Some(leaf) = leaves.get(&answer.item_id) else {
            continue;
        };
        if leaf.options.is_empty() {
            continue;
        }

        let severity = leaf_severity(leaf, answer.score);
        severity_sum += severity;
        classified += 1;

        let framing = classify_framing(leaf);
        let text = display_text(leaf, answer);
        classify_finding(framing, severity, text, &mut analysis);
    }

    if analysis.positive.len() + analysis.negative.len() < MAX_FINDINGS && classified > 0 {
        prepend_overall(severity_sum / classified as f64, &mut analysis);
    }

    analysis.positive.truncate(MAX_FINDINGS);
    analysis.negative.truncate(MAX_FINDINGS);
    analysis
}

/// Where the answer sits inside the leaf's own option range, as a
/// 0–100 "worseness". Degenerate ranges count as 0; reverse-scored
/// leaves are inverted so higher raw answers read as better.
fn leaf_severity(leaf: &Leaf<'_>, score: f64) -> f64 {
    let min = leaf.min_option_score();
    let max = leaf.max_option_score();
    let percentage = if max > min {
        (score - min) / (max - min) * 100.0
    } else {
        0.0
    };
    if leaf.reverse_scored {
        100.0 - percentage
    } else {
        percentage
    }
}

fn classify_framing(leaf: &Leaf<'_>) -> Framing {
    let haystack = format!(
        "{} {}",
        leaf.domain.unwrap_or_default().to_lowercase(),
        leaf.text.to_lowercase()
    );
    if SYMPTOM_KEYWORDS.iter().any(|k| haystack.contains(k)) {
        Framing::Symptom
    } else if FUNCTIONAL_KEYWORDS.iter().any(|k| haystack.contains(k)) {
        Framing::Functional
    } else {
        Framing::Generic
    }
}

fn display_text<'a>(leaf: &Leaf<'a>, answer: &'a Answer) -> &'a str {
    if leaf.text.is_empty() {
        &answer.item_text
    } else {
        leaf.text
    }
}

fn classify_finding(framing: Framing, severity: f64, text: &str, analysis: &mut ScoreAnalysis) {
    let (positive, sentence) = match framing {
        Framing::Symptom => match severity {
            s if s >= 75.0 => (false, format!("Dor ou sintomas intensos: {text}")),
            s if s >= 50.0 => (false, format!("Sintomas moderados: {text}")),
            s if s >= 25.0 => (true, format!("Sintomas leves: {text}")),
            _ => (true, format!("Dor mínima ou ausente: {text}")),
        },
        Framing::Functional => match severity {
            s if s >= 75.0 => (
                false,
                format!("Dificuldade significativa ou incapacidade: {text}"),
            ),
            s if s >= 50.0 => (false, format!("Dificuldade moderada: {text}")),
            s if s >= 25.0 => (true, format!("Leve dificuldade: {text}")),
            _ => (true, format!("Boa capacidade funcional: {text}")),
        },
        Framing::Generic => match severity {
            s if s >= 75.0 => (false, format!("Comprometimento importante: {text}")),
            s if s >= 50.0 => (false, format!("Comprometimento moderado: {text}")),
            s if s >= 25.0 => (true, format!("Comprometimento leve: {text}")),
            _ => (true, format!("Sem comprometimento relevante: {text}")),
        },
    };

    if positive {
        analysis.positive.push(sentence);
    } else {
        analysis.negative.push(sentence);
    }
}

/// One overall sentence from the mean worseness across classified
/// leaves, only added while the findings list is still short.
fn prepend_overall(mean_severity: f64, analysis: &mut ScoreAnalysis) {
    let goodness = 100.0 - mean_severity;
    if goodness >= 80.0 {
        analysis
            .positive
            .insert(0, "Excelente resultado geral".to_string());
    } else if goodness >= 50.0 {
        analysis.positive.insert(0, "Bom resultado geral".to_string());
    } else if goodness >= 20.0 {
        analysis
            .negative
            .insert(0, "Resultado geral com comprometimento moderado".to_string());
    } else if goodness > 0.0 {
        analysis
            .negative
            .insert(0, "Resultado geral baixo, comprometimento importante".to_string());
    }
}
