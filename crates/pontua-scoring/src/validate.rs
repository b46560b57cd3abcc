//! Schema validation for questionnaire definitions.
//!
//! Validation never fails hard: every check produces a categorized
//! issue and the caller decides what is fatal. The scoring engine
//! treats errors as fatal; the in-app validation view shows the same
//! report as advisory.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use pontua_core::models::questionnaire::QuestionnaireDefinition;

use crate::formula::{DomainFormula, TotalFormula};

/// How bad an issue is. Errors make the definition structurally
/// unusable for scoring; warnings are suspicious but tolerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Error,
    Warning,
}

/// One validation finding. The serialized shape (`type` + `message`)
/// is stable so catalog reports can be diffed between versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[error("{message}")]
#[ts(export)]
pub struct Issue {
    #[serde(rename = "type")]
    pub severity: Severity,
    pub message: String,
}

/// The full validation report for one definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidationReport {
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    /// True when the definition carries no errors (warnings allowed).
    pub fn success(&self) -> bool {
        !self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Issue> {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Issue> {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
    }

    fn error(&mut self, message: impl Into<String>) {
        self.issues.push(Issue {
            severity: Severity::Error,
            message: message.into(),
        });
    }

    fn warning(&mut self, message: impl Into<String>) {
        self.issues.push(Issue {
            severity: Severity::Warning,
            message: message.into(),
        });
    }
}

/// Validate the shape of a questionnaire definition.
///
/// Always returns a structured report, never panics or errors.
pub fn validate(definition: &QuestionnaireDefinition) -> ValidationReport {
    let mut report = ValidationReport::default();

    check_top_level(definition, &mut report);
    check_items(definition, &mut report);
    check_domains(definition, &mut report);
    check_scoring(definition, &mut report);

    report
}

fn check_top_level(definition: &QuestionnaireDefinition, report: &mut ValidationReport) {
    if definition.id.is_empty() {
        report.warning("questionário sem 'id' (um id será sintetizado pelo aplicativo)");
    }
    if definition.name.is_empty() {
        report.error("questionário sem 'name'");
    }
    if definition.acronym.is_empty() {
        report.warning("questionário sem 'acronym'");
    }
    if definition.items.is_empty() {
        report.error("questionário sem itens");
    }
}

fn check_items(definition: &QuestionnaireDefinition, report: &mut ValidationReport) {
    let mut seen_ids = BTreeSet::new();

    for (index, item) in definition.items.iter().enumerate() {
        let position = index + 1;

        if item.id.is_empty() {
            report.error(format!("item {position} sem 'id'"));
        } else if !seen_ids.insert(item.id.clone()) {
            report.error(format!("item '{}' com id duplicado", item.id));
        }

        if item.text.is_empty() {
            report.error(format!("item {position} sem 'text'"));
        }

        // Composite items are answered through sub-items and are exempt
        // from the own-options requirement.
        if item.options.is_empty() && !item.is_composite() {
            report.error(format!("item {position} sem opções"));
        }

        let mut seen_options = BTreeSet::new();
        for option in &item.options {
            if option.score.is_nan() {
                report.error(format!(
                    "item {position}: opção '{}' com score não numérico",
                    option.label
                ));
            } else if !seen_options.insert((option.label.clone(), option.score.to_bits())) {
                report.warning(format!(
                    "item {position}: opção duplicada '{}' (score {})",
                    option.label, option.score
                ));
            }
        }

        for subitem in item.subitems.iter().flatten() {
            if subitem.id.is_empty() {
                report.error(format!("item {position}: subitem sem 'id'"));
            } else if !seen_ids.insert(subitem.id.clone()) {
                report.error(format!("subitem '{}' com id duplicado", subitem.id));
            }
            for option in &subitem.options {
                if option.score.is_nan() {
                    report.error(format!(
                        "subitem '{}': opção '{}' com score não numérico",
                        subitem.id, option.label
                    ));
                }
            }
        }
    }
}

fn check_domains(definition: &QuestionnaireDefinition, report: &mut ValidationReport) {
    let known_ids: BTreeSet<_> = definition
        .items
        .iter()
        .flat_map(|item| {
            std::iter::once(&item.id).chain(item.subitems.iter().flatten().map(|s| &s.id))
        })
        .collect();

    for domain in &definition.scoring.domains {
        if domain.name.is_empty() {
            report.error("domínio de escore sem 'name'");
        }
        if domain.items.is_empty() {
            report.warning(format!("domínio '{}' sem itens", domain.name));
        }
        for id in &domain.items {
            if !known_ids.contains(id) {
                report.error(format!(
                    "domínio '{}' referencia item inexistente '{id}'",
                    domain.name
                ));
            }
        }
        match &domain.formula {
            None => report.warning(format!(
                "domínio '{}' sem 'formula' (soma simples será usada)",
                domain.name
            )),
            Some(text) => {
                // Unmatched formula text silently degrades to the plain
                // sum at scoring time; surface it here so catalog
                // authors can spot typos.
                if DomainFormula::classify(Some(text.as_str())) == DomainFormula::Sum
                    && !text.trim().is_empty()
                    && !is_plain_sum_text(text)
                {
                    report.warning(format!(
                        "domínio '{}': fórmula não reconhecida, soma simples será usada: \"{text}\"",
                        domain.name
                    ));
                }
            }
        }
    }
}

fn check_scoring(definition: &QuestionnaireDefinition, report: &mut ValidationReport) {
    let scoring = &definition.scoring;

    match &scoring.total_formula {
        None => report.warning("scoring sem 'total_formula'"),
        Some(text) => {
            if TotalFormula::classify(Some(text.as_str())) == TotalFormula::Raw
                && !text.trim().is_empty()
                && !is_plain_sum_text(text)
            {
                report.warning(format!(
                    "fórmula total não reconhecida, soma bruta será usada: \"{text}\""
                ));
            }
        }
    }

    match &scoring.range {
        None => report.warning("scoring sem 'range'"),
        Some(range) => {
            if range.min.is_nan() || range.max.is_nan() {
                report.error("range com limites não numéricos");
            } else if range.max <= range.min {
                report.warning(format!(
                    "range com max ({}) menor ou igual ao min ({})",
                    range.max, range.min
                ));
            }
        }
    }

    if scoring.interpretation.is_none() {
        report.warning("scoring sem 'interpretation'");
    }
}

/// Formula texts that just describe the plain sum are not worth a
/// warning.
fn is_plain_sum_text(text: &str) -> bool {
    let lowered = text.to_lowercase();
    lowered.contains("soma") && !lowered.contains('/') && !lowered.contains('*')
}
