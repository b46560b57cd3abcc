//! Formula classification and evaluation.
//!
//! Catalog formulas are human-authored Portuguese descriptions, not a
//! real expression language. Only a fixed set of recognized shapes are
//! special-cased; anything else degrades to the raw sum. Each text is
//! classified once into a closed variant when the definition is loaded
//! for scoring, then dispatched by `match` — never re-parsed per call.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

/// `(\d+...)` with Brazilian decimal commas tolerated ("1,20").
const NUM: &str = r"(\d+(?:[.,]\d+)?)";

/// `[(Soma de todos os itens - A) / B] * C` — the multiplier is
/// optional (DASH writes `[(soma - 30) / 1,20]` with no `* 100`).
static LINEAR_RESCALE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)soma\s+de\s+todos\s+os\s+itens\s*-\s*{NUM}\s*[)\]\s]*/\s*{NUM}\s*[)\]\s]*(?:[x*×]\s*{NUM})?"
    ))
    .unwrap()
});

/// `(Soma de todos os itens / A) * B` — ODI-style.
static DIVIDE_MULTIPLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)soma\s+de\s+todos\s+os\s+itens\s*[)\]\s]*/\s*{NUM}\s*[)\]\s]*[x*×]\s*{NUM}"
    ))
    .unwrap()
});

/// `((C - soma) / C) x 100` — WOSI-style inverse normalization against
/// a fixed constant total.
static INVERSE_CONSTANT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"\(\s*{NUM}\s*[-–]\s*[^)]*\)\s*/\s*{NUM}")).unwrap());

/// How the total raw sum maps onto the reported output scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TotalFormula {
    /// `((raw_sum - subtract) / divide) * multiply`.
    LinearRescale {
        subtract: f64,
        divide: f64,
        multiply: f64,
    },
    /// `((constant - raw_sum) / constant) * 100`.
    InverseConstant { constant: f64 },
    /// No recognized pattern: the raw sum passes through unchanged.
    Raw,
}

impl TotalFormula {
    /// Classify a total-formula text. Unmatched text is `Raw` — a
    /// silent fallback by design of the original catalogs, surfaced as
    /// a validation warning rather than a scoring error.
    pub fn classify(text: Option<&str>) -> TotalFormula {
        let Some(text) = text else {
            return TotalFormula::Raw;
        };

        if let Some(captures) = LINEAR_RESCALE.captures(text) {
            let subtract = parse_number(&captures[1]);
            let divide = parse_number(&captures[2]);
            let multiply = captures.get(3).map_or(1.0, |m| parse_number(m.as_str()));
            if divide != 0.0 {
                debug!(subtract, divide, multiply, "fórmula total: reescala linear");
                return TotalFormula::LinearRescale {
                    subtract,
                    divide,
                    multiply,
                };
            }
        }

        if let Some(captures) = DIVIDE_MULTIPLY.captures(text) {
            let divide = parse_number(&captures[1]);
            let multiply = parse_number(&captures[2]);
            if divide != 0.0 {
                debug!(divide, multiply, "fórmula total: divisão e multiplicação");
                return TotalFormula::LinearRescale {
                    subtract: 0.0,
                    divide,
                    multiply,
                };
            }
        }

        if let Some(captures) = INVERSE_CONSTANT.captures(text) {
            let constant = parse_number(&captures[1]);
            // Both occurrences must name the same fixed total.
            if constant != 0.0 && constant == parse_number(&captures[2]) {
                debug!(constant, "fórmula total: normalização inversa por constante");
                return TotalFormula::InverseConstant { constant };
            }
        }

        TotalFormula::Raw
    }

    pub fn evaluate(&self, raw_sum: f64) -> f64 {
        match *self {
            TotalFormula::LinearRescale {
                subtract,
                divide,
                multiply,
            } => ((raw_sum - subtract) / divide) * multiply,
            TotalFormula::InverseConstant { constant } => {
                ((constant - raw_sum) / constant) * 100.0
            }
            TotalFormula::Raw => raw_sum,
        }
    }
}

/// How a domain's item contributions combine into its sub-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainFormula {
    /// `100 - (domain_sum * 100) / (4 * answered_count)` — KOOS, HOOS
    /// and FAOS all normalize 0–4 Likert domains this way. Dividing by
    /// the answered count rather than the full item list avoids
    /// distorting partially answered domains.
    Koos4x,
    /// Plain sum of the domain's contributions.
    Sum,
}

impl DomainFormula {
    pub fn classify(text: Option<&str>) -> DomainFormula {
        let Some(text) = text else {
            return DomainFormula::Sum;
        };
        let collapsed = collapse_whitespace(text);
        if collapsed.contains("100 -") && collapsed.contains("/ (4 *") {
            DomainFormula::Koos4x
        } else {
            DomainFormula::Sum
        }
    }

    pub fn evaluate(&self, domain_sum: f64, answered_count: usize) -> f64 {
        match self {
            DomainFormula::Koos4x => {
                // Nothing answered in the domain: report 0 rather than
                // a divide-by-zero NaN.
                if answered_count == 0 {
                    return 0.0;
                }
                100.0 - (domain_sum * 100.0) / (4.0 * answered_count as f64)
            }
            DomainFormula::Sum => domain_sum,
        }
    }
}

fn parse_number(text: &str) -> f64 {
    text.replace(',', ".").parse().unwrap_or(0.0)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
