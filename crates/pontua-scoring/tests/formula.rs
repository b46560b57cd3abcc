use pontua_scoring::formula::{DomainFormula, TotalFormula};

#[test]
fn dash_style_linear_rescale() {
    let formula =
        TotalFormula::classify(Some("[(Soma de todos os itens - 30) / 75) ] * 100"));
    assert_eq!(
        formula,
        TotalFormula::LinearRescale {
            subtract: 30.0,
            divide: 75.0,
            multiply: 100.0,
        }
    );
    assert_eq!(formula.evaluate(30.0), 0.0);
    assert_eq!(formula.evaluate(105.0), 100.0);
}

#[test]
fn dash_catalog_text_with_decimal_comma() {
    let formula = TotalFormula::classify(Some("[(Soma de todos os itens - 30) / 1,20]"));
    assert_eq!(
        formula,
        TotalFormula::LinearRescale {
            subtract: 30.0,
            divide: 1.2,
            multiply: 1.0,
        }
    );
    assert_eq!(formula.evaluate(150.0), 100.0);
}

#[test]
fn odi_style_divide_multiply() {
    let formula = TotalFormula::classify(Some("(Soma de todos os itens / 50) x 100"));
    assert_eq!(
        formula,
        TotalFormula::LinearRescale {
            subtract: 0.0,
            divide: 50.0,
            multiply: 100.0,
        }
    );
    assert_eq!(formula.evaluate(25.0), 50.0);
}

#[test]
fn wosi_style_inverse_constant() {
    let formula =
        TotalFormula::classify(Some("((2100 - soma de todos os pontos) / 2100) x 100"));
    assert_eq!(formula, TotalFormula::InverseConstant { constant: 2100.0 });
    assert_eq!(formula.evaluate(0.0), 100.0);
    assert_eq!(formula.evaluate(2100.0), 0.0);
    assert_eq!(formula.evaluate(1050.0), 50.0);
}

#[test]
fn unrecognized_text_falls_back_to_raw() {
    for text in [
        None,
        Some("Média ponderada dos domínios"),
        Some("Escore T conforme tabela normativa"),
        Some(""),
    ] {
        let formula = TotalFormula::classify(text);
        assert_eq!(formula, TotalFormula::Raw);
        assert_eq!(formula.evaluate(42.5), 42.5);
    }
}

#[test]
fn mismatched_inverse_constants_are_not_recognized() {
    let formula = TotalFormula::classify(Some("((2100 - soma dos pontos) / 1900) x 100"));
    assert_eq!(formula, TotalFormula::Raw);
}

#[test]
fn koos_domain_formula_recognized() {
    let formula =
        DomainFormula::classify(Some("100 - (soma do domínio x 100) / (4 * itens respondidos)"));
    assert_eq!(formula, DomainFormula::Koos4x);

    assert_eq!(formula.evaluate(0.0, 4), 100.0);
    assert_eq!(formula.evaluate(16.0, 4), 0.0);
    // Partially answered domains divide by the answered count.
    assert_eq!(formula.evaluate(4.0, 2), 50.0);
}

#[test]
fn koos_domain_with_nothing_answered_reports_zero() {
    assert_eq!(DomainFormula::Koos4x.evaluate(0.0, 0), 0.0);
}

#[test]
fn other_domain_formulas_default_to_the_plain_sum() {
    for text in [None, Some("Soma dos itens do domínio"), Some("qualquer coisa")] {
        let formula = DomainFormula::classify(text);
        assert_eq!(formula, DomainFormula::Sum);
        assert_eq!(formula.evaluate(7.5, 3), 7.5);
    }
}
