use pontua_core::models::answer::ItemId;
use pontua_core::models::questionnaire::{
    Item, ItemOption, QuestionnaireDefinition, ScoreRange, Scoring, ScoringDomain, SubItem,
};
use pontua_scoring::validate::{Severity, validate};

fn option(label: &str, score: f64) -> ItemOption {
    ItemOption {
        label: label.to_string(),
        score,
    }
}

fn simple_item(id: &str) -> Item {
    Item {
        id: ItemId::new(id),
        text: format!("Pergunta {id}"),
        options: vec![option("Não", 0.0), option("Sim", 1.0)],
        ..Item::default()
    }
}

fn valid_definition() -> QuestionnaireDefinition {
    QuestionnaireDefinition {
        id: "exemplo".to_string(),
        name: "Questionário de Exemplo".to_string(),
        acronym: "EX".to_string(),
        items: vec![simple_item("q1"), simple_item("q2")],
        scoring: Scoring {
            domains: Vec::new(),
            total_formula: Some("Soma de todos os itens".to_string()),
            range: Some(ScoreRange { min: 0.0, max: 2.0 }),
            interpretation: Some("Quanto maior, pior.".to_string()),
        },
    }
}

fn error_messages(definition: &QuestionnaireDefinition) -> Vec<String> {
    validate(definition)
        .errors()
        .map(|i| i.message.clone())
        .collect()
}

fn warning_messages(definition: &QuestionnaireDefinition) -> Vec<String> {
    validate(definition)
        .warnings()
        .map(|i| i.message.clone())
        .collect()
}

#[test]
fn valid_definition_has_no_issues() {
    let report = validate(&valid_definition());
    assert!(report.success());
    assert!(report.issues.is_empty());
}

#[test]
fn missing_name_is_an_error() {
    let mut definition = valid_definition();
    definition.name.clear();
    let report = validate(&definition);
    assert!(!report.success());
    assert!(error_messages(&definition).iter().any(|m| m.contains("name")));
}

#[test]
fn missing_id_and_acronym_are_warnings() {
    let mut definition = valid_definition();
    definition.id.clear();
    definition.acronym.clear();
    let report = validate(&definition);
    assert!(report.success());
    assert_eq!(report.warnings().count(), 2);
}

#[test]
fn empty_items_is_an_error() {
    let mut definition = valid_definition();
    definition.items.clear();
    assert!(!validate(&definition).success());
}

#[test]
fn duplicate_item_id_is_an_error() {
    let mut definition = valid_definition();
    definition.items.push(simple_item("q1"));
    assert!(error_messages(&definition)
        .iter()
        .any(|m| m.contains("duplicado")));
}

#[test]
fn duplicate_option_is_a_warning_not_an_error() {
    let mut definition = valid_definition();
    definition.items[0].options.push(option("Sim", 1.0));
    let report = validate(&definition);
    assert!(report.success());
    assert!(warning_messages(&definition)
        .iter()
        .any(|m| m.contains("duplicada")));
}

#[test]
fn nan_option_score_is_an_error() {
    let mut definition = valid_definition();
    definition.items[0].options.push(option("Inválida", f64::NAN));
    assert!(!validate(&definition).success());
}

#[test]
fn composite_item_without_own_options_is_valid() {
    let mut definition = valid_definition();
    definition.items.push(Item {
        id: ItemId::new("q3"),
        text: "Item composto".to_string(),
        subitems: Some(vec![SubItem {
            id: ItemId::new("q3_a"),
            text: Some("Subitem".to_string()),
            options: vec![option("Não", 0.0), option("Sim", 1.0)],
            not_scored: false,
        }]),
        ..Item::default()
    });
    assert!(validate(&definition).success());
}

#[test]
fn dangling_domain_reference_is_an_error_and_empty_domain_a_warning() {
    let mut definition = valid_definition();
    definition.scoring.domains = vec![
        ScoringDomain {
            name: "Quebrado".to_string(),
            items: vec![ItemId::new("nao_existe")],
            formula: Some("Soma dos itens do domínio".to_string()),
        },
        ScoringDomain {
            name: "Vazio".to_string(),
            items: Vec::new(),
            formula: Some("Soma dos itens do domínio".to_string()),
        },
    ];

    let errors = error_messages(&definition);
    let warnings = warning_messages(&definition);
    assert!(errors.iter().any(|m| m.contains("nao_existe")));
    assert!(!errors.iter().any(|m| m.contains("Vazio")));
    assert!(warnings.iter().any(|m| m.contains("Vazio")));
}

#[test]
fn domain_may_reference_subitem_ids() {
    let mut definition = valid_definition();
    definition.items.push(Item {
        id: ItemId::new("q3"),
        text: "Item composto".to_string(),
        subitems: Some(vec![SubItem {
            id: ItemId::new("q3_a"),
            text: None,
            options: vec![option("Não", 0.0), option("Sim", 1.0)],
            not_scored: false,
        }]),
        ..Item::default()
    });
    definition.scoring.domains = vec![ScoringDomain {
        name: "Composto".to_string(),
        items: vec![ItemId::new("q3_a")],
        formula: Some("Soma dos itens do domínio".to_string()),
    }];
    assert!(validate(&definition).success());
}

#[test]
fn inverted_range_is_a_warning_not_an_error() {
    let mut definition = valid_definition();
    definition.scoring.range = Some(ScoreRange { min: 10.0, max: 0.0 });
    let report = validate(&definition);
    assert!(report.success());
    assert!(report.warnings().count() >= 1);
}

#[test]
fn nan_range_is_an_error() {
    let mut definition = valid_definition();
    definition.scoring.range = Some(ScoreRange {
        min: f64::NAN,
        max: 100.0,
    });
    assert!(!validate(&definition).success());
}

#[test]
fn missing_scoring_metadata_yields_warnings() {
    let mut definition = valid_definition();
    definition.scoring = Scoring::default();
    let report = validate(&definition);
    assert!(report.success());
    // total_formula, range, interpretation
    assert_eq!(report.warnings().count(), 3);
}

#[test]
fn unrecognized_total_formula_is_a_warning() {
    let mut definition = valid_definition();
    definition.scoring.total_formula = Some("Média ponderada dos itens / 2".to_string());
    let report = validate(&definition);
    assert!(report.success());
    assert!(warning_messages(&definition)
        .iter()
        .any(|m| m.contains("não reconhecida")));
}

#[test]
fn issue_serializes_with_stable_type_field() {
    let mut definition = valid_definition();
    definition.name.clear();
    let report = validate(&definition);
    let json = serde_json::to_string(&report.issues[0]).unwrap();
    assert!(json.contains("\"type\":\"error\""));
    assert_eq!(report.issues[0].severity, Severity::Error);
}
