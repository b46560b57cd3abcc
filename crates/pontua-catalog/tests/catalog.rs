use std::collections::BTreeSet;

use pontua_core::models::answer::AnswerSet;
use pontua_scoring::{score, validate_answers};

use pontua_catalog::loader::from_json;
use pontua_catalog::report::validate_catalog;

#[test]
fn registry_lists_all_builtin_questionnaires() {
    let catalog = pontua_catalog::all();
    let ids: BTreeSet<_> = catalog.iter().map(|q| q.id.clone()).collect();
    assert_eq!(ids.len(), catalog.len(), "ids must be unique");
    for id in ["dash", "koos", "wosi", "odi", "nordico"] {
        assert!(ids.contains(id), "missing builtin questionnaire {id}");
    }

    assert_eq!(pontua_catalog::get("dash").unwrap().acronym, "DASH");
    assert!(pontua_catalog::get("inexistente").is_none());
}

#[test]
fn every_builtin_definition_validates_clean() {
    let catalog = pontua_catalog::all();
    for report in validate_catalog(&catalog) {
        assert!(
            report.is_clean(),
            "{}: {:?}",
            report.questionnaire_id,
            report.issues
        );
    }
}

#[test]
fn koos_best_and_worst_case_domain_scores() {
    let koos = pontua_catalog::get("koos").unwrap();
    assert_eq!(koos.items.len(), 42);

    let best: AnswerSet = koos.items.iter().map(|i| (i.id.clone(), 0.0)).collect();
    let result = score(&koos, &best);
    for (domain, value) in result.domain_scores.as_ref().unwrap() {
        assert_eq!(*value, 100.0, "domain {domain}");
    }
    assert_eq!(result.total_score, 0.0);

    let worst: AnswerSet = koos.items.iter().map(|i| (i.id.clone(), 4.0)).collect();
    let result = score(&koos, &worst);
    for (domain, value) in result.domain_scores.as_ref().unwrap() {
        assert_eq!(*value, 0.0, "domain {domain}");
    }
}

#[test]
fn wosi_inverts_the_raw_sum_against_its_fixed_total() {
    let wosi = pontua_catalog::get("wosi").unwrap();
    assert_eq!(wosi.items.len(), 21);

    let no_symptoms: AnswerSet = wosi.items.iter().map(|i| (i.id.clone(), 0.0)).collect();
    let result = score(&wosi, &no_symptoms);
    assert_eq!(result.total_score, 100.0);
    assert!(result.is_percent);

    let worst: AnswerSet = wosi.items.iter().map(|i| (i.id.clone(), 100.0)).collect();
    assert_eq!(score(&wosi, &worst).total_score, 0.0);
}

#[test]
fn dash_full_scale_spans_zero_to_one_hundred() {
    let dash = pontua_catalog::get("dash").unwrap();
    assert_eq!(dash.items.len(), 30);

    let best: AnswerSet = dash.items.iter().map(|i| (i.id.clone(), 1.0)).collect();
    assert_eq!(score(&dash, &best).total_score, 0.0);

    let worst: AnswerSet = dash.items.iter().map(|i| (i.id.clone(), 5.0)).collect();
    assert_eq!(score(&dash, &worst).total_score, 100.0);
}

#[test]
fn odi_percent_scale() {
    let odi = pontua_catalog::get("odi").unwrap();
    assert_eq!(odi.items.len(), 10);

    // Five sections at 2 and five at 3: 25 / 50 * 100.
    let answers: AnswerSet = odi
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| (item.id.clone(), if index < 5 { 2.0 } else { 3.0 }))
        .collect();
    let result = score(&odi, &answers);
    assert_eq!(result.total_score, 50.0);
    assert!(result.is_percent);
}

#[test]
fn nordico_completeness_ignores_context_subitems() {
    let nordico = pontua_catalog::get("nordico").unwrap();

    let completeness = validate_answers(&nordico, &AnswerSet::new());
    assert_eq!(completeness.missing_items.len(), 27);
    assert!(completeness
        .missing_items
        .iter()
        .all(|id| !id.as_str().ends_with("_consulta")));

    let all_answered: AnswerSet = completeness
        .missing_items
        .iter()
        .map(|id| (id.clone(), 1.0))
        .collect();
    let completeness = validate_answers(&nordico, &all_answered);
    assert!(completeness.valid);

    let result = score(&nordico, &all_answered);
    assert_eq!(result.total_score, 27.0);
    assert!(!result.is_percent);
}

#[test]
fn definitions_round_trip_through_the_json_loader() {
    let dash = pontua_catalog::get("dash").unwrap();
    let json = serde_json::to_string(&dash).unwrap();
    let reloaded = from_json(&json).unwrap();
    assert_eq!(reloaded.id, dash.id);
    assert_eq!(reloaded.items.len(), dash.items.len());
    assert_eq!(
        score(&reloaded, &AnswerSet::new()),
        score(&dash, &AnswerSet::new())
    );
}

#[test]
fn loader_tolerates_missing_optional_fields() {
    let minimal = r#"{
        "name": "Escala Mínima",
        "items": [
            { "id": "q1", "text": "Pergunta", "options": [
                { "label": "Não", "score": 0 },
                { "label": "Sim", "score": 1 }
            ]}
        ]
    }"#;
    let definition = from_json(minimal).unwrap();
    assert!(definition.id.is_empty());

    let reports = validate_catalog(std::slice::from_ref(&definition));
    assert!(reports[0].issues.iter().all(|i| {
        i.severity == pontua_scoring::validate::Severity::Warning
    }));
    assert!(!reports[0].is_clean());
}
