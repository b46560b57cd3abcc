//! Questionário Nórdico de Sintomas Osteomusculares.
//!
//! Nove regiões corporais apresentadas em tabela; cada região é um item
//! composto cujas respostas vêm dos subitens. O subitem de consulta a
//! profissional de saúde é registrado apenas como contexto e não entra
//! na pontuação nem na checagem de completude.

use pontua_core::models::answer::ItemId;
use pontua_core::models::questionnaire::{
    Item, ItemFormat, QuestionnaireDefinition, ScoreRange, Scoring, ScoringDomain, SubItem,
};

use super::options;

const REGIONS: &[(&str, &str)] = &[
    ("pescoco", "Pescoço"),
    ("ombros", "Ombros"),
    ("costas_superior", "Parte superior das costas"),
    ("cotovelos", "Cotovelos"),
    ("punhos_maos", "Punhos e mãos"),
    ("costas_inferior", "Parte inferior das costas"),
    ("quadris_coxas", "Quadris e coxas"),
    ("joelhos", "Joelhos"),
    ("tornozelos_pes", "Tornozelos e pés"),
];

const UPPER_LIMBS: &[&str] = &["ombros", "cotovelos", "punhos_maos"];
const SPINE: &[&str] = &["pescoco", "costas_superior", "costas_inferior"];
const LOWER_LIMBS: &[&str] = &["quadris_coxas", "joelhos", "tornozelos_pes"];

fn region_item(key: &str, region: &str) -> Item {
    let yes_no = options(&[("Não", 0.0), ("Sim", 1.0)]);
    Item {
        id: ItemId::new(format!("nordico_{key}")),
        text: region.to_string(),
        domain: Some("Sintomas osteomusculares".to_string()),
        format: Some(ItemFormat::Table),
        subitems: Some(vec![
            SubItem {
                id: ItemId::new(format!("nordico_{key}_12m")),
                text: Some(format!(
                    "Teve problemas (dor, formigamento ou dormência) em {region} nos últimos 12 meses"
                )),
                options: yes_no.clone(),
                not_scored: false,
            },
            SubItem {
                id: ItemId::new(format!("nordico_{key}_impedimento")),
                text: Some(format!(
                    "Foi impedido de realizar atividades normais por causa de problemas em {region}"
                )),
                options: yes_no.clone(),
                not_scored: false,
            },
            SubItem {
                id: ItemId::new(format!("nordico_{key}_7d")),
                text: Some(format!("Teve problemas em {region} nos últimos 7 dias")),
                options: yes_no.clone(),
                not_scored: false,
            },
            SubItem {
                id: ItemId::new(format!("nordico_{key}_consulta")),
                text: Some(format!(
                    "Consultou algum profissional de saúde por causa de problemas em {region}"
                )),
                options: yes_no,
                not_scored: true,
            },
        ]),
        ..Item::default()
    }
}

fn domain(name: &str, keys: &[&str]) -> ScoringDomain {
    ScoringDomain {
        name: name.to_string(),
        items: keys
            .iter()
            .flat_map(|key| {
                ["12m", "impedimento", "7d"]
                    .iter()
                    .map(move |suffix| ItemId::new(format!("nordico_{key}_{suffix}")))
            })
            .collect(),
        formula: Some("Soma dos itens do domínio".to_string()),
    }
}

pub fn definition() -> QuestionnaireDefinition {
    QuestionnaireDefinition {
        id: "nordico".to_string(),
        name: "Questionário Nórdico de Sintomas Osteomusculares".to_string(),
        acronym: "QNSO".to_string(),
        items: REGIONS
            .iter()
            .map(|(key, region)| region_item(key, region))
            .collect(),
        scoring: Scoring {
            domains: vec![
                domain("Coluna e pescoço", SPINE),
                domain("Membros superiores", UPPER_LIMBS),
                domain("Membros inferiores", LOWER_LIMBS),
            ],
            total_formula: Some("Soma de todas as respostas positivas".to_string()),
            range: Some(ScoreRange { min: 0.0, max: 27.0 }),
            interpretation: Some(
                "Quanto maior a soma de respostas positivas, maior a carga de sintomas \
                 osteomusculares relatada."
                    .to_string(),
            ),
        },
    }
}
