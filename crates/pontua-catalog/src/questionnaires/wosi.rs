//! WOSI — Western Ontario Shoulder Instability Index.
//!
//! 21 itens em escala visual analógica de 0 a 100 (total máximo 2100).
//! O escore final inverte a soma: `((2100 - soma) / 2100) x 100`, com
//! 100 representando o melhor estado do ombro.

use pontua_core::models::answer::ItemId;
use pontua_core::models::questionnaire::{
    Item, ItemOption, QuestionnaireDefinition, ScoreRange, Scoring, ScoringDomain,
};

const PHYSICAL_ITEMS: &[(&str, &str)] = &[
    ("wosi_1", "Dor no ombro em atividades acima da cabeça"),
    ("wosi_2", "Dor ou pulsação constante no ombro"),
    ("wosi_3", "Fraqueza no ombro"),
    ("wosi_4", "Fadiga ou falta de resistência no ombro"),
    ("wosi_5", "Estalos ou crepitação no ombro"),
    ("wosi_6", "Rigidez no ombro"),
    ("wosi_7", "Desconforto nos músculos do pescoço por causa do ombro"),
    ("wosi_8", "Sensação de instabilidade ou frouxidão no ombro"),
    ("wosi_9", "Compensação do ombro com outros músculos"),
    ("wosi_10", "Perda de amplitude de movimento do ombro"),
];

const SPORT_ITEMS: &[(&str, &str)] = &[
    ("wosi_11", "Limitação na prática de esportes ou no trabalho por causa do ombro"),
    ("wosi_12", "Dificuldade para arremessar com força"),
    ("wosi_13", "Necessidade de proteger o braço durante atividades"),
    ("wosi_14", "Dificuldade para levantar pesos acima da cabeça"),
];

const LIFESTYLE_ITEMS: &[(&str, &str)] = &[
    ("wosi_15", "Medo de cair sobre o ombro"),
    ("wosi_16", "Dificuldade para manter o condicionamento físico desejado"),
    ("wosi_17", "Dificuldade para brincar ou lutar com familiares e amigos"),
    ("wosi_18", "Dificuldade para dormir por causa do ombro"),
];

const EMOTION_ITEMS: &[(&str, &str)] = &[
    ("wosi_19", "Consciência constante do ombro"),
    ("wosi_20", "Preocupação com a piora do ombro"),
    ("wosi_21", "Frustração por causa do ombro"),
];

/// Escala visual analógica discretizada em passos de 10.
fn vas_options() -> Vec<ItemOption> {
    (0..=10)
        .map(|step| ItemOption {
            label: (step * 10).to_string(),
            score: f64::from(step * 10),
        })
        .collect()
}

fn vas_items(entries: &[(&str, &str)], domain: &str) -> Vec<Item> {
    let opts = vas_options();
    entries
        .iter()
        .map(|(id, text)| Item {
            id: ItemId::new(*id),
            text: (*text).to_string(),
            domain: Some(domain.to_string()),
            options: opts.clone(),
            ..Item::default()
        })
        .collect()
}

fn domain(name: &str, entries: &[(&str, &str)]) -> ScoringDomain {
    ScoringDomain {
        name: name.to_string(),
        items: entries.iter().map(|(id, _)| ItemId::new(*id)).collect(),
        formula: Some("Soma dos itens do domínio".to_string()),
    }
}

pub fn definition() -> QuestionnaireDefinition {
    let mut items = Vec::new();
    items.extend(vas_items(PHYSICAL_ITEMS, "Sintomas físicos"));
    items.extend(vas_items(SPORT_ITEMS, "Esporte, recreação e trabalho"));
    items.extend(vas_items(LIFESTYLE_ITEMS, "Estilo de vida"));
    items.extend(vas_items(EMOTION_ITEMS, "Emoções"));

    QuestionnaireDefinition {
        id: "wosi".to_string(),
        name: "Western Ontario Shoulder Instability Index".to_string(),
        acronym: "WOSI".to_string(),
        items,
        scoring: Scoring {
            domains: vec![
                domain("Sintomas físicos", PHYSICAL_ITEMS),
                domain("Esporte, recreação e trabalho", SPORT_ITEMS),
                domain("Estilo de vida", LIFESTYLE_ITEMS),
                domain("Emoções", EMOTION_ITEMS),
            ],
            total_formula: Some("((2100 - soma de todos os pontos) / 2100) x 100".to_string()),
            range: Some(ScoreRange { min: 0.0, max: 100.0 }),
            interpretation: Some(
                "100 = nenhum comprometimento relacionado à instabilidade do ombro; \
                 0 = pior estado possível."
                    .to_string(),
            ),
        },
    }
}
