//! KOOS — Knee injury and Osteoarthritis Outcome Score.
//!
//! 42 itens de 0 a 4 em cinco domínios. Cada domínio é normalizado por
//! `100 - (soma do domínio x 100) / (4 * itens respondidos)`: 100 é o
//! melhor resultado possível e 0 o pior.

use pontua_core::models::answer::ItemId;
use pontua_core::models::questionnaire::{
    Item, ItemOption, QuestionnaireDefinition, ScoreRange, Scoring, ScoringDomain,
};

use super::options;

const DOMAIN_FORMULA: &str = "100 - (soma do domínio x 100) / (4 * itens respondidos)";

const SYMPTOM_ITEMS: &[(&str, &str)] = &[
    ("koos_s1", "Inchaço no joelho"),
    ("koos_s2", "Ranger, ouvir cliques ou outros ruídos ao movimentar o joelho"),
    ("koos_s3", "Travamento do joelho ao movimentar-se"),
    ("koos_s4", "Dificuldade para esticar totalmente o joelho"),
    ("koos_s5", "Dificuldade para dobrar totalmente o joelho"),
    ("koos_s6", "Rigidez no joelho ao acordar pela manhã"),
    ("koos_s7", "Rigidez no joelho após sentar, deitar ou repousar"),
];

const PAIN_ITEMS: &[(&str, &str)] = &[
    ("koos_p1", "Frequência com que sente dor no joelho"),
    ("koos_p2", "Dor ao girar sobre o joelho"),
    ("koos_p3", "Dor ao esticar totalmente o joelho"),
    ("koos_p4", "Dor ao dobrar totalmente o joelho"),
    ("koos_p5", "Dor ao andar em superfície plana"),
    ("koos_p6", "Dor ao subir ou descer escadas"),
    ("koos_p7", "Dor à noite, deitado na cama"),
    ("koos_p8", "Dor ao sentar ou deitar"),
    ("koos_p9", "Dor ao ficar em pé"),
];

const ADL_ITEMS: &[(&str, &str)] = &[
    ("koos_a1", "Descer escadas"),
    ("koos_a2", "Subir escadas"),
    ("koos_a3", "Levantar-se da posição sentada"),
    ("koos_a4", "Ficar em pé"),
    ("koos_a5", "Abaixar-se para pegar um objeto no chão"),
    ("koos_a6", "Andar em superfície plana"),
    ("koos_a7", "Entrar e sair do carro"),
    ("koos_a8", "Fazer compras"),
    ("koos_a9", "Colocar meias"),
    ("koos_a10", "Levantar da cama"),
    ("koos_a11", "Tirar as meias"),
    ("koos_a12", "Manter a posição deitada na cama"),
    ("koos_a13", "Entrar e sair do banho"),
    ("koos_a14", "Sentar"),
    ("koos_a15", "Sentar e levantar do vaso sanitário"),
    ("koos_a16", "Fazer tarefas domésticas pesadas"),
    ("koos_a17", "Fazer tarefas domésticas leves"),
];

const SPORT_ITEMS: &[(&str, &str)] = &[
    ("koos_sp1", "Agachar"),
    ("koos_sp2", "Correr"),
    ("koos_sp3", "Pular"),
    ("koos_sp4", "Girar sobre o joelho lesionado"),
    ("koos_sp5", "Ajoelhar"),
];

const QOL_ITEMS: &[(&str, &str)] = &[
    ("koos_q1", "Frequência com que percebe o problema no joelho"),
    ("koos_q2", "Modificação do estilo de vida para evitar atividades que possam piorar o joelho"),
    ("koos_q3", "Incômodo com a falta de confiança no joelho"),
    ("koos_q4", "Dificuldade geral com o joelho"),
];

fn likert_items(entries: &[(&str, &str)], domain: &str, opts: &[ItemOption]) -> Vec<Item> {
    entries
        .iter()
        .map(|(id, text)| Item {
            id: ItemId::new(*id),
            text: (*text).to_string(),
            domain: Some(domain.to_string()),
            options: opts.to_vec(),
            ..Item::default()
        })
        .collect()
}

fn domain(name: &str, entries: &[(&str, &str)]) -> ScoringDomain {
    ScoringDomain {
        name: name.to_string(),
        items: entries.iter().map(|(id, _)| ItemId::new(*id)).collect(),
        formula: Some(DOMAIN_FORMULA.to_string()),
    }
}

pub fn definition() -> QuestionnaireDefinition {
    let severity = options(&[
        ("Nenhuma", 0.0),
        ("Leve", 1.0),
        ("Moderada", 2.0),
        ("Grave", 3.0),
        ("Extrema", 4.0),
    ]);
    let frequency = options(&[
        ("Nunca", 0.0),
        ("Raramente", 1.0),
        ("Às vezes", 2.0),
        ("Frequentemente", 3.0),
        ("Sempre", 4.0),
    ]);

    let mut items = Vec::new();
    items.extend(likert_items(&SYMPTOM_ITEMS[..1], "Sintomas", &frequency));
    items.extend(likert_items(&SYMPTOM_ITEMS[1..], "Sintomas", &severity));
    items.extend(likert_items(&PAIN_ITEMS[..1], "Dor", &frequency));
    items.extend(likert_items(&PAIN_ITEMS[1..], "Dor", &severity));
    items.extend(likert_items(ADL_ITEMS, "Função no dia a dia", &severity));
    items.extend(likert_items(
        SPORT_ITEMS,
        "Atividades esportivas e de recreação",
        &severity,
    ));
    items.extend(likert_items(&QOL_ITEMS[..1], "Qualidade de vida", &frequency));
    items.extend(likert_items(&QOL_ITEMS[1..], "Qualidade de vida", &severity));

    QuestionnaireDefinition {
        id: "koos".to_string(),
        name: "Knee injury and Osteoarthritis Outcome Score".to_string(),
        acronym: "KOOS".to_string(),
        items,
        scoring: Scoring {
            domains: vec![
                domain("Sintomas", SYMPTOM_ITEMS),
                domain("Dor", PAIN_ITEMS),
                domain("Atividades de vida diária", ADL_ITEMS),
                domain("Esporte e recreação", SPORT_ITEMS),
                domain("Qualidade de vida", QOL_ITEMS),
            ],
            total_formula: Some(
                "Soma de todos os itens (os escores por domínio são normalizados de 0 a 100)"
                    .to_string(),
            ),
            range: Some(ScoreRange { min: 0.0, max: 168.0 }),
            interpretation: Some(
                "Escores por domínio de 0 a 100: 100 indica ausência de problemas e 0 \
                 problemas extremos no joelho."
                    .to_string(),
            ),
        },
    }
}
