//! DASH — Disabilities of the Arm, Shoulder and Hand.
//!
//! 30 itens pontuados de 1 a 5; escore final `[(soma - 30) / 1,20]`,
//! 0 (sem disfunção) a 100 (disfunção grave).

use pontua_core::models::answer::ItemId;
use pontua_core::models::questionnaire::{
    Item, QuestionnaireDefinition, ScoreRange, Scoring,
};

use super::options;

const DIFFICULTY_ITEMS: &[&str] = &[
    "Abrir um vidro novo ou com a tampa muito apertada",
    "Escrever",
    "Virar uma chave",
    "Preparar uma refeição",
    "Empurrar e abrir uma porta pesada",
    "Colocar um objeto em uma prateleira acima da sua cabeça",
    "Fazer tarefas domésticas pesadas (lavar paredes, lavar o chão)",
    "Fazer trabalho de jardinagem",
    "Arrumar a cama",
    "Carregar uma sacola de compras ou uma maleta",
    "Carregar um objeto pesado (mais de 5 kg)",
    "Trocar uma lâmpada acima da cabeça",
    "Lavar ou secar o cabelo",
    "Lavar as costas",
    "Vestir uma blusa fechada",
    "Usar uma faca para cortar alimentos",
    "Atividades recreativas que exigem pouco esforço (jogar cartas, tricotar)",
    "Atividades recreativas que exigem força ou impacto no braço, ombro ou mão (martelar, jogar tênis)",
    "Atividades recreativas nas quais você move seu braço livremente (nadar, jogar peteca)",
    "Dirigir ou andar de ônibus",
    "Atividade sexual",
];

const SEVERITY_ITEMS: &[&str] = &[
    "Dor no braço, ombro ou mão",
    "Dor no braço, ombro ou mão ao realizar uma atividade específica",
    "Formigamento no braço, ombro ou mão",
    "Fraqueza no braço, ombro ou mão",
    "Rigidez no braço, ombro ou mão",
];

pub fn definition() -> QuestionnaireDefinition {
    let difficulty = options(&[
        ("Nenhuma dificuldade", 1.0),
        ("Pouca dificuldade", 2.0),
        ("Dificuldade média", 3.0),
        ("Muita dificuldade", 4.0),
        ("Incapaz", 5.0),
    ]);
    let severity = options(&[
        ("Nenhuma", 1.0),
        ("Leve", 2.0),
        ("Moderada", 3.0),
        ("Grave", 4.0),
        ("Extrema", 5.0),
    ]);

    let mut items = Vec::new();
    for (index, text) in DIFFICULTY_ITEMS.iter().enumerate() {
        items.push(Item {
            id: ItemId::new(format!("dash_{}", index + 1)),
            text: (*text).to_string(),
            domain: Some("Atividades".to_string()),
            options: difficulty.clone(),
            ..Item::default()
        });
    }

    items.push(Item {
        id: ItemId::new("dash_22"),
        text: "Interferência do problema no braço, ombro ou mão em atividades sociais com família e amigos".to_string(),
        domain: Some("Vida social".to_string()),
        options: options(&[
            ("Nenhuma", 1.0),
            ("Um pouco", 2.0),
            ("Moderadamente", 3.0),
            ("Bastante", 4.0),
            ("Extremamente", 5.0),
        ]),
        ..Item::default()
    });
    items.push(Item {
        id: ItemId::new("dash_23"),
        text: "Limitação no trabalho ou em outras atividades diárias regulares".to_string(),
        domain: Some("Atividades".to_string()),
        options: options(&[
            ("Nenhuma limitação", 1.0),
            ("Limitação leve", 2.0),
            ("Limitação moderada", 3.0),
            ("Limitação grave", 4.0),
            ("Incapaz", 5.0),
        ]),
        ..Item::default()
    });

    for (index, text) in SEVERITY_ITEMS.iter().enumerate() {
        items.push(Item {
            id: ItemId::new(format!("dash_{}", index + 24)),
            text: (*text).to_string(),
            domain: Some("Sintomas".to_string()),
            options: severity.clone(),
            ..Item::default()
        });
    }

    items.push(Item {
        id: ItemId::new("dash_29"),
        text: "Dificuldade para dormir por causa da dor no braço, ombro ou mão".to_string(),
        domain: Some("Sintomas".to_string()),
        options: options(&[
            ("Nenhuma dificuldade", 1.0),
            ("Pouca dificuldade", 2.0),
            ("Dificuldade média", 3.0),
            ("Muita dificuldade", 4.0),
            ("Tanta dificuldade que não consigo dormir", 5.0),
        ]),
        ..Item::default()
    });
    items.push(Item {
        id: ItemId::new("dash_30"),
        text: "Sinto-me menos capaz, menos confiante ou menos útil por causa do problema no braço, ombro ou mão".to_string(),
        domain: Some("Autopercepção".to_string()),
        options: options(&[
            ("Discordo totalmente", 1.0),
            ("Discordo", 2.0),
            ("Não concordo nem discordo", 3.0),
            ("Concordo", 4.0),
            ("Concordo totalmente", 5.0),
        ]),
        ..Item::default()
    });

    QuestionnaireDefinition {
        id: "dash".to_string(),
        name: "Disabilities of the Arm, Shoulder and Hand".to_string(),
        acronym: "DASH".to_string(),
        items,
        scoring: Scoring {
            domains: Vec::new(),
            total_formula: Some("[(Soma de todos os itens - 30) / 1,20]".to_string()),
            range: Some(ScoreRange { min: 0.0, max: 100.0 }),
            interpretation: Some(
                "0 = sem disfunção; 100 = disfunção grave do membro superior.".to_string(),
            ),
        },
    }
}
