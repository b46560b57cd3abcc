//! ODI — Índice de Incapacidade de Oswestry.
//!
//! 10 seções com 6 afirmativas cada (0 a 5 pontos); escore final
//! `(soma / 50) x 100`, 0 (sem incapacidade) a 100 (incapacidade
//! máxima por dor lombar).

use pontua_core::models::answer::ItemId;
use pontua_core::models::questionnaire::{
    Item, QuestionnaireDefinition, ScoreRange, Scoring,
};

use super::options;

pub fn definition() -> QuestionnaireDefinition {
    let sections: &[(&str, &str, &[(&str, f64)])] = &[
        (
            "odi_1",
            "Intensidade da dor",
            &[
                ("Não sinto dor no momento", 0.0),
                ("A dor é muito leve no momento", 1.0),
                ("A dor é moderada no momento", 2.0),
                ("A dor é razoavelmente intensa no momento", 3.0),
                ("A dor é muito intensa no momento", 4.0),
                ("A dor é a pior que se pode imaginar", 5.0),
            ],
        ),
        (
            "odi_2",
            "Cuidados pessoais (lavar-se, vestir-se etc.)",
            &[
                ("Posso cuidar de mim sem provocar dor extra", 0.0),
                ("Posso cuidar de mim, mas sinto dor", 1.0),
                ("Sinto dor ao cuidar de mim e faço isso lentamente", 2.0),
                ("Necessito de alguma ajuda, mas consigo me cuidar", 3.0),
                ("Necessito de ajuda diária na maioria dos cuidados", 4.0),
                ("Não consigo me vestir, lavo-me com dificuldade e fico na cama", 5.0),
            ],
        ),
        (
            "odi_3",
            "Levantar objetos",
            &[
                ("Consigo levantar objetos pesados sem dor extra", 0.0),
                ("Consigo levantar objetos pesados, mas sinto dor extra", 1.0),
                ("A dor me impede de levantar objetos pesados do chão, mas consigo se estiverem bem posicionados", 2.0),
                ("A dor me impede de levantar objetos pesados, mas consigo levantar objetos leves ou médios bem posicionados", 3.0),
                ("Consigo levantar apenas objetos muito leves", 4.0),
                ("Não consigo levantar ou carregar nada", 5.0),
            ],
        ),
        (
            "odi_4",
            "Andar",
            &[
                ("A dor não me impede de andar qualquer distância", 0.0),
                ("A dor me impede de andar mais de 1,6 km", 1.0),
                ("A dor me impede de andar mais de 800 m", 2.0),
                ("A dor me impede de andar mais de 400 m", 3.0),
                ("Só consigo andar com bengala ou muletas", 4.0),
                ("Fico na cama a maior parte do tempo", 5.0),
            ],
        ),
        (
            "odi_5",
            "Sentar",
            &[
                ("Consigo sentar em qualquer cadeira pelo tempo que quiser", 0.0),
                ("Consigo sentar na minha cadeira favorita pelo tempo que quiser", 1.0),
                ("A dor me impede de sentar por mais de 1 hora", 2.0),
                ("A dor me impede de sentar por mais de meia hora", 3.0),
                ("A dor me impede de sentar por mais de 10 minutos", 4.0),
                ("A dor me impede totalmente de sentar", 5.0),
            ],
        ),
        (
            "odi_6",
            "Ficar em pé",
            &[
                ("Consigo ficar em pé pelo tempo que quiser sem dor extra", 0.0),
                ("Consigo ficar em pé pelo tempo que quiser, mas sinto dor extra", 1.0),
                ("A dor me impede de ficar em pé por mais de 1 hora", 2.0),
                ("A dor me impede de ficar em pé por mais de meia hora", 3.0),
                ("A dor me impede de ficar em pé por mais de 10 minutos", 4.0),
                ("A dor me impede totalmente de ficar em pé", 5.0),
            ],
        ),
        (
            "odi_7",
            "Dormir",
            &[
                ("Meu sono nunca é perturbado pela dor", 0.0),
                ("Meu sono é ocasionalmente perturbado pela dor", 1.0),
                ("Durmo menos de 6 horas por causa da dor", 2.0),
                ("Durmo menos de 4 horas por causa da dor", 3.0),
                ("Durmo menos de 2 horas por causa da dor", 4.0),
                ("A dor me impede totalmente de dormir", 5.0),
            ],
        ),
        (
            "odi_8",
            "Vida sexual",
            &[
                ("Minha vida sexual é normal e não causa dor extra", 0.0),
                ("Minha vida sexual é normal, mas causa um pouco de dor extra", 1.0),
                ("Minha vida sexual é quase normal, mas é muito dolorosa", 2.0),
                ("Minha vida sexual é muito restringida pela dor", 3.0),
                ("Minha vida sexual é praticamente inexistente por causa da dor", 4.0),
                ("A dor impede qualquer atividade sexual", 5.0),
            ],
        ),
        (
            "odi_9",
            "Vida social",
            &[
                ("Minha vida social é normal e não causa dor extra", 0.0),
                ("Minha vida social é normal, mas aumenta o grau de dor", 1.0),
                ("A dor limita atividades mais vigorosas, como esportes", 2.0),
                ("A dor restringiu minha vida social e não saio muito de casa", 3.0),
                ("A dor restringiu minha vida social à minha casa", 4.0),
                ("Não tenho vida social por causa da dor", 5.0),
            ],
        ),
        (
            "odi_10",
            "Viagens (locomoção)",
            &[
                ("Posso viajar para qualquer lugar sem dor", 0.0),
                ("Posso viajar para qualquer lugar, mas sinto dor extra", 1.0),
                ("A dor é forte, mas consigo viajar por 2 horas", 2.0),
                ("A dor restringe viagens a menos de 1 hora", 3.0),
                ("A dor restringe viagens curtas e necessárias a menos de 30 minutos", 4.0),
                ("A dor me impede de viajar, exceto para receber tratamento", 5.0),
            ],
        ),
    ];

    let items = sections
        .iter()
        .map(|(id, text, option_pairs)| Item {
            id: ItemId::new(*id),
            text: (*text).to_string(),
            domain: Some("Incapacidade".to_string()),
            options: options(option_pairs),
            ..Item::default()
        })
        .collect();

    QuestionnaireDefinition {
        id: "odi".to_string(),
        name: "Índice de Incapacidade de Oswestry".to_string(),
        acronym: "ODI".to_string(),
        items,
        scoring: Scoring {
            domains: Vec::new(),
            total_formula: Some("(Soma de todos os itens / 50) x 100".to_string()),
            range: Some(ScoreRange { min: 0.0, max: 100.0 }),
            interpretation: Some(
                "0–20%: incapacidade mínima; 21–40%: moderada; 41–60%: intensa; \
                 61–80%: aleijado; 81–100%: inválido ou exagero dos sintomas."
                    .to_string(),
            ),
        },
    }
}
