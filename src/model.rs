use serde::{Deserialize, Serialize};
use std::fmt;

/// Marca del hueco dentro de la frase de cada pregunta
pub const BLANK_MARKER: &str = "______";

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    Junior,
    Middle,
    Senior,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Junior, Difficulty::Middle, Difficulty::Senior];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Junior => "初级",
            Difficulty::Middle => "中级",
            Difficulty::Senior => "高级",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Punto gramatical que trabaja cada pregunta
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GrammarPoint {
    NonFinite,
    RelativeClause,
    AdverbialClause,
    NounClause,
    Conjunction,
    AbsoluteConstruction,
}

impl GrammarPoint {
    pub const ALL: [GrammarPoint; 6] = [
        GrammarPoint::NonFinite,
        GrammarPoint::RelativeClause,
        GrammarPoint::AdverbialClause,
        GrammarPoint::NounClause,
        GrammarPoint::Conjunction,
        GrammarPoint::AbsoluteConstruction,
    ];

    pub fn label(self) -> &'static str {
        match self {
            GrammarPoint::NonFinite => "非谓语动词",
            GrammarPoint::RelativeClause => "定语从句",
            GrammarPoint::AdverbialClause => "状语从句",
            GrammarPoint::NounClause => "名词性从句",
            GrammarPoint::Conjunction => "连词辨析",
            GrammarPoint::AbsoluteConstruction => "独立主格",
        }
    }
}

impl fmt::Display for GrammarPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuizOption {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

/// Tarjeta de explicación, solo visible tras enviar la respuesta
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Explanation {
    pub rule: String,
    pub example: String,
    pub common_mistake: String,
    pub translation: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    pub sentence: String, // Usa BLANK_MARKER para el hueco
    pub options: Vec<QuizOption>,
    pub correct_answer: String,
    pub explanation: Explanation,
    pub difficulty: Difficulty,
    pub category: GrammarPoint,
}

impl Question {
    pub fn option(&self, option_id: &str) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    pub fn correct_option(&self) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.is_correct)
    }

    /// Parte la frase en (antes, después) del hueco
    pub fn sentence_parts(&self) -> (&str, &str) {
        self.sentence
            .split_once(BLANK_MARKER)
            .unwrap_or((self.sentence.as_str(), ""))
    }
}

/// Filtro de una dimensión: "全部" o un valor concreto
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Filter<T> {
    All,
    Only(T),
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Filter::All
    }
}

impl<T: PartialEq> Filter<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => wanted == value,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuestionFilter {
    pub difficulty: Filter<Difficulty>,
    pub category: Filter<GrammarPoint>,
}

impl QuestionFilter {
    pub fn matches(&self, question: &Question) -> bool {
        self.difficulty.matches(&question.difficulty) && self.category.matches(&question.category)
    }

    pub fn is_all(&self) -> bool {
        matches!((self.difficulty, self.category), (Filter::All, Filter::All))
    }
}

/// Fase de la sesión, siempre derivada del estado (nunca guardada)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    Idle,
    Answering,
    Submitted,
    Finished,
}
