// src/view_models.rs

use crate::model::GrammarPoint;
use crate::session::ResultTier;

#[derive(Clone, Debug, PartialEq)]
pub struct ProgressView {
    pub position: usize, // 1-based
    pub total: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlankState {
    Empty,   // sin opción elegida
    Pending, // elegida, sin enviar
    Correct,
    Wrong,
}

/// Frase con el hueco ya rellenado
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentenceView {
    pub before: String,
    pub blank: String,
    pub after: String,
    pub state: BlankState,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Idle,
    Selected,
    Correct,
    Wrong,
    Dimmed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionView {
    pub id: String,
    pub text: String,
    pub state: OptionState,
    pub enabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExplanationCard {
    pub answered_correctly: bool,
    pub rule: String,
    pub example: String,
    pub common_mistake: String,
    pub translation: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsView {
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    pub tier: ResultTier,
    pub review_topics: Vec<GrammarPoint>,
}

impl ProgressView {
    pub fn label(&self) -> String {
        format!("{} / {}", self.position, self.total)
    }

    /// Fracción para la barra de progreso
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.position as f32 / self.total as f32
        }
    }
}

impl ResultsView {
    pub fn score_label(&self) -> String {
        format!("{} / {}", self.score, self.total)
    }

    pub fn message(&self) -> &'static str {
        self.tier.message()
    }

    pub fn topic_labels(&self) -> Vec<String> {
        self.review_topics
            .iter()
            .map(|g| format!("{}专题", g.label()))
            .collect()
    }
}
