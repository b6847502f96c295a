use crate::data::QuestionBank;
use crate::error::Rejected;
use crate::model::{Difficulty, Filter, GrammarPoint, QuestionFilter, QuizOption, QuizPhase};

// Submódulos
pub mod completion;
pub mod navigation;
pub mod queries;
pub mod resets;
pub mod transitions;
pub mod view_models;

pub use completion::{ResultTier, percentage};

/// Estado de una sesión de quiz.
///
/// Es un valor: cada transición devuelve la sesión siguiente en vez de
/// mutar la actual, y todo lo derivado (preguntas activas, fase,
/// porcentaje) se recalcula a partir del banco en cada lectura.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizSession {
    filter: QuestionFilter,
    current_index: usize,
    selected_option_id: Option<String>,
    is_submitted: bool,
    score: usize,
    show_results: bool,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> QuestionFilter {
        self.filter
    }

    pub fn difficulty_filter(&self) -> Filter<Difficulty> {
        self.filter.difficulty
    }

    pub fn category_filter(&self) -> Filter<GrammarPoint> {
        self.filter.category
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn selected_option_id(&self) -> Option<&str> {
        self.selected_option_id.as_deref()
    }

    pub fn is_submitted(&self) -> bool {
        self.is_submitted
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn show_results(&self) -> bool {
        self.show_results
    }

    /// Fase actual. `Idle` tiene prioridad: sin preguntas activas no hay
    /// nada que responder ni que mostrar.
    pub fn phase(&self, bank: &QuestionBank) -> QuizPhase {
        if self.active_len(bank) == 0 {
            QuizPhase::Idle
        } else if self.show_results {
            QuizPhase::Finished
        } else if self.is_submitted {
            QuizPhase::Submitted
        } else {
            QuizPhase::Answering
        }
    }

    /// Opción seleccionada resuelta contra la pregunta actual
    pub fn selected_option<'a>(&self, bank: &'a QuestionBank) -> Option<&'a QuizOption> {
        let id = self.selected_option_id.as_deref()?;
        self.current_question(bank)?.option(id)
    }

    fn require_phase(&self, bank: &QuestionBank, wanted: QuizPhase) -> Result<(), Rejected> {
        let phase = self.phase(bank);
        if phase == wanted {
            return Ok(());
        }
        Err(match phase {
            QuizPhase::Idle => Rejected::NoActiveQuestion,
            QuizPhase::Finished => Rejected::Finished,
            QuizPhase::Submitted => Rejected::AlreadySubmitted,
            QuizPhase::Answering => Rejected::NotSubmitted,
        })
    }
}
