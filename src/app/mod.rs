use crate::data::QuestionBank;
use crate::error::Rejected;
use crate::model::QuizPhase;
use crate::session::QuizSession;
use serde::{Deserialize, Serialize};

// Submódulos
pub mod actions;
pub mod navigation;
pub mod resets;

/// Lo único que se guarda entre ejecuciones. La puntuación y los filtros
/// no se persisten nunca.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Preferences {
    #[serde(default = "default_dark_mode")]
    pub dark_mode: bool,
}

fn default_dark_mode() -> bool {
    true
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            dark_mode: default_dark_mode(),
        }
    }
}

pub struct QuizApp {
    pub bank: QuestionBank,
    pub session: QuizSession,
    pub preferences: Preferences,
}

impl QuizApp {
    pub fn new(bank: QuestionBank) -> Self {
        Self::with_preferences(bank, Preferences::default())
    }

    pub fn with_preferences(bank: QuestionBank, preferences: Preferences) -> Self {
        Self {
            bank,
            session: QuizSession::new(),
            preferences,
        }
    }

    pub fn phase(&self) -> QuizPhase {
        self.session.phase(&self.bank)
    }

    /// Sustituye la sesión si la transición se aplicó; si no, no-op.
    fn aplicar(&mut self, accion: &str, resultado: Result<QuizSession, Rejected>) -> bool {
        match resultado {
            Ok(siguiente) => {
                self.session = siguiente;
                true
            }
            Err(motivo) => {
                log::debug!("{accion} ignorada: {motivo}");
                false
            }
        }
    }
}
