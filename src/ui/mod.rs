mod fonts;
mod helpers;
pub mod layout;
pub mod views;

use crate::app::{Preferences, QuizApp};
use crate::data::QuestionBank;
use crate::model::QuizPhase;
use eframe::{APP_KEY, App, CreationContext, Frame, get_value, set_value};
use egui::Context;
use layout::{apply_theme, bottom_panel, top_panel};

impl QuizApp {
    /// Construye la app desde eframe: fuente CJK y tema guardado
    pub fn setup(cc: &CreationContext<'_>, bank: QuestionBank) -> Self {
        fonts::install_cjk_font(&cc.egui_ctx);

        let preferences: Preferences = cc
            .storage
            .and_then(|storage| get_value(storage, APP_KEY))
            .unwrap_or_default();
        apply_theme(&cc.egui_ctx, preferences.dark_mode);

        Self::with_preferences(bank, preferences)
    }
}

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let phase = self.phase();

        // Filtros y progreso solo mientras hay una pregunta en pantalla
        let answering = matches!(phase, QuizPhase::Answering | QuizPhase::Submitted);
        top_panel(self, ctx, answering);
        bottom_panel(self, ctx);

        // Dispatch por fase a las funciones de views
        match phase {
            QuizPhase::Idle => views::empty::ui_empty(self, ctx),
            QuizPhase::Answering | QuizPhase::Submitted => views::quiz::ui_quiz(self, ctx),
            QuizPhase::Finished => views::results::ui_results(self, ctx),
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, &self.preferences);
    }
}
