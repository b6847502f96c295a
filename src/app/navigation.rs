use super::*;
use crate::model::{Difficulty, Filter, GrammarPoint};

impl QuizApp {
    pub fn cambiar_dificultad(&mut self, difficulty: Filter<Difficulty>) {
        if difficulty == self.session.difficulty_filter() {
            return;
        }
        self.session = self.session.set_filter(Some(difficulty), None);
        self.log_filtro();
    }

    pub fn cambiar_categoria(&mut self, category: Filter<GrammarPoint>) {
        if category == self.session.category_filter() {
            return;
        }
        self.session = self.session.set_filter(None, Some(category));
        self.log_filtro();
    }

    /// Botón "清除所有筛选" de la pantalla sin resultados
    pub fn limpiar_filtros(&mut self) {
        self.session = self.session.clear_filters();
        self.log_filtro();
    }

    pub fn cambiar_tema(&mut self, dark_mode: bool) {
        self.preferences.dark_mode = dark_mode;
    }

    fn log_filtro(&self) {
        log::debug!(
            "Filtros {:?}: {} preguntas activas",
            self.session.filter(),
            self.session.active_len(&self.bank)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::read_questions_embedded;

    #[test]
    fn reselecting_the_same_filter_keeps_the_answer_in_progress() {
        let mut app = QuizApp::new(read_questions_embedded().expect("bank"));
        app.elegir_opcion("a");
        app.cambiar_dificultad(Filter::All);
        assert_eq!(app.session.selected_option_id(), Some("a"));

        app.cambiar_dificultad(Filter::Only(Difficulty::Middle));
        assert_eq!(app.session.selected_option_id(), None);
        assert_eq!(app.session.active_len(&app.bank), 2);
    }

    #[test]
    fn clearing_filters_leaves_the_idle_screen() {
        let mut app = QuizApp::new(read_questions_embedded().expect("bank"));
        app.cambiar_dificultad(Filter::Only(Difficulty::Junior));
        app.cambiar_categoria(Filter::Only(GrammarPoint::Conjunction));
        assert_eq!(app.phase(), QuizPhase::Idle);

        app.limpiar_filtros();
        assert_eq!(app.phase(), QuizPhase::Answering);
        assert!(app.session.filter().is_all());
    }
}
