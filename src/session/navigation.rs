use super::*;

impl QuizSession {
    /// Cambia los filtros. `None` deja esa dimensión como estaba.
    ///
    /// Vuelve a la primera pregunta activa y limpia la respuesta en curso;
    /// la puntuación y `show_results` se conservan.
    pub fn set_filter(
        &self,
        difficulty: Option<Filter<Difficulty>>,
        category: Option<Filter<GrammarPoint>>,
    ) -> Self {
        let filter = QuestionFilter {
            difficulty: difficulty.unwrap_or(self.filter.difficulty),
            category: category.unwrap_or(self.filter.category),
        };
        Self {
            filter,
            current_index: 0,
            selected_option_id: None,
            is_submitted: false,
            ..self.clone()
        }
    }

    pub fn clear_filters(&self) -> Self {
        self.set_filter(Some(Filter::All), Some(Filter::All))
    }
}
