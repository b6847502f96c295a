use super::*;

impl QuizSession {
    /// Vuelve a empezar: borra progreso y puntuación, conserva los filtros
    pub fn reset(&self) -> Self {
        Self {
            filter: self.filter,
            ..Self::default()
        }
    }
}
