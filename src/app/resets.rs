use super::*;

impl QuizApp {
    /// Botón "重新开始": puntuación a cero, filtros intactos
    pub fn reiniciar_quiz(&mut self) {
        self.session = self.session.reset();
        log::info!(
            "Quiz reiniciado con {} preguntas activas",
            self.session.active_len(&self.bank)
        );
    }
}
