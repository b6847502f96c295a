use super::*;

impl QuizApp {
    pub fn elegir_opcion(&mut self, option_id: &str) -> bool {
        let resultado = self.session.select_option(&self.bank, option_id);
        self.aplicar("Selección", resultado)
    }

    pub fn enviar_respuesta(&mut self) -> bool {
        let resultado = self.session.submit(&self.bank);
        let aplicada = self.aplicar("Envío", resultado);
        if aplicada {
            log::debug!(
                "Respuesta enviada: correcta={:?}, puntuación={}",
                self.session.last_answer_correct(&self.bank),
                self.session.score()
            );
        }
        aplicada
    }

    pub fn siguiente_pregunta(&mut self) -> bool {
        let resultado = self.session.advance(&self.bank);
        let aplicada = self.aplicar("Avance", resultado);
        if aplicada && self.session.show_results() {
            log::info!(
                "Quiz terminado: {}/{} ({}%)",
                self.session.score(),
                self.session.active_len(&self.bank),
                self.session.percentage(&self.bank)
            );
        }
        aplicada
    }
}
