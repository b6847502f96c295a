use super::*;

impl QuizSession {
    /// Marca una opción de la pregunta actual. Solo mientras se responde;
    /// elegir otra opción sustituye a la anterior.
    pub fn select_option(&self, bank: &QuestionBank, option_id: &str) -> Result<Self, Rejected> {
        self.require_phase(bank, QuizPhase::Answering)?;

        let question = self
            .current_question(bank)
            .ok_or(Rejected::NoActiveQuestion)?;
        if question.option(option_id).is_none() {
            return Err(Rejected::UnknownOption(option_id.to_string()));
        }

        Ok(Self {
            selected_option_id: Some(option_id.to_string()),
            ..self.clone()
        })
    }

    /// Bloquea la opción elegida y suma un punto si es la correcta
    pub fn submit(&self, bank: &QuestionBank) -> Result<Self, Rejected> {
        self.require_phase(bank, QuizPhase::Answering)?;

        let option = match self.selected_option_id.as_deref() {
            Some(id) => self
                .current_question(bank)
                .and_then(|q| q.option(id))
                .ok_or_else(|| Rejected::UnknownOption(id.to_string()))?,
            None => return Err(Rejected::NothingSelected),
        };

        Ok(Self {
            is_submitted: true,
            score: self.score + usize::from(option.is_correct),
            ..self.clone()
        })
    }

    /// Pasa a la siguiente pregunta, o a los resultados desde la última
    pub fn advance(&self, bank: &QuestionBank) -> Result<Self, Rejected> {
        self.require_phase(bank, QuizPhase::Submitted)?;

        if self.is_last_question(bank) {
            return Ok(Self {
                show_results: true,
                ..self.clone()
            });
        }

        Ok(Self {
            current_index: self.current_index + 1,
            selected_option_id: None,
            is_submitted: false,
            ..self.clone()
        })
    }
}
