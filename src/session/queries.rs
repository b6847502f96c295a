use super::*;
use crate::model::Question;

impl QuizSession {
    /// Preguntas que pasan ambos filtros, en el orden del banco
    pub fn active_questions<'a>(&self, bank: &'a QuestionBank) -> Vec<&'a Question> {
        bank.questions()
            .iter()
            .filter(|q| self.filter.matches(q))
            .collect()
    }

    pub fn active_len(&self, bank: &QuestionBank) -> usize {
        bank.questions()
            .iter()
            .filter(|q| self.filter.matches(q))
            .count()
    }

    pub fn current_question<'a>(&self, bank: &'a QuestionBank) -> Option<&'a Question> {
        bank.questions()
            .iter()
            .filter(|q| self.filter.matches(q))
            .nth(self.current_index)
    }

    pub fn is_last_question(&self, bank: &QuestionBank) -> bool {
        self.current_index + 1 >= self.active_len(bank)
    }

    /// `Some(acierto)` una vez enviada la respuesta, `None` antes
    pub fn last_answer_correct(&self, bank: &QuestionBank) -> Option<bool> {
        if !self.is_submitted {
            return None;
        }
        Some(self.selected_option(bank).is_some_and(|o| o.is_correct))
    }

    /// Porcentaje de aciertos sobre el conjunto activo
    pub fn percentage(&self, bank: &QuestionBank) -> u32 {
        percentage(self.score, self.active_len(bank))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::read_questions_embedded;

    #[test]
    fn fresh_session_sees_the_whole_bank() {
        let bank = read_questions_embedded().expect("bank");
        let session = QuizSession::new();
        assert_eq!(session.active_len(&bank), 5);
        assert_eq!(session.phase(&bank), QuizPhase::Answering);
        assert_eq!(session.current_question(&bank).map(|q| q.id.as_str()), Some("1"));
        assert!(!session.is_last_question(&bank));
        assert_eq!(session.last_answer_correct(&bank), None);
    }

    #[test]
    fn active_questions_keep_bank_order() {
        let bank = read_questions_embedded().expect("bank");
        let session = QuizSession::new().set_filter(Some(Filter::Only(Difficulty::Junior)), None);
        let ids: Vec<&str> = session
            .active_questions(&bank)
            .iter()
            .map(|q| q.id.as_str())
            .collect();
        assert_eq!(ids, ["2", "3"]);
    }
}
