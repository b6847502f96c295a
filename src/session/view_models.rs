use super::*;
use crate::model::BLANK_MARKER;
use crate::view_models::{
    BlankState, ExplanationCard, OptionState, OptionView, ProgressView, ResultsView, SentenceView,
};

/// Máximo de temas recomendados en la pantalla de resultados
pub const MAX_REVIEW_TOPICS: usize = 3;

impl QuizSession {
    pub fn progress_view(&self, bank: &QuestionBank) -> Option<ProgressView> {
        let total = self.active_len(bank);
        if total == 0 {
            return None;
        }
        Some(ProgressView {
            position: self.current_index + 1,
            total,
        })
    }

    pub fn sentence_view(&self, bank: &QuestionBank) -> Option<SentenceView> {
        let question = self.current_question(bank)?;
        let (before, after) = question.sentence_parts();
        let selected = self.selected_option(bank);

        let state = match (selected, self.is_submitted) {
            (None, _) => BlankState::Empty,
            (Some(_), false) => BlankState::Pending,
            (Some(o), true) if o.is_correct => BlankState::Correct,
            (Some(_), true) => BlankState::Wrong,
        };

        Some(SentenceView {
            before: before.to_string(),
            blank: selected.map_or(BLANK_MARKER, |o| o.text.as_str()).to_string(),
            after: after.to_string(),
            state,
        })
    }

    pub fn option_views(&self, bank: &QuestionBank) -> Vec<OptionView> {
        let Some(question) = self.current_question(bank) else {
            return Vec::new();
        };
        let selected = self.selected_option_id.as_deref();

        question
            .options
            .iter()
            .map(|o| {
                let is_selected = selected == Some(o.id.as_str());
                let state = if !self.is_submitted {
                    if is_selected {
                        OptionState::Selected
                    } else {
                        OptionState::Idle
                    }
                } else if o.is_correct {
                    OptionState::Correct
                } else if is_selected {
                    OptionState::Wrong
                } else {
                    OptionState::Dimmed
                };
                OptionView {
                    id: o.id.clone(),
                    text: o.text.clone(),
                    state,
                    enabled: !self.is_submitted,
                }
            })
            .collect()
    }

    /// Solo existe tras enviar la respuesta
    pub fn explanation_card(&self, bank: &QuestionBank) -> Option<ExplanationCard> {
        let answered_correctly = self.last_answer_correct(bank)?;
        let explanation = &self.current_question(bank)?.explanation;
        Some(ExplanationCard {
            answered_correctly,
            rule: explanation.rule.clone(),
            example: explanation.example.clone(),
            common_mistake: explanation.common_mistake.clone(),
            translation: explanation.translation.clone(),
        })
    }

    pub fn results_view(&self, bank: &QuestionBank) -> ResultsView {
        let total = self.active_len(bank);
        let percentage = percentage(self.score, total);

        let mut review_topics = Vec::new();
        for q in self.active_questions(bank) {
            if review_topics.len() == MAX_REVIEW_TOPICS {
                break;
            }
            if !review_topics.contains(&q.category) {
                review_topics.push(q.category);
            }
        }

        ResultsView {
            score: self.score,
            total,
            percentage,
            tier: ResultTier::from_percentage(percentage),
            review_topics,
        }
    }

    pub fn advance_label(&self, bank: &QuestionBank) -> &'static str {
        if self.is_last_question(bank) {
            "查看结果"
        } else {
            "下一题"
        }
    }
}
