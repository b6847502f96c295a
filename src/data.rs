// src/data.rs

use crate::error::DataError;
use crate::model::{BLANK_MARKER, Question};
use std::collections::HashSet;

/// Número de opciones que debe tener cada pregunta
pub const OPTIONS_PER_QUESTION: usize = 4;

const EMBEDDED_BANK: &str = include_str!("data/grammar_questions.yaml");

/// Banco de preguntas inmutable y ya validado.
///
/// Solo expone lecturas: nada fuera de este módulo puede modificar una
/// pregunta una vez cargada.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn from_yaml_str(text: &str) -> Result<Self, DataError> {
        let questions: Vec<Question> = serde_yaml::from_str(text)?;
        Self::from_questions(questions)
    }

    pub fn from_questions(questions: Vec<Question>) -> Result<Self, DataError> {
        if questions.is_empty() {
            return Err(DataError::EmptyBank);
        }

        let mut seen_ids = HashSet::new();
        for q in &questions {
            if !seen_ids.insert(q.id.as_str()) {
                return Err(DataError::DuplicateQuestion(q.id.clone()));
            }
            validate_question(q)?;
        }

        Ok(Self { questions })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, idx: usize) -> Option<&Question> {
        self.questions.get(idx)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

fn validate_question(q: &Question) -> Result<(), DataError> {
    if q.options.len() != OPTIONS_PER_QUESTION {
        return Err(DataError::OptionCount {
            question: q.id.clone(),
            found: q.options.len(),
            expected: OPTIONS_PER_QUESTION,
        });
    }

    let mut option_ids = HashSet::new();
    for o in &q.options {
        if !option_ids.insert(o.id.as_str()) {
            return Err(DataError::DuplicateOption {
                question: q.id.clone(),
                option: o.id.clone(),
            });
        }
    }

    let correct: Vec<_> = q.options.iter().filter(|o| o.is_correct).collect();
    if correct.len() != 1 {
        return Err(DataError::CorrectCount {
            question: q.id.clone(),
            found: correct.len(),
        });
    }

    let blanks = q.sentence.matches(BLANK_MARKER).count();
    if blanks != 1 {
        return Err(DataError::BlankCount {
            question: q.id.clone(),
            found: blanks,
        });
    }

    if correct[0].text != q.correct_answer {
        return Err(DataError::AnswerMismatch {
            question: q.id.clone(),
            answer: q.correct_answer.clone(),
        });
    }

    Ok(())
}

/// Carga el banco de preguntas desde el YAML embebido
pub fn read_questions_embedded() -> Result<QuestionBank, DataError> {
    let bank = QuestionBank::from_yaml_str(EMBEDDED_BANK)?;
    log::info!("Banco de preguntas cargado: {} preguntas", bank.len());
    Ok(bank)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_QUESTION: &str = r#"
- id: "q"
  sentence: "Do you know ______ he will come back?"
  options:
    - { id: "a", text: "when", is_correct: true }
    - { id: "b", text: "that" }
    - { id: "c", text: "which" }
    - { id: "d", text: "who" }
  correct_answer: "when"
  explanation:
    rule: "r"
    example: "e"
    common_mistake: "m"
    translation: "t"
  difficulty: MIDDLE
  category: NOUN_CLAUSE
"#;

    #[test]
    fn embedded_bank_is_valid_and_ordered() {
        let bank = read_questions_embedded().expect("embedded bank");
        let ids: Vec<&str> = bank.questions().iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5"]);
        for q in bank.questions() {
            assert_eq!(q.options.iter().filter(|o| o.is_correct).count(), 1, "question {}", q.id);
        }
    }

    #[test]
    fn minimal_bank_parses_with_default_is_correct() {
        let bank = QuestionBank::from_yaml_str(ONE_QUESTION).expect("valid bank");
        assert_eq!(bank.len(), 1);
        let q = bank.get(0).expect("first");
        assert!(!q.options[1].is_correct);
    }

    #[test]
    fn empty_bank_is_rejected() {
        let err = QuestionBank::from_yaml_str("[]").unwrap_err();
        assert!(matches!(err, DataError::EmptyBank));
    }

    #[test]
    fn two_correct_options_are_rejected() {
        let yaml = ONE_QUESTION.replace(r#"text: "that" }"#, r#"text: "that", is_correct: true }"#);
        let err = QuestionBank::from_yaml_str(&yaml).unwrap_err();
        assert!(matches!(err, DataError::CorrectCount { found: 2, .. }));
    }

    #[test]
    fn no_correct_option_is_rejected() {
        let yaml = ONE_QUESTION.replace(r#"is_correct: true"#, r#"is_correct: false"#);
        let err = QuestionBank::from_yaml_str(&yaml).unwrap_err();
        assert!(matches!(err, DataError::CorrectCount { found: 0, .. }));
    }

    #[test]
    fn repeated_option_id_is_rejected() {
        let yaml = ONE_QUESTION.replace(r#"id: "d""#, r#"id: "c""#);
        let err = QuestionBank::from_yaml_str(&yaml).unwrap_err();
        assert!(matches!(err, DataError::DuplicateOption { ref option, .. } if option == "c"));
    }

    #[test]
    fn three_options_are_rejected() {
        let yaml = ONE_QUESTION.replace("    - { id: \"d\", text: \"who\" }\n", "");
        let err = QuestionBank::from_yaml_str(&yaml).unwrap_err();
        assert!(matches!(err, DataError::OptionCount { found: 3, expected: 4, .. }));
    }

    #[test]
    fn sentence_without_blank_is_rejected() {
        let yaml = ONE_QUESTION.replace("know ______ he", "know he");
        let err = QuestionBank::from_yaml_str(&yaml).unwrap_err();
        assert!(matches!(err, DataError::BlankCount { found: 0, .. }));
    }

    #[test]
    fn mismatched_correct_answer_is_rejected() {
        let yaml = ONE_QUESTION.replace(r#"correct_answer: "when""#, r#"correct_answer: "where""#);
        let err = QuestionBank::from_yaml_str(&yaml).unwrap_err();
        assert!(matches!(err, DataError::AnswerMismatch { .. }));
    }

    #[test]
    fn duplicate_question_ids_are_rejected() {
        let yaml = format!("{ONE_QUESTION}{ONE_QUESTION}");
        let err = QuestionBank::from_yaml_str(&yaml).unwrap_err();
        assert!(matches!(err, DataError::DuplicateQuestion(ref id) if id == "q"));
    }

    #[test]
    fn broken_yaml_reports_a_parse_error() {
        let err = QuestionBank::from_yaml_str("- id: [").unwrap_err();
        assert!(matches!(err, DataError::Yaml(_)));
    }
}
