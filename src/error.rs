//! Tipos de error del quiz.

use thiserror::Error;

/// Errores al cargar o validar el banco de preguntas.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DataError {
    #[error("no se pudo parsear el banco de preguntas YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("el banco de preguntas está vacío")]
    EmptyBank,
    #[error("id de pregunta repetido: `{0}`")]
    DuplicateQuestion(String),
    #[error("la pregunta `{question}` tiene {found} opciones (se esperaban {expected})")]
    OptionCount {
        question: String,
        found: usize,
        expected: usize,
    },
    #[error("la pregunta `{question}` repite el id de opción `{option}`")]
    DuplicateOption { question: String, option: String },
    #[error("la pregunta `{question}` tiene {found} opciones correctas (debe ser exactamente una)")]
    CorrectCount { question: String, found: usize },
    #[error("la pregunta `{question}` debe contener exactamente un hueco `______` (hay {found})")]
    BlankCount { question: String, found: usize },
    #[error("la respuesta `{answer}` de la pregunta `{question}` no coincide con la opción correcta")]
    AnswerMismatch { question: String, answer: String },
}

/// Motivo por el que una transición de la sesión no se aplicó.
///
/// La interfaz lo trata como un no-op: se registra y se ignora.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Rejected {
    #[error("no hay preguntas activas con los filtros actuales")]
    NoActiveQuestion,
    #[error("el quiz ya ha terminado")]
    Finished,
    #[error("la pregunta actual ya fue enviada")]
    AlreadySubmitted,
    #[error("no hay ninguna opción seleccionada")]
    NothingSelected,
    #[error("la pregunta actual aún no se ha enviado")]
    NotSubmitted,
    #[error("la opción `{0}` no pertenece a la pregunta actual")]
    UnknownOption(String),
}
