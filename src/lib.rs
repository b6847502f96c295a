pub mod app;
pub mod data;
pub mod error;
pub mod model;
pub mod session;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
pub use data::{QuestionBank, read_questions_embedded};
pub use session::QuizSession;
