//! Field-level validation errors

use serde::{Deserialize, Serialize};

/// The quiz field a validation message refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizField {
    Question,
    Answer,
}

impl QuizField {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuizField::Question => "question",
            QuizField::Answer => "answer",
        }
    }
}

impl std::fmt::Display for QuizField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One rejected field together with a human-readable message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: QuizField,
    pub message: String,
}

impl FieldError {
    pub fn new(field: QuizField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    pub fn empty_question() -> Self {
        Self::new(QuizField::Question, "question must not be empty")
    }

    pub fn empty_answer() -> Self {
        Self::new(QuizField::Answer, "answer must not be empty")
    }

    pub fn duplicate_question() -> Self {
        Self::new(QuizField::Question, "question must be unique")
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}
