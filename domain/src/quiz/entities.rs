//! Quiz entities

use crate::core::id::QuizId;
use crate::quiz::validation::FieldError;
use serde::{Deserialize, Serialize};

/// A stored question/answer pair (Entity)
///
/// The id is assigned by the store on creation and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: QuizId,
    pub question: String,
    pub answer: String,
}

impl Quiz {
    pub fn new(id: QuizId, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id,
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Return a copy with new question and answer text, keeping the id
    pub fn with_text(&self, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self::new(self.id, question, answer)
    }

    /// The question/answer pair without its id, for validation
    pub fn to_new(&self) -> NewQuiz {
        NewQuiz::new(self.question.clone(), self.answer.clone())
    }
}

/// A question/answer pair that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuiz {
    pub question: String,
    pub answer: String,
}

impl NewQuiz {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Check the field rules every store enforces before persisting.
    ///
    /// Returns every failing field, not just the first.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.question.trim().is_empty() {
            errors.push(FieldError::empty_question());
        }
        if self.answer.trim().is_empty() {
            errors.push(FieldError::empty_answer());
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Attach a store-assigned id
    pub fn with_id(self, id: QuizId) -> Quiz {
        Quiz::new(id, self.question, self.answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::validation::QuizField;

    #[test]
    fn test_valid_new_quiz() {
        assert!(NewQuiz::new("2+2?", "4").validate().is_ok());
    }

    #[test]
    fn test_blank_fields_are_all_reported() {
        let errors = NewQuiz::new("  ", "").validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, QuizField::Question);
        assert_eq!(errors[1].field, QuizField::Answer);
    }

    #[test]
    fn test_with_text_keeps_id() {
        let quiz = Quiz::new(QuizId::new(3), "old?", "old");
        let edited = quiz.with_text("new?", "new");
        assert_eq!(edited.id, QuizId::new(3));
        assert_eq!(edited.question, "new?");
        assert_eq!(edited.answer, "new");
    }

    #[test]
    fn test_with_id() {
        let quiz = NewQuiz::new("Q", "A").with_id(QuizId::new(8));
        assert_eq!(quiz, Quiz::new(QuizId::new(8), "Q", "A"));
        assert_eq!(quiz.to_new(), NewQuiz::new("Q", "A"));
    }
}
