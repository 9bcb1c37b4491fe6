//! Quiz repository trait

use crate::core::id::QuizId;
use crate::quiz::entities::{NewQuiz, Quiz};
use crate::quiz::validation::FieldError;
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during quiz store operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The record was rejected by the store's field rules
    #[error("Validation failed: {}", join_messages(.0))]
    Validation(Vec<FieldError>),

    /// An update targeted a record that no longer exists
    #[error("There is no quiz with id={0}.")]
    Missing(QuizId),

    /// Opaque failure from the persistence backend
    #[error("Store error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Check if this error carries field-level validation messages
    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Validation(_))
    }
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Repository trait for quizzes
///
/// This is a domain-level abstraction over the datastore. Implementations
/// live in the infrastructure layer and must tolerate concurrent calls from
/// independent sessions.
#[async_trait]
pub trait QuizRepository: Send + Sync {
    /// All stored quizzes, ordered by id
    async fn find_all(&self) -> Result<Vec<Quiz>, StoreError>;

    /// The quiz with the given id, if any
    async fn find_by_id(&self, id: QuizId) -> Result<Option<Quiz>, StoreError>;

    /// Store a new quiz and return it with its assigned id
    async fn create(&self, quiz: NewQuiz) -> Result<Quiz, StoreError>;

    /// Replace the question and answer of an existing quiz
    async fn update(&self, quiz: Quiz) -> Result<Quiz, StoreError>;

    /// Remove a quiz; removing an unknown id is not an error
    async fn destroy(&self, id: QuizId) -> Result<(), StoreError>;

    /// Number of stored quizzes
    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.find_all().await?.len())
    }
}
