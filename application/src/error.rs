//! Command error taxonomy
//!
//! Every handler failure is converted into a [`CommandError`] at the handler
//! boundary and rendered by the dispatcher; none of them ends a session.

use crate::ports::prompt::PromptError;
use quizshell_domain::{FieldError, IdError, PlayError, QuizId, StoreError};
use thiserror::Error;

/// Errors that can occur while running a command handler
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Missing parameter <id>.")]
    MissingParameter,

    #[error("The value of parameter <id> is not a number.")]
    NotANumber,

    #[error("There is no quiz with id={0}.")]
    NotFound(QuizId),

    #[error("The quiz is invalid:")]
    FieldValidation(Vec<FieldError>),

    #[error("{0}")]
    Store(StoreError),

    #[error("Could not load the quizzes: {0}")]
    GameLoad(StoreError),

    #[error("{0}")]
    Prompt(#[from] PromptError),

    #[error("Game error: {0}")]
    Play(#[from] PlayError),
}

impl CommandError {
    /// Lines shown to the user: the headline, then one line per field error.
    pub fn report_lines(&self) -> Vec<String> {
        let mut lines = vec![self.to_string()];
        if let CommandError::FieldValidation(errors) = self {
            lines.extend(errors.iter().map(|e| e.message.clone()));
        }
        lines
    }

    /// True when the failure is on the system side rather than a mistake
    /// in the user's input.
    pub fn is_internal(&self) -> bool {
        matches!(self, CommandError::Store(_) | CommandError::GameLoad(_))
    }
}

impl From<IdError> for CommandError {
    fn from(error: IdError) -> Self {
        match error {
            IdError::MissingParameter => CommandError::MissingParameter,
            IdError::NotANumber => CommandError::NotANumber,
        }
    }
}

impl From<StoreError> for CommandError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Validation(errors) => CommandError::FieldValidation(errors),
            StoreError::Missing(id) => CommandError::NotFound(id),
            other => CommandError::Store(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_errors_map_to_variants() {
        assert!(matches!(
            CommandError::from(IdError::MissingParameter),
            CommandError::MissingParameter
        ));
        assert!(matches!(
            CommandError::from(IdError::NotANumber),
            CommandError::NotANumber
        ));
    }

    #[test]
    fn test_validation_store_error_becomes_field_validation() {
        let error = CommandError::from(StoreError::Validation(vec![
            FieldError::empty_question(),
            FieldError::empty_answer(),
        ]));
        assert_eq!(
            error.report_lines(),
            vec![
                "The quiz is invalid:".to_string(),
                "question must not be empty".to_string(),
                "answer must not be empty".to_string(),
            ]
        );
    }

    #[test]
    fn test_backend_error_is_single_line() {
        let error = CommandError::from(StoreError::Backend("disk I/O".into()));
        assert!(matches!(error, CommandError::Store(_)));
        assert_eq!(error.report_lines(), vec!["Store error: disk I/O".to_string()]);
    }

    #[test]
    fn test_missing_record_is_not_found() {
        let error = CommandError::from(StoreError::Missing(QuizId::new(9)));
        assert_eq!(error.to_string(), "There is no quiz with id=9.");
    }

    #[test]
    fn test_only_store_failures_are_internal() {
        assert!(CommandError::Store(StoreError::Backend("locked".into())).is_internal());
        assert!(CommandError::GameLoad(StoreError::Backend("locked".into())).is_internal());

        assert!(!CommandError::MissingParameter.is_internal());
        assert!(!CommandError::NotANumber.is_internal());
        assert!(!CommandError::NotFound(QuizId::new(99)).is_internal());
        assert!(!CommandError::FieldValidation(vec![FieldError::empty_answer()]).is_internal());
        assert!(!CommandError::Prompt(PromptError::Interrupted).is_internal());
        assert!(!CommandError::Play(PlayError::AnswerPending).is_internal());
    }

    #[test]
    fn test_game_load_message() {
        let error = CommandError::GameLoad(StoreError::Backend("offline".into()));
        assert_eq!(
            error.to_string(),
            "Could not load the quizzes: Store error: offline"
        );
    }
}
