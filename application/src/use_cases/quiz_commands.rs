//! Quiz CRUD and single-question test use case
//!
//! Each handler runs as a chain of dependent steps (validate the id, hit the
//! store, prompt, display) and returns the first failure as a
//! [`CommandError`]. Rendering that error and re-prompting is the
//! dispatcher's job.

use crate::error::CommandError;
use crate::ports::display::{DisplayPort, Tone};
use crate::ports::prompt::PromptPort;
use quizshell_domain::{NewQuiz, Quiz, QuizId, QuizRepository, answers_match, validate_id};
use std::sync::Arc;
use tracing::debug;

/// Prompt text used when asking a quiz question
pub(crate) fn question_prompt(quiz: &Quiz) -> String {
    format!("{}? ", quiz.question.trim().trim_end_matches('?'))
}

/// Use case for the list/show/add/edit/delete/test commands
pub struct QuizCommandsUseCase<S: QuizRepository + ?Sized> {
    store: Arc<S>,
}

impl<S: QuizRepository + ?Sized> QuizCommandsUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// `list`: one line per quiz
    pub async fn list(&self, display: &dyn DisplayPort) -> Result<(), CommandError> {
        let quizzes = self.store.find_all().await?;
        debug!("Listing {} quizzes", quizzes.len());
        for quiz in &quizzes {
            display.log(&format!(
                "  [{}]: {}",
                display.colorize(&quiz.id.to_string(), Tone::Magenta),
                quiz.question
            ));
        }
        Ok(())
    }

    /// `show <id>`: question and answer of one quiz
    pub async fn show(
        &self,
        raw_id: Option<&str>,
        display: &dyn DisplayPort,
    ) -> Result<(), CommandError> {
        let quiz = self.fetch(raw_id).await?;
        display.log(&format!(
            "[{}]: {} {} {}",
            display.colorize(&quiz.id.to_string(), Tone::Magenta),
            quiz.question,
            display.colorize("=>", Tone::Magenta),
            quiz.answer
        ));
        Ok(())
    }

    /// `add`: prompt for a question and an answer, then store them
    pub async fn add(
        &self,
        prompt: &dyn PromptPort,
        display: &dyn DisplayPort,
    ) -> Result<Quiz, CommandError> {
        let question = prompt
            .ask(&display.colorize("Enter a question: ", Tone::Red), None)
            .await?;
        let answer = prompt
            .ask(&display.colorize("Enter the answer: ", Tone::Red), None)
            .await?;

        let quiz = self.store.create(NewQuiz::new(question, answer)).await?;
        display.log(&format!(
            " {}: {} {} {}",
            display.colorize("Added", Tone::Magenta),
            quiz.question,
            display.colorize("=>", Tone::Magenta),
            quiz.answer
        ));
        Ok(quiz)
    }

    /// `edit <id>`: prompt with the current text pre-filled, then save
    pub async fn edit(
        &self,
        raw_id: Option<&str>,
        prompt: &dyn PromptPort,
        display: &dyn DisplayPort,
    ) -> Result<Quiz, CommandError> {
        let current = self.fetch(raw_id).await?;

        let question = prompt
            .ask(
                &display.colorize("Enter the question: ", Tone::Red),
                Some(&current.question),
            )
            .await?;
        let answer = prompt
            .ask(
                &display.colorize("Enter the answer: ", Tone::Red),
                Some(&current.answer),
            )
            .await?;

        let quiz = self.store.update(current.with_text(question, answer)).await?;
        display.log(&format!(
            "Quiz {} changed to: {} {} {}",
            display.colorize(&quiz.id.to_string(), Tone::Magenta),
            quiz.question,
            display.colorize("=>", Tone::Magenta),
            quiz.answer
        ));
        Ok(quiz)
    }

    /// `delete <id>`: remove the quiz; an unknown id is a no-op
    pub async fn delete(&self, raw_id: Option<&str>) -> Result<QuizId, CommandError> {
        let id = validate_id(raw_id)?;
        self.store.destroy(id).await?;
        debug!("Deleted quiz {}", id);
        Ok(id)
    }

    /// `test <id>`: ask one quiz and report whether the answer was right
    pub async fn test(
        &self,
        raw_id: Option<&str>,
        prompt: &dyn PromptPort,
        display: &dyn DisplayPort,
    ) -> Result<bool, CommandError> {
        let quiz = self.fetch(raw_id).await?;
        let answer = prompt
            .ask(&display.colorize(&question_prompt(&quiz), Tone::Red), None)
            .await?;

        let correct = answers_match(&answer, &quiz.answer);
        if correct {
            display.log("Your answer is correct.");
            display.big_log("Correct", Tone::Green);
        } else {
            display.log("Your answer is incorrect.");
            display.big_log("Incorrect", Tone::Red);
        }
        Ok(correct)
    }

    async fn fetch(&self, raw_id: Option<&str>) -> Result<Quiz, CommandError> {
        let id = validate_id(raw_id)?;
        self.store
            .find_by_id(id)
            .await?
            .ok_or(CommandError::NotFound(id))
    }
}
