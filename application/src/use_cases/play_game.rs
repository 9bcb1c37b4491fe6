//! Play Game use case
//!
//! Runs one "play all randomly" game against the store:
//!
//! 1. **Loading**: fetch every quiz once; a failure aborts the game
//! 2. **Selecting / Asking**: drive the domain [`PlaySession`] until it
//!    finishes, one prompt at a time
//! 3. **Finished**: report the score, distinguishing a win from a miss

use crate::config::PlayConfig;
use crate::error::CommandError;
use crate::ports::display::{DisplayPort, Tone};
use crate::ports::prompt::PromptPort;
use crate::use_cases::quiz_commands::question_prompt;
use quizshell_domain::{PlayOutcome, PlaySession, QuizRepository, Round, Verdict};
use std::sync::Arc;
use tracing::{debug, info};

/// Use case for the `play` command
pub struct PlayGameUseCase<S: QuizRepository + ?Sized> {
    store: Arc<S>,
    config: PlayConfig,
}

impl<S: QuizRepository + ?Sized> PlayGameUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            config: PlayConfig::default(),
        }
    }

    pub fn with_config(mut self, config: PlayConfig) -> Self {
        self.config = config;
        self
    }

    /// Play one game to completion
    pub async fn execute(
        &self,
        prompt: &dyn PromptPort,
        display: &dyn DisplayPort,
    ) -> Result<PlayOutcome, CommandError> {
        let quizzes = self
            .store
            .find_all()
            .await
            .map_err(CommandError::GameLoad)?;
        info!("Starting game with {} quizzes", quizzes.len());

        let mut session = PlaySession::new(quizzes);
        let mut rng = self.config.rng();

        loop {
            let quiz = match session.next_round(&mut rng)? {
                Round::Ask(quiz) => quiz,
                Round::Finished(outcome) => {
                    Self::report(&outcome, display);
                    return Ok(outcome);
                }
            };
            debug!(
                "Asking quiz {} ({} left)",
                quiz.id,
                session.remaining().len()
            );

            let answer = match prompt
                .ask(&display.colorize(&question_prompt(&quiz), Tone::Red), None)
                .await
            {
                Ok(answer) => answer,
                Err(e) => {
                    display.log(&format!("Game abandoned. Score: {}", session.score()));
                    return Err(e.into());
                }
            };

            match session.submit(&answer)? {
                Verdict::Correct { score } => {
                    display.log(&format!(
                        "{} Correct answers so far: {}",
                        display.colorize("Correct.", Tone::Green),
                        score
                    ));
                }
                Verdict::Incorrect { .. } => {
                    display.log(&display.colorize("Incorrect.", Tone::Red));
                }
            }
        }
    }

    fn report(outcome: &PlayOutcome, display: &dyn DisplayPort) {
        match outcome {
            PlayOutcome::Won { score, total } => {
                info!("Game won: {}/{}", score, total);
                if *total == 0 {
                    display.log("There are no quizzes to play.");
                } else {
                    display.log("No more questions. You answered them all!");
                }
                display.big_log(&format!("Score: {score}"), Tone::Magenta);
            }
            PlayOutcome::Missed { score, total, .. } => {
                info!("Game lost: {}/{}", score, total);
                display.log("End of the game.");
                display.big_log(&format!("Score: {score}"), Tone::Magenta);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::prompt::PromptError;
    use crate::use_cases::test_support::{FakeStore, RecordingDisplay, ScriptedPrompt};
    use std::collections::HashMap;

    /// Answers keyed by the prompt each quiz produces
    fn answer_key(store: &FakeStore) -> HashMap<String, String> {
        store
            .snapshot()
            .into_iter()
            .map(|q| (question_prompt(&q), q.answer))
            .collect()
    }

    fn seeded(store: &Arc<FakeStore>, seed: u64) -> PlayGameUseCase<FakeStore> {
        PlayGameUseCase::new(Arc::clone(store)).with_config(PlayConfig::with_seed(seed))
    }

    /// Ask order a seeded game produces, found by failing the first question
    async fn first_question(store: &Arc<FakeStore>, seed: u64) -> String {
        let prompt = ScriptedPrompt::new().with_answers(&["<wrong>"]);
        seeded(store, seed)
            .execute(&prompt, &RecordingDisplay::new())
            .await
            .unwrap();
        prompt.asked()[0].0.clone()
    }

    #[tokio::test]
    async fn test_two_correct_answers_win_with_score_two() {
        let store = Arc::new(FakeStore::with_quizzes(&[("2+2?", "4"), ("Capital of Italy?", "Rome")]));
        let key = answer_key(&store);

        // Replay the same seed: first game learns the order, second answers it
        let first = first_question(&store, 5).await;
        let second = key
            .keys()
            .find(|k| **k != first)
            .cloned()
            .unwrap();
        let prompt = ScriptedPrompt::new()
            .with_answers(&[key[&first].as_str(), key[&second].to_uppercase().as_str()]);
        let display = RecordingDisplay::new();

        let outcome = seeded(&store, 5).execute(&prompt, &display).await.unwrap();

        assert_eq!(outcome, PlayOutcome::Won { score: 2, total: 2 });
        assert_eq!(display.banners(), vec!["Score: 2".to_string()]);
        let asked: Vec<String> = prompt.asked().into_iter().map(|(q, _)| q).collect();
        assert_eq!(asked, vec![first, second]);
    }

    #[tokio::test]
    async fn test_wrong_answer_ends_game_with_prior_score() {
        let store = Arc::new(FakeStore::with_quizzes(&[("a?", "1"), ("b?", "2"), ("c?", "3")]));
        let key = answer_key(&store);
        let first = first_question(&store, 21).await;

        let prompt =
            ScriptedPrompt::new().with_answers(&[key[&first].as_str(), "nope", "never asked"]);
        let display = RecordingDisplay::new();

        let outcome = seeded(&store, 21).execute(&prompt, &display).await.unwrap();

        match outcome {
            PlayOutcome::Missed { score, total, quiz } => {
                assert_eq!(score, 1);
                assert_eq!(total, 3);
                assert_ne!(question_prompt(&quiz), first);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(prompt.asked().len(), 2);
        assert!(display.lines().contains(&"End of the game.".to_string()));
        assert_eq!(display.banners(), vec!["Score: 1".to_string()]);
    }

    #[tokio::test]
    async fn test_no_question_is_asked_twice() {
        let pairs: Vec<(String, String)> = (1..=6).map(|i| (format!("q{i}"), format!("a{i}"))).collect();
        let refs: Vec<(&str, &str)> = pairs.iter().map(|(q, a)| (q.as_str(), a.as_str())).collect();
        let store = Arc::new(FakeStore::with_quizzes(&refs));
        let key = answer_key(&store);

        // Learn the seeded order one question at a time
        let mut answers: Vec<String> = Vec::new();
        loop {
            let mut script: Vec<&str> = answers.iter().map(String::as_str).collect();
            script.push("<probe>");
            let prompt = ScriptedPrompt::new().with_answers(&script);
            let outcome = seeded(&store, 99)
                .execute(&prompt, &RecordingDisplay::new())
                .await
                .unwrap();
            if outcome.is_win() {
                assert_eq!(outcome.score(), 6);
                break;
            }
            let asked = prompt.asked();
            let probed = &asked.last().unwrap().0;
            answers.push(key[probed].clone());
        }

        let mut unique = answers.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 6);
    }

    #[tokio::test]
    async fn test_empty_store_is_an_immediate_win() {
        let store = Arc::new(FakeStore::default());
        let prompt = ScriptedPrompt::new();
        let display = RecordingDisplay::new();

        let outcome = seeded(&store, 1).execute(&prompt, &display).await.unwrap();

        assert_eq!(outcome, PlayOutcome::Won { score: 0, total: 0 });
        assert!(prompt.asked().is_empty());
        assert_eq!(display.lines(), vec!["There are no quizzes to play.".to_string()]);
    }

    #[tokio::test]
    async fn test_store_failure_is_game_load_error() {
        let store = Arc::new(FakeStore::broken());
        let prompt = ScriptedPrompt::new();

        let err = seeded(&store, 1)
            .execute(&prompt, &RecordingDisplay::new())
            .await
            .unwrap_err();

        assert!(matches!(err, CommandError::GameLoad(_)));
        assert!(prompt.asked().is_empty());
    }

    #[tokio::test]
    async fn test_interrupted_prompt_abandons_game() {
        let store = Arc::new(FakeStore::with_quizzes(&[("2+2?", "4")]));
        let prompt = ScriptedPrompt::new().with_answer_error(PromptError::Interrupted);
        let display = RecordingDisplay::new();

        let err = seeded(&store, 1).execute(&prompt, &display).await.unwrap_err();

        assert!(matches!(err, CommandError::Prompt(PromptError::Interrupted)));
        assert_eq!(display.lines(), vec!["Game abandoned. Score: 0".to_string()]);
    }
}
