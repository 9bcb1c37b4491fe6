//! Play session state machine

use crate::quiz::answer::answers_match;
use crate::quiz::entities::Quiz;
use rand::Rng;
use thiserror::Error;

/// Errors from driving a [`PlaySession`] out of order
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayError {
    #[error("A question is already waiting for an answer")]
    AnswerPending,

    #[error("No question is waiting for an answer")]
    NoPendingQuestion,
}

/// How a game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    /// Every quiz was answered correctly
    Won { score: u32, total: usize },
    /// The game stopped at the first wrong answer
    Missed {
        score: u32,
        total: usize,
        quiz: Quiz,
    },
}

impl PlayOutcome {
    pub fn score(&self) -> u32 {
        match self {
            PlayOutcome::Won { score, .. } | PlayOutcome::Missed { score, .. } => *score,
        }
    }

    pub fn total(&self) -> usize {
        match self {
            PlayOutcome::Won { total, .. } | PlayOutcome::Missed { total, .. } => *total,
        }
    }

    pub fn is_win(&self) -> bool {
        matches!(self, PlayOutcome::Won { .. })
    }
}

/// Current state of a game
#[derive(Debug, Clone, PartialEq, Eq)]
enum PlayState {
    Selecting,
    Asking(Quiz),
    Finished(PlayOutcome),
}

/// What the next round brings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Round {
    Ask(Quiz),
    Finished(PlayOutcome),
}

/// Result of answering the pending question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct { score: u32 },
    Incorrect { score: u32, expected: String },
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct { .. })
    }
}

/// One in-progress game (Entity)
///
/// Quizzes are drawn uniformly at random without replacement. A drawn quiz is
/// removed from `remaining` before it is asked, so it can never come back in
/// the same game.
#[derive(Debug, Clone)]
pub struct PlaySession {
    remaining: Vec<Quiz>,
    total: usize,
    score: u32,
    state: PlayState,
}

impl PlaySession {
    pub fn new(quizzes: Vec<Quiz>) -> Self {
        Self {
            total: quizzes.len(),
            remaining: quizzes,
            score: 0,
            state: PlayState::Selecting,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn remaining(&self) -> &[Quiz] {
        &self.remaining
    }

    /// Leave `Selecting`: draw the next quiz, or finish with a win when none
    /// are left. Calling this on a finished game returns the same outcome.
    pub fn next_round<R: Rng>(&mut self, rng: &mut R) -> Result<Round, PlayError> {
        match &self.state {
            PlayState::Asking(_) => return Err(PlayError::AnswerPending),
            PlayState::Finished(outcome) => return Ok(Round::Finished(outcome.clone())),
            PlayState::Selecting => {}
        }

        if self.remaining.is_empty() {
            let outcome = PlayOutcome::Won {
                score: self.score,
                total: self.total,
            };
            self.state = PlayState::Finished(outcome.clone());
            return Ok(Round::Finished(outcome));
        }

        let index = rng.random_range(0..self.remaining.len());
        let quiz = self.remaining.swap_remove(index);
        self.state = PlayState::Asking(quiz.clone());
        Ok(Round::Ask(quiz))
    }

    /// Answer the pending question.
    ///
    /// A correct answer scores and returns to `Selecting`; a wrong one
    /// finishes the game.
    pub fn submit(&mut self, answer: &str) -> Result<Verdict, PlayError> {
        let quiz = match std::mem::replace(&mut self.state, PlayState::Selecting) {
            PlayState::Asking(quiz) => quiz,
            other => {
                self.state = other;
                return Err(PlayError::NoPendingQuestion);
            }
        };

        if answers_match(answer, &quiz.answer) {
            self.score += 1;
            Ok(Verdict::Correct { score: self.score })
        } else {
            let expected = quiz.answer.clone();
            self.state = PlayState::Finished(PlayOutcome::Missed {
                score: self.score,
                total: self.total,
                quiz,
            });
            Ok(Verdict::Incorrect {
                score: self.score,
                expected,
            })
        }
    }
}
