//! Sample quizzes for a fresh store

use quizshell_domain::{NewQuiz, QuizRepository, StoreError};
use tracing::info;

/// Question/answer pairs inserted into an empty store
pub const SAMPLE_QUIZZES: [(&str, &str); 4] = [
    ("Capital of Italy", "Rome"),
    ("Capital of France", "Paris"),
    ("Capital of Spain", "Madrid"),
    ("Capital of Portugal", "Lisbon"),
];

/// Insert [`SAMPLE_QUIZZES`] when the store holds no quizzes.
///
/// Returns how many quizzes were inserted (0 if the store was not empty).
pub async fn seed_if_empty<S: QuizRepository + ?Sized>(store: &S) -> Result<usize, StoreError> {
    if store.count().await? > 0 {
        return Ok(0);
    }
    for (question, answer) in SAMPLE_QUIZZES {
        store.create(NewQuiz::new(question, answer)).await?;
    }
    info!("Seeded {} sample quizzes", SAMPLE_QUIZZES.len());
    Ok(SAMPLE_QUIZZES.len())
}
