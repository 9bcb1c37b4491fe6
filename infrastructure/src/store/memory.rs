//! In-memory quiz store

use async_trait::async_trait;
use quizshell_domain::{FieldError, NewQuiz, Quiz, QuizId, QuizRepository, StoreError};
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Default)]
struct Inner {
    quizzes: BTreeMap<QuizId, Quiz>,
    last_id: i64,
}

impl Inner {
    fn question_taken(&self, question: &str, except: Option<QuizId>) -> bool {
        self.quizzes
            .values()
            .any(|q| q.question == question && Some(q.id) != except)
    }
}

/// Quiz store kept in process memory
///
/// Ids are assigned from a counter and never reused, even after a delete.
#[derive(Default)]
pub struct InMemoryQuizStore {
    inner: RwLock<Inner>,
}

impl InMemoryQuizStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn check(quiz: &NewQuiz, inner: &Inner, except: Option<QuizId>) -> Result<(), StoreError> {
    let mut errors = match quiz.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => errors,
    };
    if inner.question_taken(&quiz.question, except) {
        errors.push(FieldError::duplicate_question());
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(StoreError::Validation(errors))
    }
}

#[async_trait]
impl QuizRepository for InMemoryQuizStore {
    async fn find_all(&self) -> Result<Vec<Quiz>, StoreError> {
        Ok(self.inner.read().await.quizzes.values().cloned().collect())
    }

    async fn find_by_id(&self, id: QuizId) -> Result<Option<Quiz>, StoreError> {
        Ok(self.inner.read().await.quizzes.get(&id).cloned())
    }

    async fn create(&self, quiz: NewQuiz) -> Result<Quiz, StoreError> {
        let mut inner = self.inner.write().await;
        check(&quiz, &inner, None)?;

        inner.last_id += 1;
        let quiz = quiz.with_id(QuizId::new(inner.last_id));
        debug!("Created quiz {}", quiz.id);
        inner.quizzes.insert(quiz.id, quiz.clone());
        Ok(quiz)
    }

    async fn update(&self, quiz: Quiz) -> Result<Quiz, StoreError> {
        let mut inner = self.inner.write().await;
        check(&quiz.to_new(), &inner, Some(quiz.id))?;

        match inner.quizzes.get_mut(&quiz.id) {
            Some(slot) => {
                *slot = quiz.clone();
                debug!("Updated quiz {}", quiz.id);
                Ok(quiz)
            }
            None => Err(StoreError::Missing(quiz.id)),
        }
    }

    async fn destroy(&self, id: QuizId) -> Result<(), StoreError> {
        if self.inner.write().await.quizzes.remove(&id).is_some() {
            debug!("Deleted quiz {}", id);
        }
        Ok(())
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.inner.read().await.quizzes.len())
    }
}
