//! SQLite-backed quiz store.
//!
//! One table, `quizzes`, with a unique question column. The connection is
//! guarded by a mutex, so concurrent sessions are serialised per statement.

use async_trait::async_trait;
use quizshell_domain::{FieldError, NewQuiz, Quiz, QuizId, QuizRepository, StoreError};
use rusqlite::{Connection, ErrorCode, OptionalExtension, params};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;
use tracing::{debug, info};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS quizzes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    question TEXT UNIQUE NOT NULL,
    answer TEXT NOT NULL
);";

/// Errors that can occur while opening or querying the database.
#[derive(Debug, Error)]
pub enum SqliteError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("database connection poisoned")]
    Poisoned,
}

impl From<SqliteError> for StoreError {
    fn from(error: SqliteError) -> Self {
        StoreError::Backend(error.to_string())
    }
}

/// Quiz store persisted in a SQLite database
pub struct SqliteQuizStore {
    conn: Mutex<Connection>,
}

impl SqliteQuizStore {
    /// Open or create the database at the given path and ensure the schema.
    pub fn open(path: &Path) -> Result<Self, SqliteError> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        info!("Opened quiz database at {}", path.display());
        Self::with_connection(conn)
    }

    /// A private database that lives as long as the store.
    pub fn open_in_memory() -> Result<Self, SqliteError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, SqliteError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, SqliteError> {
        self.conn.lock().map_err(|_| SqliteError::Poisoned)
    }
}

fn row_to_quiz(row: &rusqlite::Row<'_>) -> rusqlite::Result<Quiz> {
    Ok(Quiz::new(
        QuizId::new(row.get(0)?),
        row.get::<_, String>(1)?,
        row.get::<_, String>(2)?,
    ))
}

/// The only constraint field validation does not pre-check is the unique
/// question, so a constraint failure here means a duplicate.
fn write_error(error: rusqlite::Error) -> StoreError {
    if error.sqlite_error_code() == Some(ErrorCode::ConstraintViolation) {
        StoreError::Validation(vec![FieldError::duplicate_question()])
    } else {
        SqliteError::from(error).into()
    }
}

#[async_trait]
impl QuizRepository for SqliteQuizStore {
    async fn find_all(&self) -> Result<Vec<Quiz>, StoreError> {
        let conn = self.conn()?;
        let mut stmt = conn
            .prepare("SELECT id, question, answer FROM quizzes ORDER BY id")
            .map_err(SqliteError::from)?;
        let quizzes = stmt
            .query_map([], row_to_quiz)
            .and_then(|rows| rows.collect::<Result<Vec<_>, _>>())
            .map_err(SqliteError::from)?;
        debug!("Loaded {} quizzes", quizzes.len());
        Ok(quizzes)
    }

    async fn find_by_id(&self, id: QuizId) -> Result<Option<Quiz>, StoreError> {
        let conn = self.conn()?;
        let quiz = conn
            .query_row(
                "SELECT id, question, answer FROM quizzes WHERE id = ?1",
                params![id.value()],
                row_to_quiz,
            )
            .optional()
            .map_err(SqliteError::from)?;
        Ok(quiz)
    }

    async fn create(&self, quiz: NewQuiz) -> Result<Quiz, StoreError> {
        quiz.validate().map_err(StoreError::Validation)?;
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO quizzes (question, answer) VALUES (?1, ?2)",
            params![quiz.question, quiz.answer],
        )
        .map_err(write_error)?;
        let quiz = quiz.with_id(QuizId::new(conn.last_insert_rowid()));
        debug!("Created quiz {}", quiz.id);
        Ok(quiz)
    }

    async fn update(&self, quiz: Quiz) -> Result<Quiz, StoreError> {
        quiz.to_new().validate().map_err(StoreError::Validation)?;
        let conn = self.conn()?;
        let changed = conn
            .execute(
                "UPDATE quizzes SET question = ?1, answer = ?2 WHERE id = ?3",
                params![quiz.question, quiz.answer, quiz.id.value()],
            )
            .map_err(write_error)?;
        if changed == 0 {
            return Err(StoreError::Missing(quiz.id));
        }
        debug!("Updated quiz {}", quiz.id);
        Ok(quiz)
    }

    async fn destroy(&self, id: QuizId) -> Result<(), StoreError> {
        let conn = self.conn()?;
        let removed = conn
            .execute("DELETE FROM quizzes WHERE id = ?1", params![id.value()])
            .map_err(SqliteError::from)?;
        debug!("Deleted {} row(s) for quiz {}", removed, id);
        Ok(())
    }

    async fn count(&self) -> Result<usize, StoreError> {
        let conn = self.conn()?;
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM quizzes", [], |row| row.get(0))
            .map_err(SqliteError::from)?;
        Ok(usize::try_from(count).unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SqliteQuizStore {
        SqliteQuizStore::open_in_memory().unwrap()
    }

    #[tokio::test]
    async fn test_create_then_find() {
        let store = store();
        let created = store.create(NewQuiz::new("2+2?", "4")).await.unwrap();
        let found = store.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found.question, "2+2?");
        assert_eq!(found.answer, "4");
    }

    #[tokio::test]
    async fn test_find_missing_is_none() {
        assert!(store().find_by_id(QuizId::new(9)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_question_is_a_field_error() {
        let store = store();
        store.create(NewQuiz::new("2+2?", "4")).await.unwrap();
        let err = store.create(NewQuiz::new("2+2?", "5")).await.unwrap_err();
        assert_eq!(
            err,
            StoreError::Validation(vec![FieldError::duplicate_question()])
        );
    }

    #[tokio::test]
    async fn test_blank_answer_never_reaches_the_table() {
        let store = store();
        let err = store.create(NewQuiz::new("q?", "  ")).await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_and_missing_update() {
        let store = store();
        let quiz = store.create(NewQuiz::new("q?", "a")).await.unwrap();
        store.update(quiz.with_text("q2?", "a2")).await.unwrap();
        assert_eq!(
            store.find_by_id(quiz.id).await.unwrap().unwrap().question,
            "q2?"
        );

        let ghost = Quiz::new(QuizId::new(77), "x?", "y");
        assert_eq!(
            store.update(ghost).await.unwrap_err(),
            StoreError::Missing(QuizId::new(77))
        );
    }

    #[tokio::test]
    async fn test_destroy_missing_is_noop() {
        let store = store();
        store.create(NewQuiz::new("q?", "a")).await.unwrap();
        store.destroy(QuizId::new(99)).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_data_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quizzes.sqlite");
        {
            let store = SqliteQuizStore::open(&path).unwrap();
            store.create(NewQuiz::new("2+2?", "4")).await.unwrap();
        }
        let store = SqliteQuizStore::open(&path).unwrap();
        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].question, "2+2?");
    }
}
