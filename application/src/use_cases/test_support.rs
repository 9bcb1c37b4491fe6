//! Hand-written port doubles shared by the use case tests.

use crate::ports::display::{DisplayPort, Tone};
use crate::ports::prompt::{PromptError, PromptPort};
use async_trait::async_trait;
use quizshell_domain::{FieldError, NewQuiz, Quiz, QuizId, QuizRepository, StoreError};
use std::collections::{BTreeMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// What a [`RecordingDisplay`] was asked to show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shown {
    Line(String),
    Error(String),
    Banner(String),
}

/// Display that records every call, with colour ignored
#[derive(Default)]
pub struct RecordingDisplay {
    shown: Mutex<Vec<Shown>>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shown(&self) -> Vec<Shown> {
        self.shown.lock().unwrap().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.shown()
            .into_iter()
            .filter_map(|s| match s {
                Shown::Line(l) => Some(l),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.shown()
            .into_iter()
            .filter_map(|s| match s {
                Shown::Error(l) => Some(l),
                _ => None,
            })
            .collect()
    }

    pub fn banners(&self) -> Vec<String> {
        self.shown()
            .into_iter()
            .filter_map(|s| match s {
                Shown::Banner(l) => Some(l),
                _ => None,
            })
            .collect()
    }
}

impl DisplayPort for RecordingDisplay {
    fn log(&self, text: &str) {
        self.shown.lock().unwrap().push(Shown::Line(text.to_string()));
    }

    fn error_log(&self, text: &str) {
        self.shown.lock().unwrap().push(Shown::Error(text.to_string()));
    }

    fn big_log(&self, text: &str, _tone: Tone) {
        self.shown
            .lock()
            .unwrap()
            .push(Shown::Banner(text.to_string()));
    }

    fn colorize(&self, text: &str, _tone: Tone) -> String {
        text.to_string()
    }
}

/// Prompt that replays scripted command lines and answers
#[derive(Default)]
pub struct ScriptedPrompt {
    commands: Mutex<VecDeque<Result<String, PromptError>>>,
    answers: Mutex<VecDeque<Result<String, PromptError>>>,
    asked: Mutex<Vec<(String, Option<String>)>>,
    reads: AtomicUsize,
    closed: AtomicBool,
}

impl ScriptedPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_commands(self, commands: &[&str]) -> Self {
        self.commands
            .lock()
            .unwrap()
            .extend(commands.iter().map(|c| Ok(c.to_string())));
        self
    }

    pub fn with_command_error(self, error: PromptError) -> Self {
        self.commands.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn with_answers(self, answers: &[&str]) -> Self {
        self.answers
            .lock()
            .unwrap()
            .extend(answers.iter().map(|a| Ok(a.to_string())));
        self
    }

    pub fn with_answer_error(self, error: PromptError) -> Self {
        self.answers.lock().unwrap().push_back(Err(error));
        self
    }

    /// Questions asked so far, with their pre-filled defaults
    pub fn asked(&self) -> Vec<(String, Option<String>)> {
        self.asked.lock().unwrap().clone()
    }

    /// Number of times the session prompt was shown
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PromptPort for ScriptedPrompt {
    async fn read_command(&self) -> Result<String, PromptError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.commands
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(PromptError::Closed))
    }

    async fn ask(&self, question: &str, default: Option<&str>) -> Result<String, PromptError> {
        self.asked
            .lock()
            .unwrap()
            .push((question.to_string(), default.map(str::to_string)));
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(PromptError::Closed))
            .map(|a| a.trim().to_string())
    }

    async fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}

/// Minimal store with the same field rules as the real adapters
#[derive(Default)]
pub struct FakeStore {
    quizzes: Mutex<BTreeMap<QuizId, Quiz>>,
    next_id: AtomicUsize,
    broken: AtomicBool,
}

impl FakeStore {
    pub fn with_quizzes(pairs: &[(&str, &str)]) -> Self {
        let store = Self::default();
        {
            let mut quizzes = store.quizzes.lock().unwrap();
            for (question, answer) in pairs {
                let id = store.allocate();
                quizzes.insert(id, Quiz::new(id, *question, *answer));
            }
        }
        store
    }

    /// A store whose every call fails
    pub fn broken() -> Self {
        let store = Self::default();
        store.broken.store(true, Ordering::SeqCst);
        store
    }

    pub fn snapshot(&self) -> Vec<Quiz> {
        self.quizzes.lock().unwrap().values().cloned().collect()
    }

    fn allocate(&self) -> QuizId {
        QuizId::new(self.next_id.fetch_add(1, Ordering::SeqCst) as i64 + 1)
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.broken.load(Ordering::SeqCst) {
            Err(StoreError::Backend("database is locked".to_string()))
        } else {
            Ok(())
        }
    }

    /// Field rules plus question uniqueness, `except` being the quiz itself
    fn validate(&self, quiz: &NewQuiz, except: Option<QuizId>) -> Result<(), StoreError> {
        let mut errors = quiz.validate().err().unwrap_or_default();
        let taken = self
            .quizzes
            .lock()
            .unwrap()
            .values()
            .any(|q| q.question == quiz.question && Some(q.id) != except);
        if taken {
            errors.push(FieldError::duplicate_question());
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(StoreError::Validation(errors))
        }
    }
}

#[async_trait]
impl QuizRepository for FakeStore {
    async fn find_all(&self) -> Result<Vec<Quiz>, StoreError> {
        self.check()?;
        Ok(self.snapshot())
    }

    async fn find_by_id(&self, id: QuizId) -> Result<Option<Quiz>, StoreError> {
        self.check()?;
        Ok(self.quizzes.lock().unwrap().get(&id).cloned())
    }

    async fn create(&self, quiz: NewQuiz) -> Result<Quiz, StoreError> {
        self.check()?;
        self.validate(&quiz, None)?;
        let quiz = quiz.with_id(self.allocate());
        self.quizzes.lock().unwrap().insert(quiz.id, quiz.clone());
        Ok(quiz)
    }

    async fn update(&self, quiz: Quiz) -> Result<Quiz, StoreError> {
        self.check()?;
        self.validate(&quiz.to_new(), Some(quiz.id))?;
        let mut quizzes = self.quizzes.lock().unwrap();
        match quizzes.get_mut(&quiz.id) {
            Some(slot) => {
                *slot = quiz.clone();
                Ok(quiz)
            }
            None => Err(StoreError::Missing(quiz.id)),
        }
    }

    async fn destroy(&self, id: QuizId) -> Result<(), StoreError> {
        self.check()?;
        self.quizzes.lock().unwrap().remove(&id);
        Ok(())
    }
}
