//! Quiz subdomain.
//!
//! - [`entities::Quiz`]: a persisted question/answer pair
//! - [`entities::NewQuiz`]: a question/answer pair not yet stored
//! - [`validation::FieldError`]: a rejected field with its message
//! - [`answer::answers_match`]: how a typed answer is compared
//! - [`repository::QuizRepository`]: trait for quiz persistence

pub mod answer;
pub mod entities;
pub mod repository;
pub mod validation;
