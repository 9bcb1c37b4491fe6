//! Local interactive shell
//!
//! [`LinePrompt`] owns a rustyline editor on its own thread; [`QuizRepl`]
//! ties it to a console display and runs one session.

mod line_prompt;
mod shell;

pub use line_prompt::LinePrompt;
pub use shell::QuizRepl;
