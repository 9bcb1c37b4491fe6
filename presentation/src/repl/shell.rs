//! The local shell: one session on the terminal

use crate::config::ReplConfig;
use crate::output::{console::ConsoleDisplay, welcome};
use crate::repl::LinePrompt;
use quizshell_application::{CommandDispatcher, SessionLoop, SessionReport};
use quizshell_domain::QuizRepository;
use std::io;
use std::sync::Arc;

/// Interactive quiz shell on the local terminal
pub struct QuizRepl<S: QuizRepository + ?Sized> {
    session: SessionLoop<S>,
    config: ReplConfig,
}

impl<S: QuizRepository + ?Sized> QuizRepl<S> {
    pub fn new(dispatcher: Arc<CommandDispatcher<S>>) -> Self {
        Self {
            session: SessionLoop::new(dispatcher),
            config: ReplConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the shell until `quit` or end of input
    pub async fn run(&self) -> io::Result<SessionReport> {
        let display = ConsoleDisplay::new(self.config.color);
        let prompt = LinePrompt::spawn(self.config.prompt.clone(), self.config.history_path())?;

        welcome(&display);
        let report = self.session.run(&prompt, &display).await;

        prompt.finish();
        Ok(report)
    }
}
