//! Command dispatcher
//!
//! Resolves a command line to its handler and turns every outcome into
//! exactly one [`SessionSignal`]. Handler failures are rendered here, at a
//! single error boundary, and never escape to the session loop.

use crate::config::PlayConfig;
use crate::error::CommandError;
use crate::ports::display::{DisplayPort, Tone};
use crate::ports::prompt::PromptPort;
use crate::use_cases::play_game::PlayGameUseCase;
use crate::use_cases::quiz_commands::QuizCommandsUseCase;
use quizshell_domain::{CommandKind, CommandLine, QuizRepository, UnknownCommand};
use std::sync::Arc;
use tracing::{debug, warn};

/// What the session loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSignal {
    /// Show the prompt again and read the next command
    Prompt,
    /// Close the session (`quit`)
    Close,
}

/// Maps command keywords to their handlers
///
/// The mapping is fixed at construction; one dispatcher can be shared by
/// any number of sessions.
pub struct CommandDispatcher<S: QuizRepository + ?Sized> {
    quizzes: QuizCommandsUseCase<S>,
    play: PlayGameUseCase<S>,
    credits: Vec<String>,
}

impl<S: QuizRepository + ?Sized> CommandDispatcher<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            quizzes: QuizCommandsUseCase::new(Arc::clone(&store)),
            play: PlayGameUseCase::new(store),
            credits: env!("CARGO_PKG_AUTHORS")
                .split(':')
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn with_play_config(mut self, config: PlayConfig) -> Self {
        self.play = self.play.with_config(config);
        self
    }

    /// Replace the names listed by `credits`
    pub fn with_credits(mut self, credits: Vec<String>) -> Self {
        self.credits = credits;
        self
    }

    /// Run one command line to completion.
    ///
    /// Always returns exactly one signal: `Close` for `quit`, `Prompt` for
    /// everything else, including blank lines, unknown commands and failed
    /// handlers.
    pub async fn dispatch(
        &self,
        line: &str,
        prompt: &dyn PromptPort,
        display: &dyn DisplayPort,
    ) -> SessionSignal {
        let Some(line) = CommandLine::parse(line) else {
            return SessionSignal::Prompt;
        };

        let kind = match line.kind() {
            Ok(kind) => kind,
            Err(unknown) => {
                Self::unknown(&unknown, display);
                return SessionSignal::Prompt;
            }
        };
        debug!("Dispatching {} {:?}", kind, line.args);

        let arg = line.first_arg();
        let result: Result<(), CommandError> = match kind {
            CommandKind::Quit => return SessionSignal::Close,
            CommandKind::Help => {
                Self::help(display);
                Ok(())
            }
            CommandKind::Credits => {
                self.show_credits(display);
                Ok(())
            }
            CommandKind::List => self.quizzes.list(display).await,
            CommandKind::Show => self.quizzes.show(arg, display).await,
            CommandKind::Add => self.quizzes.add(prompt, display).await.map(drop),
            CommandKind::Edit => self.quizzes.edit(arg, prompt, display).await.map(drop),
            CommandKind::Delete => self.quizzes.delete(arg).await.map(drop),
            CommandKind::Test => self.quizzes.test(arg, prompt, display).await.map(drop),
            CommandKind::Play => self.play.execute(prompt, display).await.map(drop),
        };

        if let Err(e) = result {
            if e.is_internal() {
                warn!("Command {} failed: {}", kind, e);
            } else {
                debug!("Command {} rejected: {}", kind, e);
            }
            for line in e.report_lines() {
                display.error_log(&line);
            }
        }
        SessionSignal::Prompt
    }

    fn help(display: &dyn DisplayPort) {
        display.log("Commands:");
        for kind in CommandKind::ALL {
            display.log(&format!("  {:<14} - {}", kind.synopsis(), kind.description()));
        }
    }

    fn show_credits(&self, display: &dyn DisplayPort) {
        display.log("Authors:");
        for name in &self.credits {
            display.log_toned(&format!("  {name}"), Tone::Green);
        }
    }

    fn unknown(unknown: &UnknownCommand, display: &dyn DisplayPort) {
        display.log(&format!(
            "Unknown command: {}",
            display.colorize(&unknown.0, Tone::Red)
        ));
        display.log(&format!(
            "Use {} to see all available commands.",
            display.colorize("help", Tone::Green)
        ));
    }
}
