//! Session loop
//!
//! Drives read-line → dispatch → re-prompt for one user. The loop issues a
//! single prompt or store operation at a time and only ends on `quit`, on
//! end of input, or when the input channel itself fails.

use crate::ports::display::DisplayPort;
use crate::ports::prompt::{PromptError, PromptPort};
use crate::use_cases::dispatch::{CommandDispatcher, SessionSignal};
use quizshell_domain::QuizRepository;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Why a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed `quit`
    Quit,
    /// The input stream ended (Ctrl+D, EOF, peer hung up)
    InputClosed,
    /// The input channel failed
    Failed(String),
}

/// Summary returned when a session ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub end: SessionEnd,
    /// Command lines read, blank ones included
    pub commands: usize,
}

/// One interactive session over a prompt and a display
pub struct SessionLoop<S: QuizRepository + ?Sized> {
    dispatcher: Arc<CommandDispatcher<S>>,
}

impl<S: QuizRepository + ?Sized> SessionLoop<S> {
    pub fn new(dispatcher: Arc<CommandDispatcher<S>>) -> Self {
        Self { dispatcher }
    }

    /// Run until the session ends
    pub async fn run(&self, prompt: &dyn PromptPort, display: &dyn DisplayPort) -> SessionReport {
        info!("Session started");
        let mut commands = 0;

        let end = loop {
            match prompt.read_command().await {
                Ok(line) => {
                    commands += 1;
                    let signal = self.dispatcher.dispatch(&line, prompt, display).await;
                    if signal == SessionSignal::Close {
                        display.log("Bye!");
                        prompt.close().await;
                        break SessionEnd::Quit;
                    }
                }
                Err(PromptError::Interrupted) => {
                    debug!("Prompt interrupted");
                    continue;
                }
                Err(PromptError::Rejected(reason)) => {
                    debug!("Input line rejected: {}", reason);
                    display.error_log(&reason);
                    continue;
                }
                Err(PromptError::Closed) => {
                    display.log("Bye!");
                    break SessionEnd::InputClosed;
                }
                Err(PromptError::Io(e)) => {
                    warn!("Session input failed: {}", e);
                    break SessionEnd::Failed(e);
                }
            }
        };

        info!("Session ended after {} commands: {:?}", commands, end);
        SessionReport { end, commands }
    }
}
