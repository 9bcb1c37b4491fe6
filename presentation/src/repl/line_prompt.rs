//! Line-editing prompt backed by rustyline.
//!
//! The editor blocks while reading, so it lives on a dedicated thread and
//! the async side talks to it through channels. Only one read is ever in
//! flight, which matches the one-operation-per-session model.

use async_trait::async_trait;
use quizshell_application::{PromptError, PromptPort};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread::JoinHandle;
use tokio::sync::oneshot;
use tracing::{debug, warn};

struct ReadRequest {
    prompt: String,
    /// Editable text pre-filled left of the cursor
    initial: Option<String>,
    /// Keep the line in the command history
    record: bool,
    reply: oneshot::Sender<Result<String, PromptError>>,
}

/// Prompt for the local terminal
pub struct LinePrompt {
    requests: mpsc::Sender<ReadRequest>,
    prompt: String,
    worker: JoinHandle<()>,
}

impl LinePrompt {
    /// Start the editor thread, loading history from `history` if given.
    pub fn spawn(prompt: impl Into<String>, history: Option<PathBuf>) -> io::Result<Self> {
        let (requests, incoming) = mpsc::channel();
        let (ready_tx, ready_rx) = mpsc::sync_channel(1);

        let worker = std::thread::Builder::new()
            .name("quizshell-editor".to_string())
            .spawn(move || match DefaultEditor::new() {
                Ok(editor) => {
                    let _ = ready_tx.send(Ok(()));
                    run_editor(editor, incoming, history);
                }
                Err(e) => {
                    let _ = ready_tx.send(Err(e.to_string()));
                }
            })?;

        match ready_rx.recv() {
            Ok(Ok(())) => Ok(Self {
                requests,
                prompt: prompt.into(),
                worker,
            }),
            Ok(Err(e)) => Err(io::Error::other(e)),
            Err(_) => Err(io::Error::other("line editor thread exited")),
        }
    }

    /// Stop the editor thread and write the history file.
    pub fn finish(self) {
        let Self {
            requests, worker, ..
        } = self;
        drop(requests);
        if worker.join().is_err() {
            warn!("Line editor thread panicked");
        }
    }

    async fn read(
        &self,
        prompt: String,
        initial: Option<String>,
        record: bool,
    ) -> Result<String, PromptError> {
        let (reply, response) = oneshot::channel();
        self.requests
            .send(ReadRequest {
                prompt,
                initial,
                record,
                reply,
            })
            .map_err(|_| PromptError::Closed)?;
        response.await.unwrap_or(Err(PromptError::Closed))
    }
}

fn run_editor(mut editor: DefaultEditor, incoming: mpsc::Receiver<ReadRequest>, history: Option<PathBuf>) {
    if let Some(path) = &history {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if editor.load_history(path).is_err() {
            debug!("No history loaded from {}", path.display());
        }
    }

    while let Ok(request) = incoming.recv() {
        let line = match &request.initial {
            Some(initial) => editor.readline_with_initial(&request.prompt, (initial.as_str(), "")),
            None => editor.readline(&request.prompt),
        };
        let result = match line {
            Ok(line) => {
                if request.record && !line.trim().is_empty() {
                    let _ = editor.add_history_entry(line.as_str());
                }
                Ok(line)
            }
            Err(ReadlineError::Interrupted) => Err(PromptError::Interrupted),
            Err(ReadlineError::Eof) => Err(PromptError::Closed),
            Err(e) => Err(PromptError::Io(e.to_string())),
        };
        let _ = request.reply.send(result);
    }

    if let Some(path) = &history {
        if let Err(e) = editor.save_history(path) {
            warn!("Failed to save history to {}: {}", path.display(), e);
        }
    }
}

#[async_trait]
impl PromptPort for LinePrompt {
    async fn read_command(&self) -> Result<String, PromptError> {
        self.read(self.prompt.clone(), None, true).await
    }

    async fn ask(&self, question: &str, default: Option<&str>) -> Result<String, PromptError> {
        self.read(question.to_string(), default.map(str::to_string), false)
            .await
            .map(|answer| answer.trim().to_string())
    }
}
