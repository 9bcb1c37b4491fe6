//! Prompt and display over a byte stream
//!
//! Output goes through a bounded channel to a writer task, so display
//! calls stay synchronous. A client that stops reading fills the channel
//! and is marked stalled instead of buffering without limit.

use crate::output::style;
use crate::server::codec::{ClientLine, ClientLineCodec};
use async_trait::async_trait;
use futures::StreamExt;
use quizshell_application::{DisplayPort, PromptError, PromptPort, Tone};
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{Mutex, mpsc};
use tokio_util::codec::FramedRead;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Messages queued per connection before the client counts as stalled
pub const OUTBOX_CAPACITY: usize = 256;

/// A message for the connection's writer task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outgoing {
    /// Raw text, sent as-is
    Text(String),
    /// Flush and close the connection
    Close,
}

/// Sending side of a connection's output queue
#[derive(Debug, Clone)]
pub struct Outbox {
    tx: mpsc::Sender<Outgoing>,
    stalled: CancellationToken,
}

impl Outbox {
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<Outgoing>) {
        let (tx, rx) = mpsc::channel(capacity);
        let outbox = Self {
            tx,
            stalled: CancellationToken::new(),
        };
        (outbox, rx)
    }

    /// Queue a message without waiting.
    ///
    /// Returns false if the message was dropped. A full queue also marks
    /// the connection stalled.
    pub fn send(&self, message: Outgoing) -> bool {
        match self.tx.try_send(message) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                self.stalled.cancel();
                false
            }
            Err(TrySendError::Closed(_)) => false,
        }
    }

    /// Resolves once the queue has overflowed
    pub async fn stalled(&self) {
        self.stalled.cancelled().await
    }

    pub fn is_stalled(&self) -> bool {
        self.stalled.is_cancelled()
    }
}

/// Drain `outgoing` into `writer` until closed or the peer goes away.
pub async fn write_loop<W>(mut writer: W, mut outgoing: mpsc::Receiver<Outgoing>)
where
    W: AsyncWrite + Unpin,
{
    while let Some(message) = outgoing.recv().await {
        match message {
            Outgoing::Text(text) => {
                if let Err(e) = writer.write_all(text.as_bytes()).await {
                    debug!("Client write failed: {}", e);
                    break;
                }
            }
            Outgoing::Close => break,
        }
    }
    let _ = writer.shutdown().await;
}

/// Prompt that reads lines from a client
pub struct StreamPrompt<R> {
    lines: Mutex<FramedRead<R, ClientLineCodec>>,
    out: Outbox,
    prompt: String,
}

impl<R: AsyncRead + Unpin + Send> StreamPrompt<R> {
    pub fn new(reader: R, out: Outbox, prompt: impl Into<String>) -> Self {
        Self::with_codec(reader, out, prompt, ClientLineCodec::default())
    }

    pub fn with_codec(
        reader: R,
        out: Outbox,
        prompt: impl Into<String>,
        codec: ClientLineCodec,
    ) -> Self {
        Self {
            lines: Mutex::new(FramedRead::new(reader, codec)),
            out,
            prompt: prompt.into(),
        }
    }

    fn send(&self, text: String) -> Result<(), PromptError> {
        if self.out.send(Outgoing::Text(text)) {
            Ok(())
        } else {
            Err(PromptError::Closed)
        }
    }

    async fn next_line(&self) -> Result<String, PromptError> {
        let mut lines = self.lines.lock().await;
        match lines.next().await {
            Some(Ok(ClientLine::Text(line))) => Ok(line),
            Some(Ok(ClientLine::TooLong)) => Err(PromptError::Rejected(format!(
                "Input line too long (max {} bytes).",
                lines.decoder().max_length()
            ))),
            Some(Err(e)) => Err(e.into()),
            None => Err(PromptError::Closed),
        }
    }
}

#[async_trait]
impl<R: AsyncRead + Unpin + Send> PromptPort for StreamPrompt<R> {
    async fn read_command(&self) -> Result<String, PromptError> {
        self.send(self.prompt.clone())?;
        self.next_line().await
    }

    /// A socket cannot pre-fill an editable line, so the default is shown in
    /// brackets and an empty answer keeps it.
    async fn ask(&self, question: &str, default: Option<&str>) -> Result<String, PromptError> {
        let text = match default {
            Some(default) => format!("{}[{}] ", question, default),
            None => question.to_string(),
        };
        self.send(text)?;

        let answer = self.next_line().await?;
        let answer = answer.trim();
        match default {
            Some(default) if answer.is_empty() => Ok(default.trim().to_string()),
            _ => Ok(answer.to_string()),
        }
    }

    async fn close(&self) {
        self.out.send(Outgoing::Close);
    }
}

/// Display that writes to a client through the writer task
pub struct ChannelDisplay {
    out: Outbox,
    color: bool,
}

impl ChannelDisplay {
    pub fn new(out: Outbox, color: bool) -> Self {
        Self { out, color }
    }

    fn line(&self, text: String) {
        // A gone or stalled client is noticed by the connection, not here
        self.out.send(Outgoing::Text(format!("{}\r\n", text)));
    }
}

impl DisplayPort for ChannelDisplay {
    fn log(&self, text: &str) {
        self.line(text.to_string());
    }

    fn error_log(&self, text: &str) {
        self.line(style::error_line(text, self.color));
    }

    fn big_log(&self, text: &str, tone: Tone) {
        for line in style::banner(text, tone, self.color) {
            self.line(line);
        }
    }

    fn colorize(&self, text: &str, tone: Tone) -> String {
        style::paint(text, tone, self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(rx: &mut mpsc::Receiver<Outgoing>) -> Vec<Outgoing> {
        let mut out = Vec::new();
        while let Ok(message) = rx.try_recv() {
            out.push(message);
        }
        out
    }

    fn outbox() -> (Outbox, mpsc::Receiver<Outgoing>) {
        Outbox::channel(OUTBOX_CAPACITY)
    }

    #[tokio::test]
    async fn test_read_command_sends_prompt_and_strips_crlf() {
        let (tx, mut rx) = outbox();
        let prompt = StreamPrompt::new(&b"list\r\n"[..], tx, "> ");

        assert_eq!(prompt.read_command().await.unwrap(), "list");
        assert_eq!(drain(&mut rx), vec![Outgoing::Text("> ".to_string())]);
        assert_eq!(prompt.read_command().await, Err(PromptError::Closed));
    }

    #[tokio::test]
    async fn test_undecodable_bytes_do_not_end_input() {
        let (tx, _rx) = outbox();
        let prompt = StreamPrompt::new(&b"a\xf1adir\r\nhelp\r\n"[..], tx, "> ");

        assert_eq!(prompt.read_command().await.unwrap(), "a\u{FFFD}adir");
        assert_eq!(prompt.read_command().await.unwrap(), "help");
    }

    #[tokio::test]
    async fn test_long_line_is_rejected_then_reading_resumes() {
        let (tx, _rx) = outbox();
        let prompt = StreamPrompt::with_codec(
            &b"far too long a line\r\nlist\r\n"[..],
            tx,
            "> ",
            ClientLineCodec::new(8),
        );

        assert_eq!(
            prompt.read_command().await,
            Err(PromptError::Rejected(
                "Input line too long (max 8 bytes).".to_string()
            ))
        );
        assert_eq!(prompt.read_command().await.unwrap(), "list");
    }

    #[tokio::test]
    async fn test_ask_trims_answer() {
        let (tx, _rx) = outbox();
        let prompt = StreamPrompt::new(&b"  Rome \n"[..], tx, "> ");
        assert_eq!(prompt.ask("Capital of Italy? ", None).await.unwrap(), "Rome");
    }

    #[tokio::test]
    async fn test_empty_answer_keeps_default() {
        let (tx, mut rx) = outbox();
        let prompt = StreamPrompt::new(&b"\r\nnew answer\n"[..], tx, "> ");

        let kept = prompt.ask("Question: ", Some("old?")).await.unwrap();
        let replaced = prompt.ask("Answer: ", Some("old")).await.unwrap();

        assert_eq!(kept, "old?");
        assert_eq!(replaced, "new answer");
        assert_eq!(
            drain(&mut rx),
            vec![
                Outgoing::Text("Question: [old?] ".to_string()),
                Outgoing::Text("Answer: [old] ".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_close_queues_close() {
        let (tx, mut rx) = outbox();
        let prompt = StreamPrompt::new(&b""[..], tx, "> ");
        prompt.close().await;
        assert_eq!(drain(&mut rx), vec![Outgoing::Close]);
    }

    #[tokio::test]
    async fn test_display_lines_end_with_crlf() {
        let (tx, mut rx) = outbox();
        let display = ChannelDisplay::new(tx, false);
        display.log("hello");
        display.error_log("bad");
        assert_eq!(
            drain(&mut rx),
            vec![
                Outgoing::Text("hello\r\n".to_string()),
                Outgoing::Text("Error: bad\r\n".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_full_outbox_marks_client_stalled() {
        let (tx, mut rx) = Outbox::channel(2);
        let display = ChannelDisplay::new(tx.clone(), false);

        display.log("one");
        display.log("two");
        assert!(!tx.is_stalled());
        display.log("three");

        assert!(tx.is_stalled());
        tx.stalled().await;
        assert_eq!(drain(&mut rx).len(), 2);
    }

    #[tokio::test]
    async fn test_prompt_to_departed_client_is_closed() {
        let (tx, rx) = outbox();
        drop(rx);
        let prompt = StreamPrompt::new(&b"list\n"[..], tx.clone(), "> ");

        assert_eq!(prompt.read_command().await, Err(PromptError::Closed));
        assert!(!tx.is_stalled());
    }

    #[tokio::test]
    async fn test_write_loop_stops_at_close() {
        let (tx, rx) = outbox();
        tx.send(Outgoing::Text("one\r\n".to_string()));
        tx.send(Outgoing::Close);
        tx.send(Outgoing::Text("never\r\n".to_string()));

        let mut written = Vec::new();
        write_loop(&mut written, rx).await;
        assert_eq!(written, b"one\r\n");
    }
}
