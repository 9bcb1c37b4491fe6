//! Telnet-style socket server
//!
//! Every accepted connection runs its own session loop over the socket.
//! Connections share only the dispatcher and, through it, the quiz store.

mod codec;
mod connection;
mod listener;

pub use codec::{ClientLine, ClientLineCodec, MAX_LINE_LENGTH};
pub use connection::{ChannelDisplay, OUTBOX_CAPACITY, Outbox, Outgoing, StreamPrompt};
pub use listener::QuizServer;
