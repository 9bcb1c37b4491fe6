//! Shell command vocabulary.
//!
//! - [`CommandLine`]: a raw input line split into keyword and arguments
//! - [`CommandKind`]: the commands the shell understands, with aliases

mod keyword;

pub use keyword::{CommandKind, CommandLine, UnknownCommand};
