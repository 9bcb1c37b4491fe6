//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod dispatch;
pub mod play_game;
pub mod quiz_commands;
pub mod session;

#[cfg(test)]
pub(crate) mod test_support;
