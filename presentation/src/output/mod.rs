//! Console output
//!
//! Text styling shared by the local console and socket sessions.

pub mod console;
pub mod style;

use quizshell_application::{DisplayPort, Tone};

/// Greeting shown when a session starts
pub fn welcome(display: &dyn DisplayPort) {
    display.big_log("Quiz Shell", Tone::Green);
    display.log(&format!(
        "Type {} to see all available commands.",
        display.colorize("help", Tone::Green)
    ));
}
