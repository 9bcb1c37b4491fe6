//! Terminal display for the local shell

use crate::output::style;
use quizshell_application::{DisplayPort, Tone};

/// Writes session output to stdout
pub struct ConsoleDisplay {
    color: bool,
}

impl ConsoleDisplay {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl DisplayPort for ConsoleDisplay {
    fn log(&self, text: &str) {
        println!("{}", text);
    }

    fn error_log(&self, text: &str) {
        println!("{}", style::error_line(text, self.color));
    }

    fn big_log(&self, text: &str, tone: Tone) {
        println!();
        for line in style::banner(text, tone, self.color) {
            println!("{}", line);
        }
        println!();
    }

    fn colorize(&self, text: &str, tone: Tone) -> String {
        style::paint(text, tone, self.color)
    }
}
