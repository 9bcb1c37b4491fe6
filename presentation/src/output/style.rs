//! Colour and banner helpers

use colored::{ColoredString, Colorize};
use quizshell_application::Tone;

fn tone(text: &str, tone: Tone) -> ColoredString {
    match tone {
        Tone::Plain => text.normal(),
        Tone::Magenta => text.magenta(),
        Tone::Green => text.green(),
        Tone::Red => text.red(),
    }
}

/// Colour `text`, or return it unchanged when colour is off
pub fn paint(text: &str, color: Tone, enabled: bool) -> String {
    if enabled {
        tone(text, color).to_string()
    } else {
        text.to_string()
    }
}

/// An error line: `Error: <text>`
pub fn error_line(text: &str, enabled: bool) -> String {
    if enabled {
        format!("{} {}", "Error:".red().bold(), text.red())
    } else {
        format!("Error: {}", text)
    }
}

/// Box `text` into a three-line banner
pub fn banner(text: &str, color: Tone, enabled: bool) -> Vec<String> {
    let width = text.chars().count() + 4;
    let lines = [
        format!("╭{}╮", "─".repeat(width)),
        format!("│  {}  │", text),
        format!("╰{}╯", "─".repeat(width)),
    ];
    lines
        .iter()
        .map(|line| {
            if enabled {
                tone(line, color).bold().to_string()
            } else {
                line.clone()
            }
        })
        .collect()
}
