//! Command keywords and input line parsing

use thiserror::Error;

/// A keyword that names no command
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown command: {0}")]
pub struct UnknownCommand(pub String);

/// The commands available in a quiz session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Help,
    List,
    Show,
    Add,
    Delete,
    Edit,
    Test,
    Play,
    Credits,
    Quit,
}

impl CommandKind {
    /// Every command, in help order
    pub const ALL: [CommandKind; 10] = [
        CommandKind::Help,
        CommandKind::List,
        CommandKind::Show,
        CommandKind::Add,
        CommandKind::Delete,
        CommandKind::Edit,
        CommandKind::Test,
        CommandKind::Play,
        CommandKind::Credits,
        CommandKind::Quit,
    ];

    /// Canonical keyword
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandKind::Help => "help",
            CommandKind::List => "list",
            CommandKind::Show => "show",
            CommandKind::Add => "add",
            CommandKind::Delete => "delete",
            CommandKind::Edit => "edit",
            CommandKind::Test => "test",
            CommandKind::Play => "play",
            CommandKind::Credits => "credits",
            CommandKind::Quit => "quit",
        }
    }

    /// Short forms accepted besides the canonical keyword
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            CommandKind::Help => &["h"],
            CommandKind::List => &["ls"],
            CommandKind::Play => &["p"],
            CommandKind::Quit => &["q", "exit"],
            _ => &[],
        }
    }

    /// Whether the command takes an `<id>` argument
    pub fn takes_id(&self) -> bool {
        matches!(
            self,
            CommandKind::Show | CommandKind::Delete | CommandKind::Edit | CommandKind::Test
        )
    }

    /// Usage form shown in help, e.g. `show <id>`
    pub fn synopsis(&self) -> String {
        let mut names: Vec<&str> = self.aliases().to_vec();
        names.push(self.as_str());
        let names = names.join("|");
        if self.takes_id() {
            format!("{names} <id>")
        } else {
            names
        }
    }

    /// One-line description shown in help
    pub fn description(&self) -> &'static str {
        match self {
            CommandKind::Help => "Show this help.",
            CommandKind::List => "List the existing quizzes.",
            CommandKind::Show => "Show the question and answer of the given quiz.",
            CommandKind::Add => "Add a new quiz interactively.",
            CommandKind::Delete => "Delete the given quiz.",
            CommandKind::Edit => "Edit the given quiz.",
            CommandKind::Test => "Try the given quiz.",
            CommandKind::Play => "Play: answer all quizzes in random order.",
            CommandKind::Credits => "Show the credits.",
            CommandKind::Quit => "Leave the program.",
        }
    }
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CommandKind {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let keyword = s.trim().to_lowercase();
        CommandKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == keyword || kind.aliases().contains(&keyword.as_str()))
            .ok_or(UnknownCommand(keyword))
    }
}

/// A raw input line split into a lowercase keyword and its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub keyword: String,
    pub args: Vec<String>,
}

impl CommandLine {
    /// Split a line on whitespace. Returns `None` for a blank line.
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let keyword = words.next()?.to_lowercase();
        Some(Self {
            keyword,
            args: words.map(str::to_string).collect(),
        })
    }

    /// The first positional argument, if any
    pub fn first_arg(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    /// Resolve the keyword to a command
    pub fn kind(&self) -> Result<CommandKind, UnknownCommand> {
        self.keyword.parse()
    }
}
