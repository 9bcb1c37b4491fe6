//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Quiz store selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    /// SQLite database file
    Sqlite,
    /// In-memory store, lost on exit
    Memory,
}

/// CLI arguments for quizshell
#[derive(Parser, Debug)]
#[command(name = "quizshell")]
#[command(author, version, about = "Interactive quiz manager")]
#[command(long_about = r#"
quizshell keeps a set of question/answer quizzes and lets you list, add,
edit, delete and test them from an interactive shell, or play them all in
random order until the first wrong answer.

With --serve the same shell is offered over TCP: every connection gets its
own session (try `telnet 127.0.0.1 3030`).

Configuration files are loaded from (in priority order):
1. QUIZSHELL_* environment variables (e.g. QUIZSHELL_SERVER__PORT=4000)
2. --config <path>       Explicit config file
3. ./quizshell.toml      Project-level config
4. ~/.config/quizshell/config.toml   Global config

Example:
  quizshell
  quizshell --store memory --seed 7
  quizshell --serve --port 3030
"#)]
pub struct Cli {
    /// Serve the shell over TCP instead of the local terminal
    #[arg(long)]
    pub serve: bool,

    /// Address to listen on with --serve
    #[arg(long, value_name = "ADDR")]
    pub bind: Option<String>,

    /// Port to listen on with --serve
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Quiz store backend
    #[arg(long, value_enum, value_name = "KIND")]
    pub store: Option<StoreKind>,

    /// SQLite database file
    #[arg(long, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Do not insert sample quizzes into an empty store
    #[arg(long)]
    pub no_samples: bool,

    /// Fixed seed for the play order
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
