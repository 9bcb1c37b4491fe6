//! CLI entrypoint for quizshell
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use quizshell_application::{CommandDispatcher, PlayConfig, SessionEnd};
use quizshell_domain::QuizRepository;
use quizshell_infrastructure::{
    ConfigLoader, FileConfig, InMemoryQuizStore, SqliteQuizStore, StoreBackend, seed_if_empty,
};
use quizshell_presentation::{Cli, QuizRepl, QuizServer, ReplConfig, ServerConfig, StoreKind};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())?
    };

    let log_file = cli
        .log_file
        .clone()
        .or_else(|| config.logging.file.as_ref().map(PathBuf::from));
    // Held until exit so buffered log lines are flushed
    let _log_guard = init_logging(cli.verbose, log_file.as_deref())?;

    info!("Starting quizshell");
    check_config(&config)?;

    // === Dependency Injection ===
    let store = open_store(&cli, &config).await?;

    let play = PlayConfig {
        seed: cli.seed.or(config.play.seed),
    };
    let dispatcher = Arc::new(CommandDispatcher::new(store).with_play_config(play));
    let color = config.repl.color && !cli.no_color;

    if cli.serve {
        let bind = cli.bind.clone().unwrap_or_else(|| config.server.bind.clone());
        let port = cli.port.unwrap_or(config.server.port);
        let server = QuizServer::bind((bind.as_str(), port), dispatcher)
            .await
            .with_context(|| format!("Cannot listen on {}:{}", bind, port))?
            .with_config(ServerConfig {
                prompt: config.repl.prompt.clone(),
                color,
            });
        println!("Serving quizzes on {} (Ctrl-C to stop)", server.local_addr()?);

        let shutdown = CancellationToken::new();
        let trigger = shutdown.clone();
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    info!("Ctrl-C received");
                    trigger.cancel();
                }
                Err(e) => warn!("Cannot listen for Ctrl-C: {}", e),
            }
        });

        server.run(shutdown).await?;
        return Ok(());
    }

    let repl = QuizRepl::new(dispatcher).with_config(ReplConfig {
        prompt: config.repl.prompt.clone(),
        history_file: config.repl.history_file.clone(),
        color,
    });
    let report = repl.run().await?;
    info!("Session ended after {} commands", report.commands);

    if let SessionEnd::Failed(e) = report.end {
        bail!("Input failed: {}", e);
    }
    Ok(())
}

/// Initialize logging based on verbosity level, to stderr or to a file
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .with_context(|| format!("Log file path has no file name: {}", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(Some(guard))
}

/// Log every config issue; errors stop startup
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in &issues {
        if issue.is_error() {
            error!("{}", issue.message);
        } else {
            warn!("{}", issue.message);
        }
    }

    let errors = issues.iter().filter(|i| i.is_error()).count();
    if errors > 0 {
        bail!("Invalid configuration: {} error(s), see the log above", errors);
    }
    Ok(())
}

async fn open_store(cli: &Cli, config: &FileConfig) -> Result<Arc<dyn QuizRepository>> {
    let backend = match cli.store {
        Some(StoreKind::Sqlite) => StoreBackend::Sqlite,
        Some(StoreKind::Memory) => StoreBackend::Memory,
        None => config.store.parse_backend().0,
    };

    let store: Arc<dyn QuizRepository> = match backend {
        StoreBackend::Memory => Arc::new(InMemoryQuizStore::new()),
        StoreBackend::Sqlite => {
            let path = cli
                .db
                .clone()
                .unwrap_or_else(|| PathBuf::from(&config.store.path));
            let store = SqliteQuizStore::open(&path)
                .with_context(|| format!("Cannot open quiz database {}", path.display()))?;
            Arc::new(store)
        }
    };
    info!("Using the {} store", backend);

    if config.store.seed && !cli.no_samples {
        let seeded = seed_if_empty(store.as_ref()).await?;
        if seeded > 0 {
            info!("Added {} sample quizzes", seeded);
        }
    }
    Ok(store)
}
