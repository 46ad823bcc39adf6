//! sticky - tiny sticky notes for the terminal, backed by SQLite

pub mod cli;
pub mod domain;
pub mod store;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cli::{
    Cli,
    config::{Config, Environment},
    handlers::dispatch,
    output::write_creation_notice,
};
use store::SqliteStore;

/// Environment variable holding a tracing filter that overrides `-v`.
pub const LOG_ENV_VAR: &str = "STICKY_LOG";

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level());

    let config = Config::load()?;
    let env = Environment::capture();
    let db_path = config.db_path(cli.db.as_deref(), &env)?;

    if let Some(width) = cli.width {
        tracing::debug!(width, "--width is reserved and has no effect");
    }

    let store = SqliteStore::open(&db_path)
        .with_context(|| format!("failed to open notes database at {}", db_path.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if store.was_created() {
        match std::env::current_dir() {
            Ok(cwd) => write_creation_notice(&mut out, &db_path, &cwd)?,
            Err(e) => tracing::warn!("could not determine working directory: {e}"),
        }
    }

    let stdin = io::stdin();
    dispatch(cli.action(), store, &mut stdin.lock(), &mut out)?;
    out.flush()?;
    Ok(())
}

/// Initialize the tracing subscriber on stderr.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .init();
}
