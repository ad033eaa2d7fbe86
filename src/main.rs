//! Command-line interface for db-filler
//!
//! # Usage Examples
//!
//! ```bash
//! # Fill the tables described in config.json
//! db-filler config.json
//!
//! # Smaller INSERT statements
//! db-filler config.json --batch-size 1000
//!
//! # Generate everything without touching the database
//! RUST_LOG=debug db-filler config.yaml --dry-run
//! ```
//!
//! ## Configuration
//! ```json
//! {
//!   "database": { "username": "root", "password": "root", "host": "127.0.0.1",
//!                 "port": "3306", "name": "shop", "max_conn": 10 },
//!   "tables": [
//!     { "name": "users", "count": 1000,
//!       "schema": { "code": "unique, ulid", "name": "person_name" } },
//!     { "name": "orders", "count": 5000,
//!       "schema": { "user_code": "users->code", "status": "oneof: new, paid" } }
//!   ]
//! }
//! ```

use anyhow::Context;
use clap::Parser;
use db_filler::fill_core::{Config, Executor};
use db_filler::fill_generator::{FakeValueProvider, DEFAULT_MAX_UNIQUE_ATTEMPTS};
use db_filler::{DryRunExecutor, Filler, ReferenceCache, DEFAULT_BATCH_SIZE};
use fill_mysql::{connection_summary, MySQLExecutor};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "db-filler")]
#[command(about = "Fill a SQL database with synthetic, referentially consistent test data")]
#[command(long_about = None)]
struct Cli {
    /// Path to the configuration file (JSON, or YAML with a .yaml/.yml extension)
    config: PathBuf,

    /// Maximum number of rows per INSERT statement
    #[arg(long, env = "DB_FILLER_BATCH_SIZE", default_value_t = DEFAULT_BATCH_SIZE, value_parser = parse_batch_size)]
    batch_size: usize,

    /// Draws allowed per value before a `unique` generator column gives up
    #[arg(long, env = "DB_FILLER_MAX_UNIQUE_ATTEMPTS", default_value_t = DEFAULT_MAX_UNIQUE_ATTEMPTS)]
    max_unique_attempts: usize,

    /// Generate all rows but do not connect to or write to the database
    #[arg(long)]
    dry_run: bool,
}

fn parse_batch_size(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(0) => Err("batch size must be at least 1".to_string()),
        Ok(size) => Ok(size),
        Err(e) => Err(format!("invalid batch size {s:?}: {e}")),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = Config::from_file(&cli.config)
        .with_context(|| format!("Failed to load configuration from {:?}", cli.config))?;

    tracing::info!("Running database filler with config {:?}", cli.config);
    tracing::debug!(
        "Configuration:\n{}",
        serde_json::to_string_pretty(&config.redacted())?
    );

    let cache = Arc::new(ReferenceCache::new());
    let provider = Arc::new(
        FakeValueProvider::new().with_max_unique_attempts(cli.max_unique_attempts),
    );

    let (executor, mysql): (Arc<dyn Executor>, Option<Arc<MySQLExecutor>>) = if cli.dry_run {
        tracing::info!("Running in dry-run mode - no data will be written");
        tracing::info!(
            "[DRY-RUN] Target: {}",
            connection_summary(&config.database)
        );
        let executor: Arc<dyn Executor> = Arc::new(DryRunExecutor::new());
        (executor, None)
    } else {
        let mysql = Arc::new(
            MySQLExecutor::connect(&config.database)
                .await
                .context("Failed to connect to MySQL")?,
        );
        let executor: Arc<dyn Executor> = mysql.clone();
        (executor, Some(mysql))
    };

    let filler = Filler::new(cache, provider, executor).with_batch_size(cli.batch_size);

    tracing::info!(
        "Start filling {} tables ({} rows)",
        config.tables.len(),
        config.total_rows()
    );
    let result = filler.run(&config.tables).await.context("Fill failed");
    drop(filler);

    // Close the pool on both paths; a fill error takes precedence.
    let closed = match mysql.and_then(Arc::into_inner) {
        Some(mysql) => mysql
            .disconnect()
            .await
            .context("Failed to close MySQL connections"),
        None => Ok(()),
    };
    let summary = result?;
    closed?;

    tracing::info!(
        "Tables filled with total {} rows in {:?} ({:.2} rows/sec)",
        summary.total_rows,
        summary.total_duration,
        summary.rows_per_second()
    );

    Ok(())
}
