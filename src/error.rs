//! Errors of a fill run. Every variant is fatal to the run.

use crate::cache::CacheError;
use fill_core::{ConfigError, ExecutionError};
use fill_generator::GeneratorError;

#[derive(Debug, thiserror::Error)]
pub enum FillError {
    /// Malformed configuration or column rule
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Foreign-key read against a missing, empty or exhausted cache key
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// Value generation failed, including unique-retry exhaustion
    #[error(transparent)]
    Generator(#[from] GeneratorError),

    /// The executor rejected a batch
    #[error(transparent)]
    Execution(#[from] ExecutionError),

    /// A batch task panicked or was cancelled
    #[error("Batch task for table '{table}' failed: {message}")]
    Task { table: String, message: String },
}
