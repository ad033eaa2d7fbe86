//! Error types for the MySQL executor.

use thiserror::Error;

/// Errors that can occur while talking to MySQL.
#[derive(Error, Debug)]
pub enum MySQLFillerError {
    /// MySQL connection or query error.
    #[error("MySQL error: {0}")]
    MySQL(#[from] mysql_async::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}
