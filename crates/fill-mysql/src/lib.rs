//! MySQL executor for db-filler.
//!
//! Runs the multi-row INSERT batches produced by the filler against a
//! `mysql_async` connection pool sized from the `database` section of the
//! configuration.

pub mod error;
pub mod executor;

pub use error::MySQLFillerError;
pub use executor::{build_opts, connection_summary, MySQLExecutor};
