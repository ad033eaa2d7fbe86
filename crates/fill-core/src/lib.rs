//! Core types for db-filler.
//!
//! This crate provides the foundational types shared by the filler
//! pipeline:
//!
//! - [`Config`] - The configuration document (database + ordered tables)
//! - [`ColumnDescriptor`] - A parsed column rule
//! - [`ColumnRef`] - A `(table, column)` identity used for foreign keys and caching
//! - [`Executor`] - The boundary to whatever runs the generated INSERTs
//!
//! # Architecture
//!
//! ```text
//! fill-core (this crate)
//!    │
//!    ├─── fill-generator  (value provider, depends on ColumnRef)
//!    ├─── fill-mysql      (implements Executor for MySQL)
//!    └─── db-filler       (reference cache, batch builder, orchestrator)
//! ```
//!
//! # Example
//!
//! ```rust
//! use fill_core::{parse_column_rule, ColumnKind};
//!
//! let descriptor = parse_column_rule("orders", "user_id", "unique, users->id").unwrap();
//! assert!(descriptor.unique);
//! assert!(matches!(descriptor.kind, ColumnKind::ForeignKey(_)));
//! ```

pub mod config;
pub mod descriptor;
pub mod executor;

// Re-exports for convenience
pub use config::{Config, ConfigError, DatabaseConfig, TableSpec};
pub use descriptor::{parse_column_rule, ColumnDescriptor, ColumnKind, ColumnRef};
pub use executor::{ExecutionError, Executor, InsertBatch};
