//! db-filler: fill SQL databases with synthetic, referentially consistent
//! test data.
//!
//! A run reads an ordered list of tables with per-column rules, generates
//! rows for each table in parallel batches and inserts them. Columns declared
//! as foreign keys (`users->id`) take their values from what was generated
//! for the referenced column earlier in the run, either by random sampling or,
//! when marked `unique`, by pulling the referenced values one-to-one in
//! generation order.
//!
//! ```text
//! Filler ──► BatchBuilder (one per batch, concurrent)
//!               │            │
//!               ▼            ▼
//!        ReferenceCache   ValueProvider
//!               │
//!               ▼
//!           Executor (MySQL or dry-run)
//! ```

pub mod batch;
pub mod cache;
pub mod dry_run;
pub mod error;
pub mod fill;

pub use batch::{insert_statement, BatchBuilder, TablePlan};
pub use cache::{CacheError, ReferenceCache};
pub use dry_run::DryRunExecutor;
pub use error::FillError;
pub use fill::{batch_sizes, FillSummary, Filler, TableMetrics, DEFAULT_BATCH_SIZE};

// Re-export the workspace crates used in the public API
pub use fill_core;
pub use fill_generator;
