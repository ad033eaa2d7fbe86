//! Executor that writes nothing.

use async_trait::async_trait;
use fill_core::{ExecutionError, Executor, InsertBatch};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

/// Accepts every batch and only logs it. Used by `--dry-run`.
#[derive(Debug, Default)]
pub struct DryRunExecutor {
    rows: AtomicU64,
    batches: AtomicU64,
}

impl DryRunExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows accepted so far.
    pub fn rows(&self) -> u64 {
        self.rows.load(Ordering::Relaxed)
    }

    /// Batches accepted so far.
    pub fn batches(&self) -> u64 {
        self.batches.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl Executor for DryRunExecutor {
    async fn execute(&self, batch: &InsertBatch) -> Result<u64, ExecutionError> {
        info!(
            "[DRY-RUN] Would insert {} rows into '{}' ({} parameters)",
            batch.rows,
            batch.table,
            batch.values.len()
        );
        self.rows.fetch_add(batch.rows as u64, Ordering::Relaxed);
        self.batches.fetch_add(1, Ordering::Relaxed);
        Ok(batch.rows as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_counts_batches() {
        let executor = DryRunExecutor::new();
        let batch = InsertBatch {
            table: "users".to_string(),
            columns: vec!["id".to_string()],
            statement: "INSERT INTO `users` (`id`) VALUES (?), (?)".to_string(),
            values: vec!["1".to_string(), "2".to_string()],
            rows: 2,
        };

        assert_eq!(executor.execute(&batch).await.unwrap(), 2);
        assert_eq!(executor.execute(&batch).await.unwrap(), 2);
        assert_eq!(executor.rows(), 4);
        assert_eq!(executor.batches(), 2);
    }
}
