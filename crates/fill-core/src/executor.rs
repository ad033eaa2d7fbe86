//! Boundary to the component that runs generated INSERT statements.

use async_trait::async_trait;

/// One parameterized multi-row INSERT, ready to execute.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertBatch {
    /// Target table
    pub table: String,
    /// Column names in statement order
    pub columns: Vec<String>,
    /// Statement text with `rows × columns.len()` positional placeholders
    pub statement: String,
    /// Row-major flattened parameters
    pub values: Vec<String>,
    /// Number of rows in this batch
    pub rows: usize,
}

impl InsertBatch {
    /// Iterate over the rows of this batch as slices of values.
    pub fn row_values(&self) -> impl Iterator<Item = &[String]> {
        self.values.chunks(self.columns.len().max(1))
    }

    /// Values of one column, in row order.
    pub fn column_values(&self, column: &str) -> Option<Vec<&str>> {
        let index = self.columns.iter().position(|c| c == column)?;
        Some(
            self.row_values()
                .filter_map(|row| row.get(index).map(|v| v.as_str()))
                .collect(),
        )
    }
}

/// Error returned by an [`Executor`].
#[derive(Debug, thiserror::Error)]
#[error("Failed to insert batch into '{table}': {source}")]
pub struct ExecutionError {
    pub table: String,
    #[source]
    pub source: Box<dyn std::error::Error + Send + Sync>,
}

impl ExecutionError {
    pub fn new(
        table: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            table: table.into(),
            source: source.into(),
        }
    }
}

/// Executes insert batches against a database.
#[async_trait]
pub trait Executor: Send + Sync {
    /// Run one batch and return the number of rows written.
    async fn execute(&self, batch: &InsertBatch) -> Result<u64, ExecutionError>;
}
