//! Table-by-table fill orchestration.
//!
//! A run has two passes. [`Filler::prepare`] parses every table's column
//! rules and registers every foreign-key target in the reference cache
//! before anything is generated. [`Filler::run`] then fills the tables in
//! configuration order. Within a table the rows are split into batches that
//! are generated and inserted concurrently; the next table only starts once
//! every batch has finished and the cache cursors have been rewound.

use crate::batch::{BatchBuilder, TablePlan};
use crate::cache::ReferenceCache;
use crate::error::FillError;
use fill_core::{ColumnKind, ConfigError, Executor, TableSpec};
use fill_generator::ValueProvider;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinSet;
use tracing::{debug, info};

/// Default number of rows per INSERT.
pub const DEFAULT_BATCH_SIZE: usize = 5_000;

/// Metrics for one filled table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableMetrics {
    pub table: String,
    pub rows_inserted: u64,
    pub batch_count: u64,
    pub duration: Duration,
}

impl TableMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        rate(self.rows_inserted, self.duration)
    }
}

/// Metrics for a whole run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FillSummary {
    pub tables: Vec<TableMetrics>,
    pub total_rows: u64,
    pub total_duration: Duration,
}

impl FillSummary {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        rate(self.total_rows, self.total_duration)
    }
}

fn rate(rows: u64, duration: Duration) -> f64 {
    if duration.as_secs_f64() > 0.0 {
        rows as f64 / duration.as_secs_f64()
    } else {
        0.0
    }
}

/// Split `count` rows into batches of at most `batch_size` rows.
pub fn batch_sizes(count: u64, batch_size: usize) -> Vec<usize> {
    let batch_size = batch_size.max(1) as u64;
    let mut sizes = Vec::with_capacity(count.div_ceil(batch_size) as usize);
    let mut remaining = count;
    while remaining > 0 {
        let size = remaining.min(batch_size);
        sizes.push(size as usize);
        remaining -= size;
    }
    sizes
}

/// Drives a fill run.
pub struct Filler {
    cache: Arc<ReferenceCache>,
    provider: Arc<dyn ValueProvider>,
    executor: Arc<dyn Executor>,
    batch_size: usize,
}

impl Filler {
    pub fn new(
        cache: Arc<ReferenceCache>,
        provider: Arc<dyn ValueProvider>,
        executor: Arc<dyn Executor>,
    ) -> Self {
        Self {
            cache,
            provider,
            executor,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Set the maximum number of rows per INSERT.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Get a reference to the reference cache.
    pub fn cache(&self) -> &ReferenceCache {
        &self.cache
    }

    /// Parse every table's rules and register every foreign-key target.
    ///
    /// Fails before any row is generated if a rule is malformed or names a
    /// generator the value provider does not know.
    pub fn prepare(&self, tables: &[TableSpec]) -> Result<Vec<TablePlan>, FillError> {
        let plans = tables
            .iter()
            .map(TablePlan::from_spec)
            .collect::<Result<Vec<_>, _>>()?;

        for plan in &plans {
            for descriptor in &plan.descriptors {
                if let ColumnKind::Generator(key) = &descriptor.kind {
                    if !self.provider.supports(key) {
                        return Err(ConfigError::InvalidRule {
                            table: plan.name.clone(),
                            column: descriptor.column.clone(),
                            reason: format!("unsupported generator '{key}'"),
                        }
                        .into());
                    }
                }
            }

            for target in plan.foreign_keys() {
                debug!("Registering foreign key target {}", target);
                self.cache.register(target);
            }
        }

        Ok(plans)
    }

    /// Prepare and fill every table in order.
    pub async fn run(&self, tables: &[TableSpec]) -> Result<FillSummary, FillError> {
        let plans = self.prepare(tables)?;
        self.fill_all(plans).await
    }

    /// Fill already-prepared tables in order.
    pub async fn fill_all(&self, plans: Vec<TablePlan>) -> Result<FillSummary, FillError> {
        let start = Instant::now();
        let mut summary = FillSummary::default();

        for plan in plans {
            let metrics = self.fill_table(Arc::new(plan)).await?;
            summary.total_rows += metrics.rows_inserted;
            summary.tables.push(metrics);
        }

        summary.total_duration = start.elapsed();
        Ok(summary)
    }

    /// Fill one table: run all its batches concurrently, wait for every one
    /// of them, then rewind the cache cursors.
    pub async fn fill_table(&self, plan: Arc<TablePlan>) -> Result<TableMetrics, FillError> {
        let start = Instant::now();
        let sizes = batch_sizes(plan.count, self.batch_size);

        info!(
            "Filling '{}' with {} rows in {} batches",
            plan.name,
            plan.count,
            sizes.len()
        );

        let mut tasks = JoinSet::new();
        for (index, rows) in sizes.iter().copied().enumerate() {
            let plan = Arc::clone(&plan);
            let cache = Arc::clone(&self.cache);
            let provider = Arc::clone(&self.provider);
            let executor = Arc::clone(&self.executor);

            tasks.spawn(async move {
                let batch = BatchBuilder::new(&plan, &cache, provider.as_ref()).build(rows)?;
                debug!(
                    "Batch {} of '{}' generated: {} rows, statement {} bytes",
                    index,
                    plan.name,
                    batch.rows,
                    batch.statement.len()
                );
                executor.execute(&batch).await?;
                Ok::<u64, FillError>(batch.rows as u64)
            });
        }

        let mut metrics = TableMetrics {
            table: plan.name.clone(),
            ..TableMetrics::default()
        };
        while let Some(joined) = tasks.join_next().await {
            let result = joined.map_err(|e| FillError::Task {
                table: plan.name.clone(),
                message: e.to_string(),
            });
            match result.and_then(|r| r) {
                Ok(rows) => {
                    metrics.rows_inserted += rows;
                    metrics.batch_count += 1;
                }
                Err(e) => {
                    tasks.abort_all();
                    // Wait for the cancelled batches so their handles are released.
                    while tasks.join_next().await.is_some() {}
                    return Err(e);
                }
            }
        }

        self.cache.reset_cursors();
        debug!("Reset reference cache cursors after '{}'", plan.name);

        metrics.duration = start.elapsed();
        info!(
            "'{}' fill complete: {} rows in {} batches, {:?} ({:.2} rows/sec)",
            plan.name,
            metrics.rows_inserted,
            metrics.batch_count,
            metrics.duration,
            metrics.rows_per_second()
        );
        Ok(metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use fill_core::{ColumnRef, ExecutionError, InsertBatch};
    use fill_generator::FakeValueProvider;
    use std::sync::Mutex;

    #[derive(Default)]
    struct CountingExecutor {
        batches: Mutex<Vec<usize>>,
    }

    #[async_trait]
    impl Executor for CountingExecutor {
        async fn execute(&self, batch: &InsertBatch) -> Result<u64, ExecutionError> {
            self.batches.lock().unwrap().push(batch.rows);
            Ok(batch.rows as u64)
        }
    }

    struct FailingExecutor;

    #[async_trait]
    impl Executor for FailingExecutor {
        async fn execute(&self, batch: &InsertBatch) -> Result<u64, ExecutionError> {
            Err(ExecutionError::new(batch.table.clone(), "table is read-only"))
        }
    }

    fn filler(executor: Arc<dyn Executor>) -> Filler {
        Filler::new(
            Arc::new(ReferenceCache::new()),
            Arc::new(FakeValueProvider::with_seed(42)),
            executor,
        )
    }

    #[test]
    fn test_batch_sizes() {
        assert_eq!(batch_sizes(0, 10), Vec::<usize>::new());
        assert_eq!(batch_sizes(10, 10), vec![10]);
        assert_eq!(batch_sizes(25, 10), vec![10, 10, 5]);
        assert_eq!(batch_sizes(3, 0), vec![1, 1, 1]);
        assert_eq!(batch_sizes(12_001, 5_000), vec![5_000, 5_000, 2_001]);
    }

    #[test]
    fn test_prepare_registers_foreign_key_targets() {
        let filler = filler(Arc::new(CountingExecutor::default()));
        let tables = vec![
            TableSpec::new("users", 5, [("code", "unique, ulid"), ("name", "person_name")]),
            TableSpec::new("orders", 5, [("user_code", "users->code")]),
        ];

        let plans = filler.prepare(&tables).unwrap();

        assert_eq!(plans.len(), 2);
        assert_eq!(filler.cache().keys(), vec![ColumnRef::new("users", "code")]);
        assert_eq!(filler.cache().len(&ColumnRef::new("users", "code")), Some(0));
    }

    #[test]
    fn test_prepare_rejects_unknown_generator() {
        let filler = filler(Arc::new(CountingExecutor::default()));
        let tables = vec![TableSpec::new("users", 5, [("name", "person_nme")])];

        let result = filler.prepare(&tables);

        match result {
            Err(FillError::Config(ConfigError::InvalidRule { table, column, .. })) => {
                assert_eq!(table, "users");
                assert_eq!(column, "name");
            }
            other => panic!("expected invalid rule, got {other:?}"),
        }
    }

    #[test]
    fn test_prepare_rejects_bad_rule_before_registering() {
        let filler = filler(Arc::new(CountingExecutor::default()));
        let tables = vec![
            TableSpec::new("orders", 5, [("user_code", "users->code")]),
            TableSpec::new("items", 5, [("order", "orders->id->x")]),
        ];

        assert!(matches!(filler.prepare(&tables), Err(FillError::Config(_))));
        assert!(filler.cache().keys().is_empty());
    }

    #[tokio::test]
    async fn test_fill_table_partitions_batches() {
        let executor = Arc::new(CountingExecutor::default());
        let filler = filler(executor.clone()).with_batch_size(4);
        let tables = vec![TableSpec::new("users", 10, [("name", "person_name")])];

        let summary = filler.run(&tables).await.unwrap();

        assert_eq!(summary.total_rows, 10);
        assert_eq!(summary.tables[0].batch_count, 3);
        let mut batches = executor.batches.lock().unwrap().clone();
        batches.sort();
        assert_eq!(batches, vec![2, 4, 4]);
    }

    #[tokio::test]
    async fn test_executor_failure_aborts_run() {
        let filler = filler(Arc::new(FailingExecutor)).with_batch_size(2);
        let tables = vec![TableSpec::new("users", 10, [("name", "person_name")])];

        let result = filler.run(&tables).await;

        assert!(matches!(result, Err(FillError::Execution(e)) if e.table == "users"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_failed_run_releases_executor_handles() {
        let executor: Arc<FailingExecutor> = Arc::new(FailingExecutor);
        let filler = filler(Arc::<FailingExecutor>::clone(&executor)).with_batch_size(1);
        let tables = vec![TableSpec::new("users", 64, [("name", "person_name")])];

        assert!(filler.run(&tables).await.is_err());

        // Only this test and the filler still hold the executor.
        assert_eq!(Arc::strong_count(&executor), 2);
        drop(filler);
        assert!(Arc::into_inner(executor).is_some());
    }

    #[tokio::test]
    async fn test_empty_table_still_resets_cursors() {
        let filler = filler(Arc::new(CountingExecutor::default()));
        let key = ColumnRef::new("users", "code");
        filler.cache().register(&key);
        filler.cache().append(&key, "a".to_string());
        filler.cache().pull_sequential(&key).unwrap();

        let tables = vec![TableSpec::new("audit", 0, [("note", "lorem_word")])];
        let summary = filler.run(&tables).await.unwrap();

        assert_eq!(summary.total_rows, 0);
        assert_eq!(filler.cache().pull_sequential(&key).unwrap(), "a");
    }
}
