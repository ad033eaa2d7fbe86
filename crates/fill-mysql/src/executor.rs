//! Batched INSERT execution against MySQL.

use crate::error::MySQLFillerError;
use async_trait::async_trait;
use fill_core::{DatabaseConfig, ExecutionError, Executor, InsertBatch};
use mysql_async::{prelude::*, Opts, OptsBuilder, Params, Pool, PoolConstraints, PoolOpts, Value};
use std::time::Duration;
use tracing::{debug, info};

/// Idle pooled connections are closed after this long.
pub const INACTIVE_CONNECTION_TTL: Duration = Duration::from_secs(10 * 60);

/// Build pool options from the `database` configuration.
pub fn build_opts(config: &DatabaseConfig) -> Result<Opts, MySQLFillerError> {
    let max = config.max_connections();
    let constraints = PoolConstraints::new(1, max).ok_or_else(|| {
        MySQLFillerError::Config(format!("invalid connection pool size: {max}"))
    })?;
    let pool_opts = PoolOpts::default()
        .with_constraints(constraints)
        .with_inactive_connection_ttl(INACTIVE_CONNECTION_TTL);

    let builder = OptsBuilder::default()
        .ip_or_hostname(config.host.clone())
        .tcp_port(config.port)
        .user(non_empty(&config.username))
        .pass(non_empty(&config.password))
        .db_name(non_empty(&config.name))
        .pool_opts(pool_opts);

    Ok(builder.into())
}

/// Connection target for logs, without the password.
pub fn connection_summary(config: &DatabaseConfig) -> String {
    let user = if config.username.is_empty() {
        String::new()
    } else if config.password.is_empty() {
        format!("{}@", config.username)
    } else {
        format!("{}:***@", config.username)
    };
    format!(
        "mysql://{user}{}:{}/{}",
        config.host, config.port, config.name
    )
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// [`Executor`] over a MySQL connection pool.
pub struct MySQLExecutor {
    pool: Pool,
}

impl MySQLExecutor {
    /// Create the pool and verify the server is reachable.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, MySQLFillerError> {
        info!("Connecting to {}", connection_summary(config));
        let pool = Pool::new(build_opts(config)?);

        // Test connection
        let mut conn = pool.get_conn().await?;
        conn.ping().await?;
        drop(conn);

        Ok(Self { pool })
    }

    /// Run one batch, returning the affected row count.
    pub async fn insert_batch(&self, batch: &InsertBatch) -> Result<u64, MySQLFillerError> {
        if batch.rows == 0 {
            return Ok(0);
        }

        let mut conn = self.pool.get_conn().await?;
        let params: Vec<Value> = batch.values.iter().map(|v| Value::from(v.as_str())).collect();

        conn.exec_drop(&batch.statement, Params::Positional(params))
            .await?;
        let affected = conn.affected_rows();

        debug!(
            "Inserted {} rows into '{}' ({} affected)",
            batch.rows, batch.table, affected
        );
        Ok(affected)
    }

    /// Close every pooled connection.
    pub async fn disconnect(self) -> Result<(), MySQLFillerError> {
        self.pool.disconnect().await?;
        Ok(())
    }
}

#[async_trait]
impl Executor for MySQLExecutor {
    async fn execute(&self, batch: &InsertBatch) -> Result<u64, ExecutionError> {
        self.insert_batch(batch)
            .await
            .map_err(|e| ExecutionError::new(batch.table.clone(), e))
    }
}
