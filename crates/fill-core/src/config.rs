//! Configuration document for a fill run.
//!
//! A configuration names the target database and lists the tables to fill,
//! in dependency order (referenced tables before the tables that reference
//! them). It is read once at startup, from JSON or YAML.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

/// Default MySQL port.
pub const DEFAULT_PORT: u16 = 3306;

/// Default upper bound of pooled connections.
pub const DEFAULT_MAX_CONNECTIONS: usize = 10;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for configuration loading and column-rule parsing.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading the configuration file
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing JSON
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A column rule could not be turned into a descriptor
    #[error("Invalid rule for column '{column}' in table '{table}': {reason}")]
    InvalidRule {
        table: String,
        column: String,
        reason: String,
    },

    /// A table definition is unusable as a whole
    #[error("Invalid table '{table}': {reason}")]
    InvalidTable { table: String, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid_rule(table: &str, column: &str, reason: impl Into<String>) -> Self {
        Self::InvalidRule {
            table: table.to_string(),
            column: column.to_string(),
            reason: reason.into(),
        }
    }
}

// ============================================================================
// Document
// ============================================================================

/// Database connection parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,

    #[serde(default = "default_host")]
    pub host: String,

    /// Accepts both `3306` and `"3306"`.
    #[serde(default = "default_port", deserialize_with = "deserialize_port")]
    pub port: u16,

    /// Database (schema) name.
    #[serde(default)]
    pub name: String,

    /// Maximum number of pooled connections.
    #[serde(default)]
    pub max_conn: usize,
}

impl DatabaseConfig {
    /// Effective pool size; an unset or zero `max_conn` falls back to the default.
    pub fn max_connections(&self) -> usize {
        if self.max_conn == 0 {
            DEFAULT_MAX_CONNECTIONS
        } else {
            self.max_conn
        }
    }

    /// Copy of this configuration safe to print.
    pub fn redacted(&self) -> Self {
        let mut redacted = self.clone();
        if !redacted.password.is_empty() {
            redacted.password = "***".to_string();
        }
        redacted
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            host: default_host(),
            port: DEFAULT_PORT,
            name: String::new(),
            max_conn: 0,
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn deserialize_port<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Port {
        Number(u16),
        Text(String),
    }

    match Port::deserialize(deserializer)? {
        Port::Number(port) => Ok(port),
        Port::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid port: {text:?}"))),
    }
}

/// One table to fill.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableSpec {
    /// Table name
    pub name: String,

    /// Number of rows to generate
    #[serde(default)]
    pub count: u64,

    /// Column name → rule string. Iterates in lexicographic column order.
    #[serde(default)]
    pub schema: BTreeMap<String, String>,
}

impl TableSpec {
    /// Create a table spec from `(column, rule)` pairs.
    pub fn new<I, C, R>(name: impl Into<String>, count: u64, columns: I) -> Self
    where
        I: IntoIterator<Item = (C, R)>,
        C: Into<String>,
        R: Into<String>,
    {
        Self {
            name: name.into(),
            count,
            schema: columns
                .into_iter()
                .map(|(c, r)| (c.into(), r.into()))
                .collect(),
        }
    }

    /// Column names in lexicographic order.
    pub fn column_names(&self) -> Vec<&str> {
        self.schema.keys().map(|c| c.as_str()).collect()
    }
}

/// The full configuration document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Database connection parameters
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Tables in fill order
    #[serde(default)]
    pub tables: Vec<TableSpec>,
}

impl Config {
    /// Load a configuration file. `.yaml`/`.yml` files are read as YAML,
    /// anything else as JSON.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(&content),
            _ => Self::from_json(&content),
        }
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for table in &self.tables {
            if table.name.trim().is_empty() {
                return Err(ConfigError::InvalidTable {
                    table: table.name.clone(),
                    reason: "table name is empty".to_string(),
                });
            }
            if table.schema.is_empty() {
                return Err(ConfigError::InvalidTable {
                    table: table.name.clone(),
                    reason: "schema has no columns".to_string(),
                });
            }
            if !seen.insert(table.name.as_str()) {
                return Err(ConfigError::InvalidTable {
                    table: table.name.clone(),
                    reason: "table is listed more than once".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Get all table names in fill order.
    pub fn table_names(&self) -> Vec<&str> {
        self.tables.iter().map(|t| t.name.as_str()).collect()
    }

    /// Total number of rows across all tables.
    pub fn total_rows(&self) -> u64 {
        self.tables.iter().map(|t| t.count).sum()
    }

    /// Copy of this configuration with credentials masked, for logging.
    pub fn redacted(&self) -> Self {
        Self {
            database: self.database.redacted(),
            tables: self.tables.clone(),
        }
    }
}
