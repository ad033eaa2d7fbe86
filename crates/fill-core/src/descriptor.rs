//! Column rules and their parsed descriptors.
//!
//! A rule string is either an enumerated set:
//!
//! ```text
//! oneof: admin, member, guest
//! ```
//!
//! or a comma-separated combination of a generator key, a foreign key
//! (`table->column`) and the `unique` flag:
//!
//! ```text
//! unique, net_email
//! users->email
//! unique, users->email
//! ```

use crate::config::{ConfigError, TableSpec};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker that introduces an enumerated value set.
pub const ONE_OF_MARKER: &str = "oneof:";

/// Separator between table and column in a foreign-key token.
pub const FOREIGN_KEY_SEPARATOR: &str = "->";

/// Flag token for unique generation / sequential foreign-key pull.
pub const UNIQUE_FLAG: &str = "unique";

/// A `(table, column)` pair.
///
/// Used as the target of a foreign key, as the key of cached source values
/// and as the scope of unique generation. Equal pairs always hash equal, so
/// identical references share one cache entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ColumnRef {
    pub table: String,
    pub column: String,
}

impl ColumnRef {
    pub fn new(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            column: column.into(),
        }
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.table, FOREIGN_KEY_SEPARATOR, self.column)
    }
}

/// How a column gets its values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnKind {
    /// Pick uniformly from a closed list of literals.
    OneOf(Vec<String>),
    /// Ask the value provider for the given key.
    Generator(String),
    /// Read values previously generated for another table's column.
    ForeignKey(ColumnRef),
}

/// Parsed rule for one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub column: String,
    pub kind: ColumnKind,
    /// Retry-until-distinct for generators, sequential pull for foreign keys.
    pub unique: bool,
}

impl ColumnDescriptor {
    /// The foreign-key target, if this column is a foreign key.
    pub fn foreign_key(&self) -> Option<&ColumnRef> {
        match &self.kind {
            ColumnKind::ForeignKey(target) => Some(target),
            _ => None,
        }
    }

    /// The value-provider key, if this column is generated.
    pub fn generator_key(&self) -> Option<&str> {
        match &self.kind {
            ColumnKind::Generator(key) => Some(key),
            _ => None,
        }
    }

    /// Whether this column produces values that other tables may reference.
    pub fn is_source(&self) -> bool {
        self.foreign_key().is_none()
    }
}

/// Parse the rule string of `table.column` into a descriptor.
pub fn parse_column_rule(
    table: &str,
    column: &str,
    rule: &str,
) -> Result<ColumnDescriptor, ConfigError> {
    if rule.contains(ONE_OF_MARKER) {
        let values: Vec<String> = rule
            .replace(ONE_OF_MARKER, "")
            .split(',')
            .map(|v| v.trim().to_string())
            .collect();

        if values.iter().any(|v| v.is_empty()) {
            return Err(ConfigError::invalid_rule(
                table,
                column,
                format!("'{ONE_OF_MARKER}' needs a non-empty, comma-separated list of values"),
            ));
        }

        return Ok(ColumnDescriptor {
            column: column.to_string(),
            kind: ColumnKind::OneOf(values),
            unique: false,
        });
    }

    let mut unique = false;
    let mut generator: Option<String> = None;
    let mut foreign_key: Option<ColumnRef> = None;

    for token in rule.split(',').map(str::trim) {
        if token == UNIQUE_FLAG {
            unique = true;
        } else if token.contains(FOREIGN_KEY_SEPARATOR) {
            let parts: Vec<&str> = token.split(FOREIGN_KEY_SEPARATOR).map(str::trim).collect();
            match parts.as_slice() {
                [ref_table, ref_column] if !ref_table.is_empty() && !ref_column.is_empty() => {
                    foreign_key = Some(ColumnRef::new(*ref_table, *ref_column));
                }
                _ => {
                    return Err(ConfigError::invalid_rule(
                        table,
                        column,
                        format!("invalid foreign key definition '{token}', expected 'table->column'"),
                    ));
                }
            }
        } else if !token.is_empty() {
            generator = Some(token.to_string());
        }
    }

    let kind = match (foreign_key, generator) {
        (Some(target), None) => ColumnKind::ForeignKey(target),
        (None, Some(key)) => ColumnKind::Generator(key),
        (Some(target), Some(key)) => {
            return Err(ConfigError::invalid_rule(
                table,
                column,
                format!("foreign key '{target}' cannot be combined with generator '{key}'"),
            ));
        }
        (None, None) => {
            return Err(ConfigError::invalid_rule(
                table,
                column,
                "rule names neither a generator nor a foreign key",
            ));
        }
    };

    Ok(ColumnDescriptor {
        column: column.to_string(),
        kind,
        unique,
    })
}

impl TableSpec {
    /// Parse every column rule, in lexicographic column order.
    pub fn descriptors(&self) -> Result<Vec<ColumnDescriptor>, ConfigError> {
        self.schema
            .iter()
            .map(|(column, rule)| parse_column_rule(&self.name, column, rule))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_of_values_are_trimmed_in_order() {
        let descriptor = parse_column_rule("users", "role", "oneof: admin , member,guest ").unwrap();
        assert_eq!(
            descriptor.kind,
            ColumnKind::OneOf(vec![
                "admin".to_string(),
                "member".to_string(),
                "guest".to_string()
            ])
        );
        assert!(!descriptor.unique);
    }

    #[test]
    fn test_one_of_single_value() {
        let descriptor = parse_column_rule("users", "role", "oneof:admin").unwrap();
        assert_eq!(descriptor.kind, ColumnKind::OneOf(vec!["admin".to_string()]));
    }

    #[test]
    fn test_empty_one_of_rejected() {
        for rule in ["oneof:", "oneof: ", "oneof:a,,b", "oneof:a,"] {
            let err = parse_column_rule("users", "role", rule).unwrap_err();
            match err {
                ConfigError::InvalidRule { table, column, .. } => {
                    assert_eq!(table, "users");
                    assert_eq!(column, "role");
                }
                other => panic!("unexpected error for {rule:?}: {other:?}"),
            }
        }
    }

    #[test]
    fn test_generator_key() {
        let descriptor = parse_column_rule("users", "name", "person_name").unwrap();
        assert_eq!(descriptor.generator_key(), Some("person_name"));
        assert!(!descriptor.unique);
        assert!(descriptor.is_source());
    }

    #[test]
    fn test_unique_generator() {
        let descriptor = parse_column_rule("users", "email", " unique ,net_email").unwrap();
        assert_eq!(descriptor.generator_key(), Some("net_email"));
        assert!(descriptor.unique);
    }

    #[test]
    fn test_last_generator_key_wins() {
        let descriptor = parse_column_rule("users", "name", "person_first_name, person_name").unwrap();
        assert_eq!(descriptor.generator_key(), Some("person_name"));
    }

    #[test]
    fn test_foreign_key() {
        let descriptor = parse_column_rule("orders", "user_id", "users->id").unwrap();
        assert_eq!(descriptor.foreign_key(), Some(&ColumnRef::new("users", "id")));
        assert!(!descriptor.unique);
        assert!(!descriptor.is_source());
    }

    #[test]
    fn test_unique_foreign_key() {
        let descriptor = parse_column_rule("orders", "user_id", "unique,users->id").unwrap();
        assert_eq!(descriptor.foreign_key(), Some(&ColumnRef::new("users", "id")));
        assert!(descriptor.unique);
    }

    #[test]
    fn test_foreign_key_arity() {
        for rule in ["a->b->c", "->b", "a->", "->"] {
            let result = parse_column_rule("orders", "user_id", rule);
            assert!(
                matches!(result, Err(ConfigError::InvalidRule { .. })),
                "expected rule {rule:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_foreign_key_with_generator_rejected() {
        let result = parse_column_rule("orders", "user_id", "users->id, uuid");
        assert!(matches!(result, Err(ConfigError::InvalidRule { .. })));
    }

    #[test]
    fn test_rule_without_kind_rejected() {
        for rule in ["", "unique", " , "] {
            let result = parse_column_rule("orders", "x", rule);
            assert!(matches!(result, Err(ConfigError::InvalidRule { .. })));
        }
    }

    #[test]
    fn test_column_ref_display() {
        assert_eq!(ColumnRef::new("users", "id").to_string(), "users->id");
    }

    #[test]
    fn test_table_descriptors_sorted() {
        let table = TableSpec::new(
            "users",
            3,
            [("name", "person_name"), ("id", "oneof:a,b"), ("code", "ulid")],
        );
        let columns: Vec<String> = table
            .descriptors()
            .unwrap()
            .into_iter()
            .map(|d| d.column)
            .collect();
        assert_eq!(columns, vec!["code", "id", "name"]);
    }
}
