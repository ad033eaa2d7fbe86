//! Row and batch generation for one table.

use crate::cache::ReferenceCache;
use crate::error::FillError;
use fill_core::{ColumnDescriptor, ColumnKind, ColumnRef, ConfigError, InsertBatch, TableSpec};
use fill_generator::ValueProvider;
use rand::Rng;

/// A table whose column rules have been parsed, ready to be filled.
#[derive(Debug, Clone, PartialEq)]
pub struct TablePlan {
    pub name: String,
    pub count: u64,
    /// Sorted by column name.
    pub descriptors: Vec<ColumnDescriptor>,
}

impl TablePlan {
    /// Parse the column rules of `spec`.
    pub fn from_spec(spec: &TableSpec) -> Result<Self, ConfigError> {
        let mut descriptors = spec.descriptors()?;
        descriptors.sort_by(|a, b| a.column.cmp(&b.column));
        Ok(Self {
            name: spec.name.clone(),
            count: spec.count,
            descriptors,
        })
    }

    /// Column names in statement order.
    pub fn columns(&self) -> Vec<String> {
        self.descriptors.iter().map(|d| d.column.clone()).collect()
    }

    /// Foreign-key targets declared by this table.
    pub fn foreign_keys(&self) -> impl Iterator<Item = &ColumnRef> {
        self.descriptors.iter().filter_map(ColumnDescriptor::foreign_key)
    }
}

/// Quote a MySQL identifier.
pub fn quote_identifier(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

/// Build `INSERT INTO t (c1, c2) VALUES (?, ?), (?, ?)` for `rows` rows.
pub fn insert_statement(table: &str, columns: &[String], rows: usize) -> String {
    let column_list = columns
        .iter()
        .map(|c| quote_identifier(c))
        .collect::<Vec<_>>()
        .join(", ");
    let row_template = format!("({})", vec!["?"; columns.len()].join(", "));
    let rows_template = vec![row_template.as_str(); rows].join(", ");

    format!(
        "INSERT INTO {} ({}) VALUES {}",
        quote_identifier(table),
        column_list,
        rows_template
    )
}

/// A descriptor plus what the builder needs to know about its cache role.
struct ResolvedColumn<'a> {
    descriptor: &'a ColumnDescriptor,
    /// `(table, column)` identity of this column.
    identity: ColumnRef,
    /// Whether generated values must be fed back into the cache.
    cached: bool,
}

/// Produces insert batches for one table.
pub struct BatchBuilder<'a> {
    plan: &'a TablePlan,
    cache: &'a ReferenceCache,
    provider: &'a dyn ValueProvider,
}

impl<'a> BatchBuilder<'a> {
    pub fn new(
        plan: &'a TablePlan,
        cache: &'a ReferenceCache,
        provider: &'a dyn ValueProvider,
    ) -> Self {
        Self {
            plan,
            cache,
            provider,
        }
    }

    /// Generate `rows` rows and the statement that inserts them.
    ///
    /// Values are laid out row-major in column order. Every value of a
    /// column that some table references is appended to the cache as soon as
    /// it is produced.
    pub fn build(&self, rows: usize) -> Result<InsertBatch, FillError> {
        let columns: Vec<ResolvedColumn<'_>> = self
            .plan
            .descriptors
            .iter()
            .map(|descriptor| {
                let identity = ColumnRef::new(&self.plan.name, &descriptor.column);
                let cached = descriptor.is_source() && self.cache.exists(&identity);
                ResolvedColumn {
                    descriptor,
                    identity,
                    cached,
                }
            })
            .collect();

        let mut values = Vec::with_capacity(rows * columns.len());
        for _ in 0..rows {
            for column in &columns {
                let value = self.resolve(column)?;
                if column.cached {
                    self.cache.append(&column.identity, value.clone());
                }
                values.push(value);
            }
        }

        let names = self.plan.columns();
        Ok(InsertBatch {
            table: self.plan.name.clone(),
            statement: insert_statement(&self.plan.name, &names, rows),
            columns: names,
            values,
            rows,
        })
    }

    fn resolve(&self, column: &ResolvedColumn<'_>) -> Result<String, FillError> {
        let descriptor = column.descriptor;
        let value = match &descriptor.kind {
            ColumnKind::OneOf(options) => {
                options[rand::rng().random_range(0..options.len())].clone()
            }
            ColumnKind::ForeignKey(target) if descriptor.unique => {
                self.cache.pull_sequential(target)?
            }
            ColumnKind::ForeignKey(target) => self.cache.sample_random(target)?,
            ColumnKind::Generator(key) if descriptor.unique => {
                self.provider.generate_unique(&column.identity, key)?
            }
            ColumnKind::Generator(key) => self.provider.generate(key)?,
        };
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheError;
    use fill_generator::FakeValueProvider;

    fn plan(name: &str, count: u64, columns: &[(&str, &str)]) -> TablePlan {
        TablePlan::from_spec(&TableSpec::new(name, count, columns.iter().copied())).unwrap()
    }

    #[test]
    fn test_insert_statement() {
        let columns = vec!["id".to_string(), "name".to_string()];
        assert_eq!(
            insert_statement("users", &columns, 2),
            "INSERT INTO `users` (`id`, `name`) VALUES (?, ?), (?, ?)"
        );
    }

    #[test]
    fn test_quote_identifier_escapes_backticks() {
        assert_eq!(quote_identifier("we`ird"), "`we``ird`");
    }

    #[test]
    fn test_build_one_of_and_generator() {
        let plan = plan("users", 3, &[("name", "person_name"), ("id", "oneof:a,b")]);
        let cache = ReferenceCache::new();
        let provider = FakeValueProvider::with_seed(42);

        let batch = BatchBuilder::new(&plan, &cache, &provider).build(3).unwrap();

        assert_eq!(batch.columns, vec!["id", "name"]);
        assert!(batch.statement.starts_with("INSERT INTO `users` (`id`, `name`) VALUES"));
        assert_eq!(batch.statement.matches("(?, ?)").count(), 3);
        assert_eq!(batch.statement.matches('?').count(), 6);
        assert_eq!(batch.values.len(), 6);
        assert_eq!(batch.rows, 3);
        for id in batch.column_values("id").unwrap() {
            assert!(id == "a" || id == "b");
        }
    }

    #[test]
    fn test_source_values_are_cached_only_when_registered() {
        let plan = plan("users", 4, &[("code", "ulid"), ("name", "person_name")]);
        let cache = ReferenceCache::new();
        let code = ColumnRef::new("users", "code");
        cache.register(&code);
        let provider = FakeValueProvider::with_seed(42);

        let batch = BatchBuilder::new(&plan, &cache, &provider).build(4).unwrap();

        let generated: Vec<String> = batch
            .column_values("code")
            .unwrap()
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(cache.values(&code), Some(generated));
        assert!(!cache.exists(&ColumnRef::new("users", "name")));
    }

    #[test]
    fn test_foreign_key_unique_pulls_in_order() {
        let cache = ReferenceCache::new();
        let target = ColumnRef::new("users", "code");
        cache.register(&target);
        for value in ["u1", "u2", "u3"] {
            cache.append(&target, value.to_string());
        }
        let plan = plan("orders", 3, &[("user_code", "unique, users->code")]);
        let provider = FakeValueProvider::with_seed(42);

        let batch = BatchBuilder::new(&plan, &cache, &provider).build(3).unwrap();

        assert_eq!(batch.values, vec!["u1", "u2", "u3"]);
    }

    #[test]
    fn test_foreign_key_random_samples_cached_values() {
        let cache = ReferenceCache::new();
        let target = ColumnRef::new("users", "code");
        cache.register(&target);
        cache.append(&target, "u1".to_string());
        cache.append(&target, "u2".to_string());
        let plan = plan("orders", 20, &[("user_code", "users->code")]);
        let provider = FakeValueProvider::with_seed(42);

        let batch = BatchBuilder::new(&plan, &cache, &provider).build(20).unwrap();

        assert!(batch.values.iter().all(|v| v == "u1" || v == "u2"));
    }

    #[test]
    fn test_foreign_key_to_empty_key_fails() {
        let cache = ReferenceCache::new();
        cache.register(&ColumnRef::new("users", "code"));
        let plan = plan("orders", 1, &[("user_code", "users->code")]);
        let provider = FakeValueProvider::with_seed(42);

        let result = BatchBuilder::new(&plan, &cache, &provider).build(1);

        assert!(matches!(
            result,
            Err(FillError::Cache(CacheError::EmptyKey(_)))
        ));
    }

    #[test]
    fn test_foreign_key_columns_are_not_cached() {
        let cache = ReferenceCache::new();
        let target = ColumnRef::new("users", "code");
        cache.register(&target);
        cache.append(&target, "u1".to_string());
        // Register the dependent column too; it must still not be fed back.
        let dependent = ColumnRef::new("orders", "user_code");
        cache.register(&dependent);
        let plan = plan("orders", 2, &[("user_code", "users->code")]);
        let provider = FakeValueProvider::with_seed(42);

        BatchBuilder::new(&plan, &cache, &provider).build(2).unwrap();

        assert_eq!(cache.len(&dependent), Some(0));
    }

    #[test]
    fn test_unique_generator_values_distinct() {
        let plan = plan("users", 50, &[("code", "unique, uuid")]);
        let cache = ReferenceCache::new();
        let provider = FakeValueProvider::with_seed(42);

        let batch = BatchBuilder::new(&plan, &cache, &provider).build(50).unwrap();

        let distinct: std::collections::HashSet<&String> = batch.values.iter().collect();
        assert_eq!(distinct.len(), 50);
    }
}
