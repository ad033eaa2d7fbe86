//! Value provider trait and the `fake`-backed implementation.

use crate::generators;
use fill_core::ColumnRef;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Default number of draws before unique generation gives up.
pub const DEFAULT_MAX_UNIQUE_ATTEMPTS: usize = 1000;

/// Error type for value generation.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// The key is not in the catalog
    #[error("Unsupported generator key: {0}")]
    UnsupportedKey(String),

    /// Every draw within the budget repeated an earlier value
    #[error(
        "Unable to generate a unique value for {column} with generator '{key}' after {attempts} attempts"
    )]
    UniquenessExhausted {
        column: ColumnRef,
        key: String,
        attempts: usize,
    },
}

/// Source of synthetic values, selected by generator key.
pub trait ValueProvider: Send + Sync {
    /// Whether `key` names a generator this provider knows.
    fn supports(&self, key: &str) -> bool;

    /// Produce one value for `key`.
    fn generate(&self, key: &str) -> Result<String, GeneratorError>;

    /// Produce a value for `key` that has not been handed out for `column` before.
    fn generate_unique(&self, column: &ColumnRef, key: &str) -> Result<String, GeneratorError>;
}

/// [`ValueProvider`] over the built-in generator catalog.
///
/// The RNG is not shared between threads without its lock. Unique generation
/// takes the registry lock and then draws through [`Self::generate`], so the
/// two locks are always acquired in the same order.
pub struct FakeValueProvider {
    rng: Mutex<StdRng>,
    seen: Mutex<HashMap<ColumnRef, HashSet<String>>>,
    max_unique_attempts: usize,
}

impl FakeValueProvider {
    /// Create a provider seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Create a provider whose draws are reproducible.
    ///
    /// Time-based keys still depend on the current clock.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
            seen: Mutex::new(HashMap::new()),
            max_unique_attempts: DEFAULT_MAX_UNIQUE_ATTEMPTS,
        }
    }

    /// Set the draw budget of unique generation.
    pub fn with_max_unique_attempts(mut self, attempts: usize) -> Self {
        self.max_unique_attempts = attempts.max(1);
        self
    }

    /// Number of distinct values handed out for `column` so far.
    pub fn unique_count(&self, column: &ColumnRef) -> usize {
        lock(&self.seen).get(column).map_or(0, HashSet::len)
    }
}

impl Default for FakeValueProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueProvider for FakeValueProvider {
    fn supports(&self, key: &str) -> bool {
        generators::is_supported(key)
    }

    fn generate(&self, key: &str) -> Result<String, GeneratorError> {
        let mut rng = lock(&self.rng);
        generators::generate(key, &mut *rng)
            .ok_or_else(|| GeneratorError::UnsupportedKey(key.to_string()))
    }

    fn generate_unique(&self, column: &ColumnRef, key: &str) -> Result<String, GeneratorError> {
        let mut seen = lock(&self.seen);
        let values = seen.entry(column.clone()).or_default();

        for _ in 0..self.max_unique_attempts {
            let value = self.generate(key)?;
            if values.insert(value.clone()) {
                return Ok(value);
            }
        }

        Err(GeneratorError::UniquenessExhausted {
            column: column.clone(),
            key: key.to_string(),
            attempts: self.max_unique_attempts,
        })
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
