//! Synthetic value provider for db-filler.
//!
//! This crate provides the [`ValueProvider`] boundary and its default
//! implementation, [`FakeValueProvider`], which maps generator keys from
//! column rules (`person_name`, `net_email`, `ulid`, ...) to realistic
//! values.
//!
//! # Architecture
//!
//! ```text
//! column rule "unique, net_email"
//!        │
//!        ▼
//! ┌──────────────────────┐
//! │  FakeValueProvider   │
//! │                      │
//! │  - seen   (Mutex)    │  unique registry, locked first
//! │  - rng    (Mutex)    │  generator RNG, locked second
//! └──────────┬───────────┘
//!            │
//!            ▼
//!     generators::generate(key, rng)
//! ```
//!
//! # Example
//!
//! ```rust
//! use fill_core::ColumnRef;
//! use fill_generator::{FakeValueProvider, ValueProvider};
//!
//! let provider = FakeValueProvider::new();
//! let name = provider.generate("person_name").unwrap();
//! let code = provider
//!     .generate_unique(&ColumnRef::new("users", "code"), "ulid")
//!     .unwrap();
//! assert!(!name.is_empty());
//! assert_eq!(code.len(), 26);
//! ```

pub mod generators;
pub mod provider;

// Re-exports for convenience
pub use provider::{FakeValueProvider, GeneratorError, ValueProvider, DEFAULT_MAX_UNIQUE_ATTEMPTS};
