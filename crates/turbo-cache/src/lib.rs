//! Durable key-value storage layer for TurboCommerce clients.
//!
//! Provides a small, ergonomic API for keeping client state in a key-value
//! store with automatic JSON serialization. Backends follow browser local
//! storage semantics: string keys, string values, whole-value overwrites.
//!
//! # Example
//!
//! ```rust
//! use turbo_cache::Cache;
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Prefs {
//!     theme: String,
//! }
//!
//! let cache = Cache::in_memory();
//!
//! // Store a value
//! cache.set("prefs", &Prefs { theme: "dark".into() }).unwrap();
//!
//! // Retrieve a value
//! let prefs: Option<Prefs> = cache.get("prefs").unwrap();
//! assert_eq!(prefs.unwrap().theme, "dark");
//!
//! // Delete a value
//! cache.delete("prefs").unwrap();
//! ```

mod error;
mod file;
mod kv;
mod memory;

pub use error::CacheError;
pub use file::FileBackend;
pub use kv::{Cache, KvBackend};
pub use memory::MemoryBackend;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileBackend, KvBackend, MemoryBackend};
}
