//! # Storage Layer
//!
//! Storage is split in two:
//!
//! - [`StorageBackend`]: raw key/value blob I/O. It knows nothing about
//!   products, only how to read and write bytes under a named slot.
//! - [`product_store::ProductStore`]: the authoritative product list. It
//!   validates, keeps the invariants and writes the whole list back to
//!   its slot after every mutation.
//!
//! ## Implementations
//!
//! - [`fs::FsBackend`]: one JSON file per slot inside a data directory
//! - [`memory::MemBackend`]: in-memory slots for testing
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── inventory-products.json   # JSON array of {id, name, quantity}
//! └── config.json               # StockConfig
//! ```
//!
//! The array order is the insertion order. The live slot carries no
//! version; the export [`snapshot::Snapshot`] is the versioned format.

use crate::error::PersistenceError;

pub mod fs;
pub mod memory;
pub mod product_store;
pub mod snapshot;

pub use product_store::ProductStore;

/// Default slot name for the product list.
pub const DEFAULT_STORAGE_KEY: &str = "inventory-products";

/// Abstract interface for raw blob storage.
///
/// Reads are allowed to fail; the product store treats an unreadable
/// slot as empty. Writes must replace the previous value entirely.
pub trait StorageBackend {
    /// Read the blob stored under `key`, `Ok(None)` if the slot is empty.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, PersistenceError>;

    /// Replace the blob stored under `key`.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), PersistenceError>;
}
