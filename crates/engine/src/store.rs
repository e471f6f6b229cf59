//! Record store abstraction: keyed persistence for the engine collections.
//!
//! The engine persists three independent collections (accounts, the current
//! session pointer, ledger entries) as opaque JSON payloads keyed by
//! [`Collection`]. Implementations carry no business logic; typed
//! (de)serialization happens in the engine.

use core::fmt;

use thiserror::Error;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

mod json_file;
mod memory;

/// The collections the engine persists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Collection {
    Accounts,
    Session,
    Entries,
}

impl Collection {
    /// Stable file name used by file-backed stores.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Collection::Accounts => "accounts.json",
            Collection::Session => "session.json",
            Collection::Entries => "entries.json",
        }
    }
}

/// Storage custom errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored payload is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Keyed persistence for the engine collections.
///
/// `read` of an absent collection yields `None`; `delete` of an absent
/// collection is a no-op.
pub trait RecordStore: Send + Sync + fmt::Debug {
    fn read(&self, collection: Collection) -> Result<Option<String>, StoreError>;
    fn write(&self, collection: Collection, payload: &str) -> Result<(), StoreError>;
    fn delete(&self, collection: Collection) -> Result<(), StoreError>;
}
