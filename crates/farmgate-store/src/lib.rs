//! Client-side storage capability for Farmgate.
//!
//! Durable on-device state (the cart, the auth session) lives behind the
//! [`Storage`] trait so the owners of that state stay storage-agnostic: the
//! browser shell binds localStorage, native shells bind a file, and tests
//! bind [`MemoryStorage`].
//!
//! # Example
//!
//! ```rust
//! use farmgate_store::{MemoryStorage, StorageExt};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Prefs {
//!     language: String,
//! }
//!
//! let storage = MemoryStorage::new();
//! storage.set_json("prefs", &Prefs { language: "ar".into() }).unwrap();
//! let prefs: Option<Prefs> = storage.get_json("prefs").unwrap();
//! assert_eq!(prefs.unwrap().language, "ar");
//! ```

mod error;
mod memory;

pub use error::StorageError;
pub use memory::MemoryStorage;

use serde::{de::DeserializeOwned, Serialize};

/// A durable key-value record store on the client device.
///
/// Values are plain strings; typed access goes through [`StorageExt`].
/// Reads and writes are synchronous and single-threaded, matching the
/// UI event-loop execution model.
pub trait Storage {
    /// Read the record stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any existing record.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the record under `key`. Deleting a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// JSON-typed accessors available on every [`Storage`] implementation.
pub trait StorageExt: Storage {
    /// Read and deserialize the record under `key`.
    ///
    /// Returns `None` when the key is absent. A record that fails to
    /// deserialize is an error; callers that treat corrupt state as missing
    /// state decide that at their own layer.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Serialize `value` and write it under `key`.
    fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw)
    }
}

impl<S: Storage + ?Sized> StorageExt for S {}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{MemoryStorage, Storage, StorageError, StorageExt};
}
