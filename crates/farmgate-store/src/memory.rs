//! In-memory storage backend.

use crate::{Storage, StorageError};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// In-memory [`Storage`] implementation.
///
/// Clones share the same underlying records, so a cart store and an auth
/// session can be bound to one storage the way they would share a single
/// localStorage on device. Single-threaded by design.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    records: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create an empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    /// Check whether no records are stored.
    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.records.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.records
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.records.borrow_mut().remove(key);
        Ok(())
    }
}
