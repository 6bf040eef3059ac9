use super::StorageBackend;
use crate::error::PersistenceError;
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the store is single-threaded,
/// which lets `StorageBackend` take `&self` everywhere.
#[derive(Default)]
pub struct MemBackend {
    slots: RefCell<HashMap<String, Vec<u8>>>,
    simulate_write_error: RefCell<bool>,
    writes_before_error: RefCell<Option<usize>>,
    writes: RefCell<usize>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Let the next `count` writes succeed, then fail every write after them.
    pub fn fail_after_writes(&self, count: usize) {
        *self.writes_before_error.borrow_mut() = Some(count);
    }

    /// Test helper to put arbitrary bytes (e.g. corrupt JSON) in a slot.
    pub fn put_raw(&self, key: &str, value: impl Into<Vec<u8>>) {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.into());
    }

    /// Test helper returning the raw bytes of a slot.
    pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
        self.slots.borrow().get(key).cloned()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl StorageBackend for MemBackend {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, PersistenceError> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), PersistenceError> {
        if *self.simulate_write_error.borrow() {
            return Err(PersistenceError::Backend(
                "Simulated write error".to_string(),
            ));
        }
        if let Some(remaining) = self.writes_before_error.borrow_mut().as_mut() {
            if *remaining == 0 {
                return Err(PersistenceError::Backend(
                    "Simulated write error".to_string(),
                ));
            }
            *remaining -= 1;
        }
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_vec());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}
