use super::StorageBackend;
use crate::error::{PlantError, Result};
use std::cell::RefCell;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the tracker is
/// single-threaded; the `StorageBackend` trait can then take `&self` for
/// writes without locking.
#[derive(Default)]
pub struct MemBackend {
    payload: RefCell<Option<String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a pre-seeded payload, e.g. a corrupt one.
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: RefCell::new(Some(payload.into())),
            simulate_write_error: RefCell::new(false),
        }
    }

    /// Make subsequent writes fail, for error-handling tests.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// The currently stored payload, if any.
    pub fn payload(&self) -> Option<String> {
        self.payload.borrow().clone()
    }
}

impl StorageBackend for MemBackend {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.payload.borrow().clone())
    }

    fn write(&self, payload: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(PlantError::Store("Simulated write error".to_string()));
        }
        *self.payload.borrow_mut() = Some(payload.to_string());
        Ok(())
    }
}
