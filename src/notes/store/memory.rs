use super::Backend;
use crate::error::{NotesError, Result};
use std::cell::{Cell, RefCell};

/// In-memory backend for tests. Does NOT persist data.
///
/// Uses `RefCell`/`Cell` so the [`Backend`] trait can stay `&self`; the
/// store is single-threaded.
#[derive(Default)]
pub struct MemBackend {
    contents: RefCell<Option<String>>,
    writes: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already persisted document.
    pub fn with_contents(raw: &str) -> Self {
        let backend = Self::new();
        *backend.contents.borrow_mut() = Some(raw.to_string());
        backend
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }

    /// Number of successful `save_raw` calls.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }
}

impl Backend for MemBackend {
    fn load_raw(&self) -> Result<Option<String>> {
        Ok(self.contents.borrow().clone())
    }

    fn save_raw(&self, contents: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(NotesError::Store("Simulated write error".to_string()));
        }
        *self.contents.borrow_mut() = Some(contents.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
