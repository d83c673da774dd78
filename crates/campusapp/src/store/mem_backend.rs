use std::sync::Mutex;

use super::backend::StorageBackend;
use crate::error::{CampusError, Result};
use crate::model::Snapshot;

#[derive(Default)]
struct MemInner {
    snapshot: Option<Snapshot>,
    simulate_write_error: bool,
}

/// In-memory storage backend for testing.
///
/// Holds the document behind a `Mutex` so stores built on it can cross
/// thread boundaries in server tests while the trait keeps `&self`
/// methods.
#[derive(Default)]
pub struct MemBackend {
    inner: Mutex<MemInner>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.inner
            .lock()
            .expect("mem backend lock poisoned")
            .simulate_write_error = simulate;
    }
}

impl StorageBackend for MemBackend {
    fn load(&self) -> Result<Option<Snapshot>> {
        let inner = self.inner.lock().expect("mem backend lock poisoned");
        Ok(inner.snapshot.clone())
    }

    fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let mut inner = self.inner.lock().expect("mem backend lock poisoned");
        if inner.simulate_write_error {
            return Err(CampusError::Store("Simulated write error".to_string()));
        }
        inner.snapshot = Some(snapshot.clone());
        Ok(())
    }
}
