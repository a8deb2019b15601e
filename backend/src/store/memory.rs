//! In-memory store
//!
//! Holds the sequence in process memory. Loads and saves can be made to fail
//! on demand, which is how the all-or-nothing behaviour of the sequence
//! manager is exercised.

use super::{SquareStore, StoreError};
use crate::models::Square;
use parking_lot::Mutex;

#[derive(Debug, Default)]
struct MemoryState {
    squares: Vec<Square>,
    fail_loads: bool,
    fail_saves: bool,
    save_count: usize,
}

/// Square store living in process memory
///
/// # Example
/// ```
/// use square_sequencer_core::store::{InMemoryStore, SquareStore};
///
/// let store = InMemoryStore::new();
/// assert!(store.load_all().unwrap().is_empty());
///
/// store.fail_saves(true);
/// assert!(store.save_all(&[]).is_err());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: Mutex<MemoryState>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `squares`, stored as given
    pub fn with_squares(squares: Vec<Square>) -> Self {
        Self {
            inner: Mutex::new(MemoryState {
                squares,
                ..MemoryState::default()
            }),
        }
    }

    /// Make every subsequent load fail (or succeed again)
    pub fn fail_loads(&self, fail: bool) {
        self.inner.lock().fail_loads = fail;
    }

    /// Make every subsequent save fail (or succeed again)
    pub fn fail_saves(&self, fail: bool) {
        self.inner.lock().fail_saves = fail;
    }

    /// Current durable contents
    pub fn snapshot(&self) -> Vec<Square> {
        self.inner.lock().squares.clone()
    }

    /// Number of successful saves so far
    pub fn save_count(&self) -> usize {
        self.inner.lock().save_count
    }
}

impl SquareStore for InMemoryStore {
    fn load_all(&self) -> Result<Vec<Square>, StoreError> {
        let state = self.inner.lock();
        if state.fail_loads {
            return Err(StoreError::Unavailable("load rejected".to_string()));
        }
        Ok(state.squares.clone())
    }

    fn save_all(&self, squares: &[Square]) -> Result<(), StoreError> {
        let mut state = self.inner.lock();
        if state.fail_saves {
            return Err(StoreError::Unavailable("save rejected".to_string()));
        }
        state.squares = squares.to_vec();
        state.save_count += 1;
        Ok(())
    }
}
