//! Sequence manager
//!
//! Owns the lifecycle of the square sequence: list, add, delete-last and
//! reset. Every operation is self-contained:
//!
//! 1. Load the whole sequence from the store and validate it
//! 2. Apply a pure transition (see [`transitions`])
//! 3. Save the whole sequence back (mutating operations only)
//!
//! # Critical Invariants
//!
//! - **Contiguity**: stored indices are exactly `0..N-1`
//! - **Derived placement**: a square's position is `position(index)`
//! - **No silent failure**: an operation succeeds only if its save succeeded
//!
//! # Concurrency
//!
//! A per-manager gate serializes load-modify-save, so callers sharing one
//! manager (e.g. through an `Arc`) never lose updates. Run one manager per
//! store.

pub mod transitions;
pub mod validation;

pub use validation::{validate_sequence, SequenceViolation};

use crate::config::SequencerConfig;
use crate::models::Square;
use crate::rng::RngManager;
use crate::store::{JsonFileStore, SquareStore, StoreError};
use parking_lot::Mutex;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Outcome of a failed sequence operation
#[derive(Debug, Error)]
pub enum SequenceError {
    /// The operation needs at least one square and there are none
    #[error("No squares found")]
    Empty,

    /// The store could not be read or written
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

impl SequenceError {
    /// True for the "nothing there" outcome, which callers usually report
    /// differently from a storage failure
    pub fn is_empty(&self) -> bool {
        matches!(self, SequenceError::Empty)
    }
}

/// Manages the square sequence persisted in `S`
///
/// # Example
/// ```
/// use square_sequencer_core::store::InMemoryStore;
/// use square_sequencer_core::{RngManager, SequenceManager};
///
/// let manager = SequenceManager::new(InMemoryStore::new(), RngManager::new(42));
///
/// let first = manager.add().unwrap();
/// assert_eq!((first.index, first.x, first.y), (0, 0, 0));
///
/// manager.add().unwrap();
/// assert_eq!(manager.list().unwrap().len(), 2);
///
/// manager.reset().unwrap();
/// assert!(manager.list().unwrap_err().is_empty());
/// ```
#[derive(Debug)]
pub struct SequenceManager<S> {
    store: S,
    rng: Mutex<RngManager>,
    gate: Mutex<()>,
}

impl<S: SquareStore> SequenceManager<S> {
    /// Create a manager over `store`, drawing colours from `rng`
    pub fn new(store: S, rng: RngManager) -> Self {
        Self {
            store,
            rng: Mutex::new(rng),
            gate: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// All squares, ascending by index
    ///
    /// # Errors
    /// - [`SequenceError::Empty`] if there are no squares
    /// - [`SequenceError::Storage`] if the store cannot be read or holds an
    ///   inconsistent sequence
    pub fn list(&self) -> Result<Vec<Square>, SequenceError> {
        let _gate = self.gate.lock();
        let squares = self.load()?;
        if squares.is_empty() {
            return Err(SequenceError::Empty);
        }
        Ok(squares)
    }

    /// Append a square and return it
    ///
    /// The square gets index `N` (the current size), the position derived
    /// from it, and a colour different from square `N-1`'s.
    ///
    /// # Errors
    /// [`SequenceError::Storage`] if loading or saving fails; the stored
    /// sequence is then unchanged.
    pub fn add(&self) -> Result<Square, SequenceError> {
        let _gate = self.gate.lock();
        let squares = self.load()?;

        let (squares, square) = {
            let mut rng = self.rng.lock();
            transitions::append(squares, &mut rng)
        };

        self.save(&squares)?;
        info!(
            index = square.index,
            x = square.x,
            y = square.y,
            color = %square.color,
            "square added"
        );
        Ok(square)
    }

    /// Remove the square with the highest index and return it
    ///
    /// # Errors
    /// - [`SequenceError::Empty`] if there are no squares
    /// - [`SequenceError::Storage`] if loading or saving fails
    pub fn delete_last(&self) -> Result<Square, SequenceError> {
        let _gate = self.gate.lock();
        let squares = self.load()?;

        let (squares, removed) = transitions::truncate_last(squares).ok_or(SequenceError::Empty)?;

        self.save(&squares)?;
        info!(index = removed.index, x = removed.x, y = removed.y, "square removed");
        Ok(removed)
    }

    /// Clear the sequence
    ///
    /// Succeeds on an already empty sequence; does not read the store.
    ///
    /// # Errors
    /// [`SequenceError::Storage`] if the save fails.
    pub fn reset(&self) -> Result<(), SequenceError> {
        let _gate = self.gate.lock();
        self.save(&[])?;
        info!("squares reset");
        Ok(())
    }

    fn load(&self) -> Result<Vec<Square>, SequenceError> {
        let raw = self
            .store
            .load_all()
            .map_err(|e| storage_failure("load", e))?;

        let squares = transitions::normalize(raw)
            .map_err(|violation| storage_failure("load", StoreError::from(violation)))?;

        debug!(count = squares.len(), "sequence loaded");
        Ok(squares)
    }

    fn save(&self, squares: &[Square]) -> Result<(), SequenceError> {
        self.store
            .save_all(squares)
            .map_err(|e| storage_failure("save", e))
    }
}

impl SequenceManager<JsonFileStore> {
    /// Manager over the JSON file named in `config`
    ///
    /// Seeds the colour generator from `config.rng_seed`, or from entropy
    /// when no seed is configured.
    pub fn from_config(config: &SequencerConfig) -> Self {
        let store = JsonFileStore::new(&config.store_path).with_pretty(config.pretty);
        let rng = match config.rng_seed {
            Some(seed) => RngManager::new(seed),
            None => RngManager::from_entropy(),
        };
        Self::new(store, rng)
    }
}

fn storage_failure(operation: &str, error: StoreError) -> SequenceError {
    warn!(operation, error = %error, "square store failure");
    SequenceError::Storage(error)
}
