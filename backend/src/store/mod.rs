//! Persistence of the square sequence
//!
//! The sequence manager never keeps squares in memory between calls; it
//! loads the whole collection from a [`SquareStore`], changes it, and saves
//! the whole collection back.
//!
//! # Implementations
//!
//! - [`JsonFileStore`]: a JSON array on disk, replaced atomically on save
//! - [`InMemoryStore`]: process-local, with failure injection for tests

mod json_file;
mod memory;

pub use json_file::{JsonFileStore, DEFAULT_STORE_FILE};
pub use memory::InMemoryStore;

use crate::models::Square;
use crate::sequencer::SequenceViolation;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or saving the sequence
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt square data in {}: {message}", .path.display())]
    Corrupt { path: PathBuf, message: String },

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Stored sequence is inconsistent: {0}")]
    InvalidSequence(#[from] SequenceViolation),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Load-all / save-all persistence for the square sequence
///
/// Implementations must round-trip `index`, `x`, `y` and `color` losslessly
/// and preserve order.
pub trait SquareStore: Send + Sync {
    /// Load every stored square
    ///
    /// Returns an empty vector when nothing has been stored yet.
    fn load_all(&self) -> Result<Vec<Square>, StoreError>;

    /// Replace the stored collection with `squares`
    fn save_all(&self, squares: &[Square]) -> Result<(), StoreError>;
}
