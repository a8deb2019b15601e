//! Sequence validation
//!
//! Checks a loaded sequence before any operation builds on it:
//! - Indices are exactly `0..N-1`, in order (no gaps, no duplicates)
//! - Every square sits at the position its index dictates

use crate::models::Square;
use crate::placement::{position, Position};
use thiserror::Error;

/// A way in which a stored sequence breaks the sequence invariants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceViolation {
    #[error("expected square index {expected}, found {found}")]
    IndexGap { expected: usize, found: usize },

    #[error("square {index} is stored at {found}, expected {expected}")]
    CoordinateMismatch {
        index: usize,
        expected: Position,
        found: Position,
    },
}

/// Validate an index-ordered sequence
///
/// Reports the first violation found, scanning from index 0.
pub fn validate_sequence(squares: &[Square]) -> Result<(), SequenceViolation> {
    for (expected, square) in squares.iter().enumerate() {
        if square.index != expected {
            return Err(SequenceViolation::IndexGap {
                expected,
                found: square.index,
            });
        }

        let derived = position(expected);
        if square.position() != derived {
            return Err(SequenceViolation::CoordinateMismatch {
                index: expected,
                expected: derived,
                found: square.position(),
            });
        }
    }

    Ok(())
}
