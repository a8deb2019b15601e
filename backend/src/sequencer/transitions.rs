//! Pure sequence transitions
//!
//! Each function takes the current sequence by value and returns the next
//! one. The manager threads the loaded sequence through these and hands the
//! result to the store; nothing here performs I/O.

use super::validation::{validate_sequence, SequenceViolation};
use crate::models::Square;
use crate::rng::RngManager;

/// Order a freshly loaded sequence by index and check its invariants
pub fn normalize(mut squares: Vec<Square>) -> Result<Vec<Square>, SequenceViolation> {
    squares.sort_by_key(|square| square.index);
    validate_sequence(&squares)?;
    Ok(squares)
}

/// Append the next square
///
/// The new square takes index `squares.len()` and a colour different from
/// the current last square's.
pub fn append(mut squares: Vec<Square>, rng: &mut RngManager) -> (Vec<Square>, Square) {
    let index = squares.len();
    let square = Square::place(index, squares.last().map(|last| &last.color), rng);
    squares.push(square.clone());
    (squares, square)
}

/// Remove the square with the highest index (`len - 1`)
///
/// Returns `None` for an empty sequence.
pub fn truncate_last(mut squares: Vec<Square>) -> Option<(Vec<Square>, Square)> {
    let last_index = squares.len().checked_sub(1)?;
    let slot = squares.iter().rposition(|square| square.index == last_index)?;
    let removed = squares.remove(slot);
    Some((squares, removed))
}
