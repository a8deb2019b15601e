//! Square model
//!
//! A square is one entry in the sequence. Its index is its insertion order,
//! its position follows from the index, and its colour was drawn when it was
//! added. None of these change after creation.

use crate::placement::{next_color, position, Color, Position};
use crate::rng::RngManager;
use serde::{Deserialize, Serialize};

/// One placed square
///
/// Serialized as a flat record:
/// `{ "index": 2, "x": 1, "y": 1, "color": "#FF5733" }`.
///
/// # Example
/// ```
/// use square_sequencer_core::{RngManager, Square};
///
/// let mut rng = RngManager::new(1);
/// let square = Square::place(3, None, &mut rng);
/// assert_eq!((square.x, square.y), (0, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Square {
    /// Zero-based insertion order
    pub index: usize,
    pub x: i64,
    pub y: i64,
    pub color: Color,
}

impl Square {
    /// Create the square for `index`, avoiding `previous_color`
    pub fn place(index: usize, previous_color: Option<&Color>, rng: &mut RngManager) -> Self {
        let Position { x, y } = position(index);
        Self {
            index,
            x,
            y,
            color: next_color(previous_color, rng),
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}
