//! Index → grid coordinate placement
//!
//! Squares grow outward from the origin in square "layers". Layer `L`
//! starts at `(L, 0)`, descends the right edge to `(L, L)` and then walks
//! left along the bottom edge to `(0, L)`:
//!
//! ```text
//!  index:  0 | 1 2 3 | 4 5 6 7 8 | 9 ...
//!  layer:  0 |   1   |     2     | 3 ...
//!
//!        x=0  x=1  x=2
//!  y=0    0    1    4
//!  y=1    3    2    5
//!  y=2    8    7    6
//! ```
//!
//! Layer `L` holds `1 + 2L` squares and starts at index `L²`, so the layer
//! of any index is its integer square root. [`position`] uses that closed
//! form; [`position_by_layer_scan`] walks the layers one at a time and is
//! kept as the reference definition the closed form is tested against.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell on the integer grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate (grows to the right)
    pub x: i64,
    /// Vertical coordinate (grows downward)
    pub y: i64,
}

impl Position {
    /// The cell of the very first square
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i64, i64)> for Position {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

/// Grid position of the square with the given insertion index
///
/// Total and deterministic: every index has exactly one position and no two
/// indices share one.
///
/// # Example
/// ```
/// use square_sequencer_core::placement::{position, Position};
///
/// assert_eq!(position(0), Position::ORIGIN);
/// assert_eq!(position(3), Position::new(0, 1));
/// assert_eq!(position(6), Position::new(2, 2));
/// ```
pub fn position(index: usize) -> Position {
    let layer = layer_of(index);
    place_in_layer(index, layer, layer_start(layer))
}

/// Reference placement: scan layers from 1 upward until one contains `index`
///
/// O(√index). Production code uses [`position`]; both must always agree.
pub fn position_by_layer_scan(index: usize) -> Position {
    if index == 0 {
        return Position::ORIGIN;
    }

    let mut layer = 1;
    let mut count = 1;
    loop {
        let total_steps = 1 + 2 * layer;
        if index < count + total_steps {
            return place_in_layer(index, layer, count);
        }
        count += total_steps;
        layer += 1;
    }
}

/// Layer containing `index` (the origin square is layer 0)
pub fn layer_of(index: usize) -> usize {
    integer_sqrt(index)
}

/// First index of `layer`
///
/// Equals `1 + Σ_{k=1}^{layer-1} (1 + 2k)`, which simplifies to `layer²`.
///
/// # Panics
/// Panics on overflow, i.e. for layers no `usize` index can reach.
pub fn layer_start(layer: usize) -> usize {
    layer
        .checked_mul(layer)
        .unwrap_or_else(|| panic!("layer {} is beyond the addressable index range", layer))
}

/// Inverse of [`position`]
///
/// Returns `None` for cells outside the non-negative quadrant, or for cells
/// whose index would not fit in a `usize`.
///
/// # Example
/// ```
/// use square_sequencer_core::placement::{index_of, position, Position};
///
/// assert_eq!(index_of(position(42)), Some(42));
/// assert_eq!(index_of(Position::new(-1, 0)), None);
/// ```
pub fn index_of(pos: Position) -> Option<usize> {
    if pos.x < 0 || pos.y < 0 {
        return None;
    }

    let layer = usize::try_from(pos.x.max(pos.y)).ok()?;
    let x = usize::try_from(pos.x).ok()?;
    let y = usize::try_from(pos.y).ok()?;
    let start = layer.checked_mul(layer)?;

    if x == layer {
        // Right edge, including the layer's base cell at y == 0
        start.checked_add(y)
    } else {
        // Bottom edge, walking left from (layer - 1, layer)
        start.checked_add(layer)?.checked_add(layer - x)
    }
}

/// Place `index` inside `layer`, whose first index is `start`
fn place_in_layer(index: usize, layer: usize, start: usize) -> Position {
    let offset = index - start;
    let l = layer as i64;

    if offset <= layer {
        // offset 0 is the base cell (L, 0); the rest descend the right edge
        Position::new(l, offset as i64)
    } else {
        Position::new(l - (offset - layer) as i64, l)
    }
}

/// Exact floor of the square root
fn integer_sqrt(n: usize) -> usize {
    if n < 2 {
        return n;
    }

    // f64 has 53 bits of mantissa; correct the estimate in both directions.
    let mut root = (n as f64).sqrt() as usize;
    while root.checked_mul(root).map_or(true, |sq| sq > n) {
        root -= 1;
    }
    while (root + 1).checked_mul(root + 1).is_some_and(|sq| sq <= n) {
        root += 1;
    }
    root
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_sqrt_perfect_squares() {
        for root in 0..2000usize {
            assert_eq!(integer_sqrt(root * root), root);
            if root > 0 {
                assert_eq!(integer_sqrt(root * root - 1), root - 1);
            }
        }
    }

    #[test]
    fn test_integer_sqrt_extremes() {
        let max_root = integer_sqrt(usize::MAX);
        assert!(max_root.checked_mul(max_root).is_some());
        assert!((max_root + 1).checked_mul(max_root + 1).is_none());
    }

    #[test]
    fn test_layer_boundaries() {
        assert_eq!(layer_of(0), 0);
        assert_eq!(layer_of(1), 1);
        assert_eq!(layer_of(3), 1);
        assert_eq!(layer_of(4), 2);
        assert_eq!(layer_of(8), 2);
        assert_eq!(layer_of(9), 3);
        assert_eq!(layer_start(1), 1);
        assert_eq!(layer_start(2), 4);
        assert_eq!(layer_start(3), 9);
    }

    #[test]
    fn test_layer_end_is_bottom_left() {
        for layer in 1..50usize {
            let last = layer_start(layer) + 2 * layer;
            assert_eq!(position(last), Position::new(0, layer as i64));
        }
    }

    #[test]
    fn test_position_at_huge_index() {
        let pos = position(usize::MAX);
        assert_eq!(index_of(pos), Some(usize::MAX));
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(2, 1).to_string(), "(2, 1)");
    }
}
