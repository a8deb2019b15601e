//! Tests for the index → position spiral
//!
//! The closed-form placement must agree with the layer-by-layer definition
//! everywhere, and no two indices may share a cell.

use proptest::prelude::*;
use square_sequencer_core::placement::{
    index_of, layer_of, layer_start, position, position_by_layer_scan, Position,
};
use std::collections::HashSet;

#[test]
fn test_first_square_at_origin() {
    assert_eq!(position(0), Position::new(0, 0));
    assert_eq!(position_by_layer_scan(0), Position::new(0, 0));
}

#[test]
fn test_first_two_layers() {
    let expected = [
        (0, 0),
        (1, 0),
        (1, 1),
        (0, 1),
        (2, 0),
        (2, 1),
        (2, 2),
        (1, 2),
        (0, 2),
    ];

    for (index, &(x, y)) in expected.iter().enumerate() {
        assert_eq!(
            position(index),
            Position::new(x, y),
            "wrong position for index {}",
            index
        );
    }
}

#[test]
fn test_third_layer_walk() {
    // Base (3,0), down the right edge to (3,3), left along the bottom to (0,3)
    let layer: Vec<Position> = (9..16).map(position).collect();
    let expected: Vec<Position> = [(3, 0), (3, 1), (3, 2), (3, 3), (2, 3), (1, 3), (0, 3)]
        .into_iter()
        .map(Position::from)
        .collect();
    assert_eq!(layer, expected);
}

#[test]
fn test_layer_sizes() {
    for layer in 1..100usize {
        let size = layer_start(layer + 1) - layer_start(layer);
        assert_eq!(size, 1 + 2 * layer);
    }
}

#[test]
fn test_closed_form_matches_scan_exhaustively() {
    for index in 0..20_000 {
        assert_eq!(
            position(index),
            position_by_layer_scan(index),
            "closed form diverges at index {}",
            index
        );
    }
}

#[test]
fn test_injective_over_first_ten_thousand() {
    let mut seen = HashSet::new();
    for index in 0..10_000 {
        assert!(
            seen.insert(position(index)),
            "index {} reuses cell {}",
            index,
            position(index)
        );
    }
}

#[test]
fn test_first_n_squares_fill_a_square_block() {
    // After L² squares, exactly the L×L block at the origin is covered.
    for side in 1..30usize {
        let cells: HashSet<Position> = (0..side * side).map(position).collect();
        for x in 0..side as i64 {
            for y in 0..side as i64 {
                assert!(cells.contains(&Position::new(x, y)));
            }
        }
    }
}

#[test]
fn test_index_of_rejects_negative_cells() {
    assert_eq!(index_of(Position::new(-1, 0)), None);
    assert_eq!(index_of(Position::new(0, -3)), None);
}

proptest! {
    #[test]
    fn prop_position_is_pure(index in 0usize..10_000_000) {
        prop_assert_eq!(position(index), position(index));
    }

    #[test]
    fn prop_closed_form_matches_scan(index in 0usize..2_000_000) {
        prop_assert_eq!(position(index), position_by_layer_scan(index));
    }

    #[test]
    fn prop_index_of_inverts_position(index in 0usize..usize::MAX) {
        prop_assert_eq!(index_of(position(index)), Some(index));
    }

    #[test]
    fn prop_position_lies_on_its_layer(index in 1usize..1_000_000_000) {
        let pos = position(index);
        let layer = layer_of(index) as i64;
        prop_assert!(pos.x >= 0 && pos.y >= 0);
        prop_assert_eq!(pos.x.max(pos.y), layer);
    }

    #[test]
    fn prop_distinct_indices_distinct_cells(a in 0usize..1_000_000, b in 0usize..1_000_000) {
        prop_assume!(a != b);
        prop_assert_ne!(position(a), position(b));
    }
}
