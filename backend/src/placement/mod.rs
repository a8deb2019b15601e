//! Placement engine
//!
//! Pure functions deciding where a square goes and what colour it gets.
//! Nothing here touches storage; randomness is passed in explicitly.

pub mod color;
pub mod position;

pub use color::{next_color, Color, ColorError, COLOR_SPACE};
pub use position::{
    index_of, layer_of, layer_start, position, position_by_layer_scan, Position,
};
