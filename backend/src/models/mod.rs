//! Domain models for the square sequencer

pub mod square;

// Re-exports
pub use square::Square;
