//! Square Sequencer Core
//!
//! Places squares on an integer grid in insertion order and manages the
//! persisted sequence of placed squares.
//!
//! # Architecture
//!
//! - **placement**: Index → position spiral and colour assignment (pure)
//! - **rng**: Deterministic random number generation
//! - **models**: Domain types (Square)
//! - **store**: Load-all / save-all persistence (JSON file, in-memory)
//! - **sequencer**: List / add / delete-last / reset over a store
//! - **config**: Store location and seeding
//!
//! # Critical Invariants
//!
//! 1. Stored indices are exactly `0..N-1`
//! 2. A square's position is a pure function of its index
//! 3. All randomness flows through an injected, seedable RNG
//! 4. No operation reports success after a failed save

// Module declarations
pub mod config;
pub mod models;
pub mod placement;
pub mod rng;
pub mod sequencer;
pub mod store;

// Re-exports for convenience
pub use config::{ConfigError, SequencerConfig};
pub use models::Square;
pub use placement::{next_color, position, Color, ColorError, Position};
pub use rng::RngManager;
pub use sequencer::{SequenceError, SequenceManager, SequenceViolation};
pub use store::{InMemoryStore, JsonFileStore, SquareStore, StoreError};
