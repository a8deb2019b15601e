//! Deterministic random number generation
//!
//! Uses xorshift64* algorithm for fast, deterministic random number generation.
//! Colour assignment draws from this module only; the generator is always
//! injected, never global.

mod xorshift;

pub use xorshift::RngManager;
