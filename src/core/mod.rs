//! Core deterministic primitives.
//!
//! Geometry and randomness shared by every part of the simulation. Nothing
//! in this module knows about fighters or matches.

pub mod rect;
pub mod rng;
pub mod vec2;

// Re-export core types
pub use rect::Rect;
pub use rng::DeterministicRng;
pub use vec2::Vec2;
