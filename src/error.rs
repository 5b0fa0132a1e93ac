//! Simulation Errors
//!
//! The simulation itself has no I/O, so errors only arise at construction
//! time. In-sim rejections (cooldown not ready, victim already in hitstun)
//! are normal flow control and stay silent.

use thiserror::Error;

/// Errors reported when building a match.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// An archetype name did not match any known fighter type.
    #[error("unknown archetype: {0:?}")]
    UnknownArchetype(String),

    /// A match configuration value is out of range.
    #[error("invalid match config: {0}")]
    InvalidConfig(&'static str),
}
