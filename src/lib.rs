//! # Stage Brawl
//!
//! A deterministic, fixed-timestep combat core for a two-player platform
//! fighter. The crate simulates; it never renders, reads devices, or
//! talks to a network. Hosts feed one [`game::InputFrame`] per fighter
//! into [`game::tick`] and drain the resulting events.
//!
//! ```text
//!   inputs ──► tick ──► fighters ── physics ── platforms
//!                │          │
//!                │       attacks ── hitboxes ── damage/knockback
//!                │          │
//!                │      projectiles
//!                ▼
//!             events ──► host (render, sound, replay, netcode)
//! ```
//!
//! Determinism is the contract: a seed plus an input script replays to
//! an identical match, which is what makes snapshots, replays, and
//! lockstep netcode possible on top of this crate.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod game;

pub use error::SimError;
pub use game::{
    tick, Archetype, Fighter, FighterId, GameEvent, GameEventData, InputFrame, MatchConfig,
    MatchState, MatchStatus, Stage, TickResult,
};

/// Simulation ticks per second the timing constants are tuned for.
pub const TICK_RATE: u32 = 60;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
