//! Match simulation.
//!
//! Everything that happens between two fighters on a stage: intents in,
//! deterministic state transition, events out.

pub mod archetype;
pub mod attack;
pub mod combat;
pub mod events;
pub mod input;
pub mod physics;
pub mod projectile;
pub mod respawn;
pub mod stage;
pub mod state;
pub mod tick;

pub use archetype::{Archetype, MoveId, MoveSlot};
pub use events::{GameEvent, GameEventData};
pub use input::InputFrame;
pub use projectile::{Projectile, ProjectileKind};
pub use stage::{Platform, Stage};
pub use state::{Fighter, FighterId, MatchState, MatchStatus};
pub use tick::{tick, MatchConfig, TickResult};
