//! Game Events
//!
//! Observable things that happened during a tick, drained by the host
//! after each step. The simulation never renders or plays sound; events
//! are how a frontend finds out a hammer connected or a stock was lost.

use serde::{Deserialize, Serialize};

use crate::game::archetype::MoveId;
use crate::game::projectile::ProjectileKind;
use crate::game::state::FighterId;

/// One event, stamped with the tick it occurred on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameEvent {
    /// Tick the event occurred on
    pub tick: u32,
    /// What happened
    pub data: GameEventData,
}

/// The payload of a [`GameEvent`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEventData {
    /// A melee hitbox connected.
    HitLanded {
        /// Who swung
        attacker: FighterId,
        /// Who got hit
        victim: FighterId,
        /// The move that connected
        move_id: MoveId,
        /// Damage dealt by this hit
        damage: f32,
        /// Victim's accumulated damage after the hit
        victim_total: f32,
        /// Hitstun inflicted, in ticks
        hitstun: u32,
    },
    /// A projectile was fired.
    ProjectileSpawned {
        /// Who fired it
        owner: FighterId,
        /// What was fired
        kind: ProjectileKind,
    },
    /// A projectile struck a fighter.
    ProjectileHit {
        /// Who fired it
        owner: FighterId,
        /// Who it struck
        victim: FighterId,
        /// What struck them
        kind: ProjectileKind,
        /// Damage dealt
        damage: f32,
    },
    /// A held charge was released as a shot.
    ChargeReleased {
        /// Who released
        fighter: FighterId,
        /// Charge level at release
        level: u32,
    },
    /// A fighter crossed the blast boundary and lost a stock.
    FighterKo {
        /// Who was eliminated
        fighter: FighterId,
        /// Stocks they have left
        stocks_remaining: u32,
    },
    /// A fighter re-entered the stage after a KO.
    FighterRespawned {
        /// Who respawned
        fighter: FighterId,
    },
    /// The match is over.
    MatchEnded {
        /// The last fighter with stocks
        winner: FighterId,
    },
}

impl GameEvent {
    /// Build an event stamped at `tick`.
    pub fn at(tick: u32, data: GameEventData) -> Self {
        Self { tick, data }
    }
}
