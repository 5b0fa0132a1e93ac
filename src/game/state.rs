//! Match State
//!
//! The full authoritative state of one match: two fighters, the live
//! projectiles, the stage geometry, the seeded RNG, and the event queue
//! for the current tick. Everything a host needs to snapshot, replay, or
//! hand to a renderer serializes from here.

use serde::{Deserialize, Serialize};

use crate::core::{DeterministicRng, Rect, Vec2};
use crate::game::archetype::{Archetype, MoveSlot};
use crate::game::attack::ActiveAttack;
use crate::game::events::GameEvent;
use crate::game::projectile::Projectile;
use crate::game::stage::{Platform, Stage};

/// Fighter body width.
pub const FIGHTER_WIDTH: f32 = 35.0;
/// Fighter body height.
pub const FIGHTER_HEIGHT: f32 = 55.0;
/// Stocks each fighter starts with.
pub const STARTING_STOCKS: u32 = 3;
/// Jumps granted on landing (ground jump + one air jump).
pub const MAX_JUMPS: u8 = 2;
/// Charge level cap.
pub const CHARGE_CAP: u32 = 100;

/// Identifies one of the two fighters in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FighterId(pub u8);

impl FighterId {
    /// Player one.
    pub const P1: FighterId = FighterId(0);
    /// Player two.
    pub const P2: FighterId = FighterId(1);

    /// Index into the fighter array.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The other fighter.
    #[inline]
    pub fn opponent(self) -> FighterId {
        FighterId(1 - self.0)
    }
}

/// One fighter's complete state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Fighter {
    /// Fighter type, fixed for the match
    pub archetype: Archetype,
    /// Top-left corner of the body rect
    pub pos: Vec2,
    /// Position at the start of the current tick's movement, used by
    /// collision resolution to tell which side a crossing came from
    pub prev_pos: Vec2,
    /// Velocity in units per tick
    pub vel: Vec2,
    /// Facing direction
    pub facing_right: bool,
    /// Standing on a platform this tick
    pub grounded: bool,
    /// Jumps left before landing is required
    pub jumps_remaining: u8,
    /// Accumulated damage percent; raises knockback, never capped
    pub damage: f32,
    /// Ticks of input lockout remaining
    pub hitstun: u32,
    /// Lives remaining
    pub stocks: u32,
    /// Per-slot cooldowns in ticks: primary, secondary, special
    pub cooldowns: [u32; 3],
    /// The attack window currently open, if any
    pub attack: Option<ActiveAttack>,
    /// Holding a charge (chargeable archetypes only)
    pub charging: bool,
    /// Current charge level, 0..=CHARGE_CAP
    pub charge_level: u32,
}

impl Fighter {
    /// Create a fighter at a spawn point.
    pub fn new(archetype: Archetype, spawn: Vec2, facing_right: bool) -> Self {
        Self {
            archetype,
            pos: spawn,
            prev_pos: spawn,
            vel: Vec2::ZERO,
            facing_right,
            grounded: false,
            jumps_remaining: MAX_JUMPS,
            damage: 0.0,
            hitstun: 0,
            stocks: STARTING_STOCKS,
            cooldowns: [0; 3],
            attack: None,
            charging: false,
            charge_level: 0,
        }
    }

    /// Current body collision rect.
    #[inline]
    pub fn body_rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, FIGHTER_WIDTH, FIGHTER_HEIGHT)
    }

    /// Body rect at the previous tick's position.
    #[inline]
    pub fn prev_body_rect(&self) -> Rect {
        Rect::new(
            self.prev_pos.x,
            self.prev_pos.y,
            FIGHTER_WIDTH,
            FIGHTER_HEIGHT,
        )
    }

    /// Cooldown remaining for a slot.
    #[inline]
    pub fn cooldown(&self, slot: MoveSlot) -> u32 {
        self.cooldowns[slot.index()]
    }

    /// Apply a hit: accumulate damage, launch away from `source`, and
    /// enter hitstun.
    ///
    /// Knockback scales with the victim's damage AFTER this hit, so heavy
    /// accumulated damage launches hard. Hitstun scales with the incoming
    /// hit only. Taking a hit always drops any charge in progress.
    pub fn take_damage(&mut self, amount: f32, source: Vec2, hitstun_mult: f32) {
        self.damage += amount;

        let knockback = self.damage / 8.0 + 5.0;
        let away = (self.center() - source).normalize_or_zero();
        self.vel.x = away.x * knockback;
        self.vel.y = away.y * knockback - 5.0;

        self.hitstun = (amount * hitstun_mult) as u32;
        self.charging = false;
        self.charge_level = 0;
    }

    /// Center of the body rect.
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.body_rect().center()
    }

    /// Reset transient combat state for a respawn at `spawn`.
    ///
    /// Cooldowns, any open attack window, and spent jumps deliberately
    /// persist; losing a stock does not refresh the fighter's moves, and
    /// jumps only come back on landing.
    pub fn reset_for_respawn(&mut self, spawn: Vec2) {
        self.pos = spawn;
        self.prev_pos = spawn;
        self.vel = Vec2::ZERO;
        self.grounded = false;
        self.damage = 0.0;
        self.hitstun = 0;
        self.charging = false;
        self.charge_level = 0;
    }
}

/// Whether the match is still running or decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    /// Both fighters still have stocks
    Ongoing,
    /// One fighter has stocks; the other is out
    Winner(FighterId),
}

/// Authoritative state of one match.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchState {
    /// Current tick number; increments once per simulation step
    pub tick: u32,
    /// Seed this match was created with
    pub rng_seed: u64,
    /// Seeded RNG; all in-match randomness flows through it
    pub rng: DeterministicRng,
    /// The two fighters, indexed by [`FighterId`]
    pub fighters: [Fighter; 2],
    /// Stage geometry
    pub platforms: Vec<Platform>,
    /// Live projectiles
    pub projectiles: Vec<Projectile>,
    /// Ongoing or decided
    pub status: MatchStatus,
    /// Events emitted since the last drain
    #[serde(skip)]
    pending_events: Vec<GameEvent>,
}

impl MatchState {
    /// Create a fresh match on `stage` with the given fighters.
    ///
    /// Player one spawns on the left facing right, player two on the
    /// right facing left.
    pub fn new(seed: u64, archetypes: [Archetype; 2], stage: Stage) -> Self {
        let fighters = [
            Fighter::new(archetypes[0], stage.spawn_points[0], true),
            Fighter::new(archetypes[1], stage.spawn_points[1], false),
        ];

        Self {
            tick: 0,
            rng_seed: seed,
            rng: DeterministicRng::new(seed),
            fighters,
            platforms: stage.platforms,
            projectiles: Vec::new(),
            status: MatchStatus::Ongoing,
            pending_events: Vec::new(),
        }
    }

    /// Queue an event for this tick.
    pub fn push_event(&mut self, event: GameEvent) {
        self.pending_events.push(event);
    }

    /// Drain all queued events.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending_events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fighter_id_opponent() {
        assert_eq!(FighterId::P1.opponent(), FighterId::P2);
        assert_eq!(FighterId::P2.opponent(), FighterId::P1);
        assert_eq!(FighterId::P1.index(), 0);
        assert_eq!(FighterId::P2.index(), 1);
    }

    #[test]
    fn test_take_damage_scaling() {
        // A fighter already at 40% takes a 20-damage hit from directly to
        // its left: total 60%, knockback 60/8 + 5 = 12.5 straight right,
        // hitstun floor(20 * 2.5) = 50 ticks.
        let mut fighter = Fighter::new(Archetype::Warrior, Vec2::new(200.0, 300.0), true);
        fighter.damage = 40.0;

        let source = Vec2::new(100.0, fighter.center().y);
        fighter.take_damage(20.0, source, 2.5);

        assert_eq!(fighter.damage, 60.0);
        assert!((fighter.vel.x - 12.5).abs() < 1e-4);
        assert!((fighter.vel.y - (-5.0)).abs() < 1e-4);
        assert_eq!(fighter.hitstun, 50);
    }

    #[test]
    fn test_take_damage_coincident_source() {
        // Source exactly at the victim's center: no launch direction, only
        // the fixed upward pop applies.
        let mut fighter = Fighter::new(Archetype::Duelist, Vec2::new(200.0, 300.0), true);
        let center = fighter.center();
        fighter.take_damage(10.0, center, 2.5);

        assert_eq!(fighter.vel.x, 0.0);
        assert_eq!(fighter.vel.y, -5.0);
        assert_eq!(fighter.hitstun, 25);
    }

    #[test]
    fn test_take_damage_cancels_charge() {
        let mut fighter = Fighter::new(Archetype::Ranger, Vec2::new(200.0, 300.0), true);
        fighter.charging = true;
        fighter.charge_level = 60;

        fighter.take_damage(5.0, Vec2::new(100.0, 300.0), 2.5);
        assert!(!fighter.charging);
        assert_eq!(fighter.charge_level, 0);
    }

    #[test]
    fn test_respawn_keeps_cooldowns_and_spent_jumps() {
        let mut fighter = Fighter::new(Archetype::Guardian, Vec2::new(200.0, 300.0), true);
        fighter.damage = 85.0;
        fighter.hitstun = 12;
        fighter.cooldowns = [10, 0, 44];
        fighter.jumps_remaining = 0;

        fighter.reset_for_respawn(Vec2::new(640.0, 100.0));
        assert_eq!(fighter.damage, 0.0);
        assert_eq!(fighter.hitstun, 0);
        assert_eq!(fighter.vel, Vec2::ZERO);
        // Moves stay on cooldown through a respawn, and a fighter KO'd
        // with spent jumps re-enters without them until touchdown
        assert_eq!(fighter.cooldowns, [10, 0, 44]);
        assert_eq!(fighter.jumps_remaining, 0);
    }
}
