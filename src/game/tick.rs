//! Simulation Tick
//!
//! The single entry point that advances a match by one fixed step. Each
//! tick runs the same phase order for both fighters, then the shared
//! phases, so identical inputs on identical state always produce the
//! identical next state:
//!
//! 1. per fighter: hitstun gate, intents, motion + collision, attack
//!    window, blast boundaries, cooldowns
//! 2. projectile motion
//! 3. melee resolution, projectile resolution
//! 4. end-of-match check

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::SimError;
use crate::game::archetype::{MoveId, MoveSlot};
use crate::game::attack::{tick_attack, ActiveAttack};
use crate::game::combat::{resolve_melee, resolve_projectiles};
use crate::game::events::{GameEvent, GameEventData};
use crate::game::input::InputFrame;
use crate::game::physics::{capture_prev_pos, step_motion};
use crate::game::projectile::{Projectile, ProjectileKind};
use crate::game::respawn::check_bounds;
use crate::game::state::{
    FighterId, MatchState, MatchStatus, CHARGE_CAP, FIGHTER_HEIGHT, FIGHTER_WIDTH,
};

/// Horizontal velocity decay per tick when no direction is held.
const HORIZONTAL_DECAY: f32 = 0.8;

/// Effective gravity fraction for floaty fighters while falling.
const FLOATY_FALL_SCALE: f32 = 0.6;

/// Blink teleport distance.
const BLINK_DISTANCE: f32 = 150.0;

/// Cooldown set on the secondary slot when a charge begins, so the held
/// key does not re-enter the toggle every tick.
const CHARGE_START_COOLDOWN: u32 = 10;

/// Tunable match parameters.
///
/// The defaults are the standard ruleset; hosts may override, but
/// [`MatchConfig::validate`] rejects values the simulation cannot run on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Multiplier applied to horizontal velocity each tick
    pub air_resistance: f32,
    /// Stage width in units
    pub stage_width: f32,
    /// Stage height in units
    pub stage_height: f32,
    /// Distance past the stage edges before a KO
    pub blast_margin: f32,
    /// Vertical velocity set on jump (negative = up)
    pub jump_velocity: f32,
    /// Y coordinate fighters respawn at
    pub spawn_height: f32,
    /// Max horizontal respawn offset from center stage
    pub respawn_jitter: i32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            gravity: 0.8,
            air_resistance: 0.98,
            stage_width: 1280.0,
            stage_height: 720.0,
            blast_margin: 100.0,
            jump_velocity: -18.0,
            spawn_height: 100.0,
            respawn_jitter: 100,
        }
    }
}

impl MatchConfig {
    /// Reject configurations the simulation cannot run on.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.gravity <= 0.0 {
            return Err(SimError::InvalidConfig("gravity must be positive"));
        }
        if !(0.0 < self.air_resistance && self.air_resistance <= 1.0) {
            return Err(SimError::InvalidConfig("air_resistance must be in (0, 1]"));
        }
        if self.stage_width < FIGHTER_WIDTH * 4.0 || self.stage_height < FIGHTER_HEIGHT * 4.0 {
            return Err(SimError::InvalidConfig("stage too small for fighters"));
        }
        if self.blast_margin < 0.0 {
            return Err(SimError::InvalidConfig("blast_margin must be non-negative"));
        }
        if self.jump_velocity >= 0.0 {
            return Err(SimError::InvalidConfig("jump_velocity must be upward"));
        }
        if self.respawn_jitter < 0 {
            return Err(SimError::InvalidConfig("respawn_jitter must be non-negative"));
        }
        Ok(())
    }
}

/// What one tick produced.
#[derive(Clone, Debug)]
pub struct TickResult {
    /// Events emitted during this tick
    pub events: Vec<GameEvent>,
    /// True on the exact tick the match was decided
    pub match_ended: bool,
    /// The winner, once decided
    pub winner: Option<FighterId>,
}

/// Advance the match by one tick.
///
/// Once the match is decided this is a no-op that keeps reporting the
/// winner.
pub fn tick(state: &mut MatchState, inputs: &[InputFrame; 2], config: &MatchConfig) -> TickResult {
    if let MatchStatus::Winner(winner) = state.status {
        return TickResult {
            events: Vec::new(),
            match_ended: false,
            winner: Some(winner),
        };
    }

    state.tick += 1;

    for idx in 0..2 {
        let id = FighterId(idx as u8);
        let input = inputs[idx];

        if state.fighters[idx].hitstun > 0 {
            state.fighters[idx].hitstun -= 1;
        } else {
            apply_intents(state, id, &input, config);
        }

        {
            let f = &mut state.fighters[idx];
            if f.charging {
                f.charge_level = (f.charge_level + 1).min(CHARGE_CAP);
            }
            capture_prev_pos(f);
            let fall_scale = if f.archetype.is_floaty() {
                FLOATY_FALL_SCALE
            } else {
                1.0
            };
            step_motion(
                f,
                &state.platforms,
                config.gravity,
                config.air_resistance,
                fall_scale,
                input.down(),
            );
        }

        tick_attack(&mut state.fighters[idx]);
        check_bounds(state, id, config);

        for cd in state.fighters[idx].cooldowns.iter_mut() {
            *cd = cd.saturating_sub(1);
        }
    }

    for p in state.projectiles.iter_mut() {
        p.advance(config.stage_width, config.stage_height);
    }

    resolve_melee(state);
    resolve_projectiles(state);

    let (match_ended, winner) = check_end(state);
    TickResult {
        events: state.take_events(),
        match_ended,
        winner,
    }
}

/// Apply one fighter's held intents for this tick.
fn apply_intents(state: &mut MatchState, id: FighterId, input: &InputFrame, config: &MatchConfig) {
    let idx = id.index();

    // Charge release fires before anything else; merely letting go of the
    // key drops the charge without a shot.
    if state.fighters[idx].charging {
        if input.secondary_released() {
            let (level, pos, facing) = {
                let f = &mut state.fighters[idx];
                let level = f.charge_level;
                f.charging = false;
                f.charge_level = 0;
                (level, f.pos, f.facing_right)
            };
            let tick_no = state.tick;
            state
                .projectiles
                .push(Projectile::spawn(ProjectileKind::ChargeShot, id, pos, facing, level));
            state.push_event(GameEvent::at(
                tick_no,
                GameEventData::ChargeReleased { fighter: id, level },
            ));
            state.push_event(GameEvent::at(
                tick_no,
                GameEventData::ProjectileSpawned {
                    owner: id,
                    kind: ProjectileKind::ChargeShot,
                },
            ));
        } else if !input.secondary() {
            let f = &mut state.fighters[idx];
            f.charging = false;
            f.charge_level = 0;
        }
    }

    {
        let f = &mut state.fighters[idx];

        if input.left() {
            f.vel.x = -f.archetype.move_speed();
            f.facing_right = false;
        } else if input.right() {
            f.vel.x = f.archetype.move_speed();
            f.facing_right = true;
        } else {
            f.vel.x *= HORIZONTAL_DECAY;
        }

        if input.jump() && f.jumps_remaining > 0 {
            f.vel.y = config.jump_velocity;
            f.jumps_remaining -= 1;
            f.grounded = false;
        }
    }

    for slot in MoveSlot::ALL {
        let held = match slot {
            MoveSlot::Primary => input.primary(),
            MoveSlot::Secondary => input.secondary(),
            MoveSlot::Special => input.special(),
        };
        if !held || state.fighters[idx].cooldown(slot) > 0 {
            continue;
        }

        let archetype = state.fighters[idx].archetype;
        if archetype.charges_secondary() && slot == MoveSlot::Secondary {
            let f = &mut state.fighters[idx];
            if !f.charging {
                f.charging = true;
                f.charge_level = 0;
                f.cooldowns[slot.index()] = CHARGE_START_COOLDOWN;
            }
            continue;
        }

        let grounded = state.fighters[idx].grounded;
        if let Some(move_id) = archetype.move_for_slot(slot, grounded) {
            activate_move(state, id, move_id, slot, input, config);
        }
    }
}

/// Activate a catalog move: set the slot cooldown, apply the impulse and
/// move quirks, open the attack window, and spawn any projectile.
fn activate_move(
    state: &mut MatchState,
    id: FighterId,
    move_id: MoveId,
    slot: MoveSlot,
    input: &InputFrame,
    config: &MatchConfig,
) {
    let def = move_id.definition();
    let idx = id.index();

    let (pos, facing) = {
        let f = &mut state.fighters[idx];
        f.cooldowns[slot.index()] = def.cooldown;

        let sign = if f.facing_right { 1.0 } else { -1.0 };
        if let Some(impulse) = def.impulse {
            if let Some(forward) = impulse.forward {
                f.vel.x = forward * sign;
            }
            if let Some(vertical) = impulse.vertical {
                f.vel.y = vertical;
            }
        }

        match move_id {
            // The spin is also the air jump; only one jump comes back
            MoveId::ScrewAttack => f.jumps_remaining = 1,
            MoveId::Blink => {
                if input.right() {
                    f.pos.x += BLINK_DISTANCE;
                } else if input.left() {
                    f.pos.x -= BLINK_DISTANCE;
                } else if input.jump() {
                    f.pos.y -= BLINK_DISTANCE;
                } else {
                    // No direction held: blink away from where we face
                    f.pos.x -= BLINK_DISTANCE * sign;
                }
                f.pos.x = f.pos.x.clamp(0.0, config.stage_width - FIGHTER_WIDTH);
                f.pos.y = f.pos.y.clamp(0.0, config.stage_height - FIGHTER_HEIGHT);
                f.vel = crate::core::Vec2::ZERO;
            }
            _ => {}
        }

        if def.active_frames > 0 {
            f.attack = Some(ActiveAttack::new(move_id));
        }

        (f.pos, f.facing_right)
    };

    if let Some(kind) = def.projectile {
        let tick_no = state.tick;
        state
            .projectiles
            .push(Projectile::spawn(kind, id, pos, facing, 0));
        state.push_event(GameEvent::at(
            tick_no,
            GameEventData::ProjectileSpawned { owner: id, kind },
        ));
    }
}

/// Decide the match when exactly one fighter still has stocks.
fn check_end(state: &mut MatchState) -> (bool, Option<FighterId>) {
    let alive: Vec<FighterId> = (0..2u8)
        .map(FighterId)
        .filter(|id| state.fighters[id.index()].stocks > 0)
        .collect();

    if alive.len() == 1 {
        let winner = alive[0];
        state.status = MatchStatus::Winner(winner);
        info!(winner = winner.0, tick = state.tick, "match ended");
        let tick_no = state.tick;
        state.push_event(GameEvent::at(tick_no, GameEventData::MatchEnded { winner }));
        (true, Some(winner))
    } else {
        (false, None)
    }
}
