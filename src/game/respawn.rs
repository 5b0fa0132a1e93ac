//! Blast Boundaries and Respawn
//!
//! A fighter carried past the blast margin on any side loses a stock.
//! With stocks left they re-enter above center stage, at a small
//! RNG-jittered horizontal offset so repeated KOs do not produce pixel
//! identical respawns. With no stocks left they simply stay gone and
//! the end-of-tick check decides the match.

use tracing::info;

use crate::core::Vec2;
use crate::game::events::{GameEvent, GameEventData};
use crate::game::state::{FighterId, MatchState};
use crate::game::tick::MatchConfig;

/// Check one fighter against the blast boundaries, applying KO and
/// respawn if they are out.
pub fn check_bounds(state: &mut MatchState, id: FighterId, config: &MatchConfig) {
    let margin = config.blast_margin;
    let out = {
        let f = &state.fighters[id.index()];
        f.pos.y > config.stage_height + margin
            || f.pos.y < -margin
            || f.pos.x < -margin
            || f.pos.x > config.stage_width + margin
    };
    if !out {
        return;
    }

    let fighter = &mut state.fighters[id.index()];
    if fighter.stocks == 0 {
        return;
    }
    fighter.stocks -= 1;
    let stocks_remaining = fighter.stocks;

    info!(fighter = id.0, stocks_remaining, "fighter KO");
    let tick = state.tick;
    state.push_event(GameEvent::at(
        tick,
        GameEventData::FighterKo {
            fighter: id,
            stocks_remaining,
        },
    ));

    if stocks_remaining == 0 {
        return;
    }

    let jitter = state
        .rng
        .next_int_range(-config.respawn_jitter, config.respawn_jitter) as f32;
    let spawn = Vec2::new(config.stage_width / 2.0 + jitter, config.spawn_height);
    state.fighters[id.index()].reset_for_respawn(spawn);

    state.push_event(GameEvent::at(tick, GameEventData::FighterRespawned { fighter: id }));
}
