//! Active Attack Window
//!
//! A fighter holds at most one of these at a time: the move currently
//! presenting a hitbox (or, for hitbox-less dashes, just an animation
//! window). The record also remembers which victims this activation has
//! already struck, so a 30-frame hitbox connects once per target rather
//! than once per frame.

use serde::{Deserialize, Serialize};

use crate::core::{Rect, Vec2};
use crate::game::archetype::MoveId;
use crate::game::state::{Fighter, FighterId};

/// The attack window a fighter is currently inside.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ActiveAttack {
    /// The move being performed
    pub move_id: MoveId,
    /// Ticks left in the active window
    pub frames_remaining: u32,
    /// Victims already hit by this activation
    struck: Vec<FighterId>,
}

impl ActiveAttack {
    /// Start an attack window for `move_id`.
    pub fn new(move_id: MoveId) -> Self {
        Self {
            move_id,
            frames_remaining: move_id.definition().active_frames,
            struck: Vec::new(),
        }
    }

    /// Current hitbox, derived from the owner's live position and facing.
    ///
    /// `None` for moves without a hitbox (dashes, blink windows).
    pub fn hitbox(&self, pos: Vec2, facing_right: bool) -> Option<Rect> {
        self.move_id
            .definition()
            .hitbox
            .map(|rule| rule.rect(pos, facing_right))
    }

    /// Whether this activation has already connected with `victim`.
    pub fn has_struck(&self, victim: FighterId) -> bool {
        self.struck.contains(&victim)
    }

    /// Record a connection with `victim`.
    pub fn mark_struck(&mut self, victim: FighterId) {
        if !self.struck.contains(&victim) {
            self.struck.push(victim);
        }
    }
}

/// Advance the fighter's attack window by one tick, clearing it on expiry.
pub fn tick_attack(fighter: &mut Fighter) {
    if let Some(attack) = fighter.attack.as_mut() {
        attack.frames_remaining = attack.frames_remaining.saturating_sub(1);
        if attack.frames_remaining == 0 {
            fighter.attack = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::archetype::Archetype;

    #[test]
    fn test_window_counts_down_and_clears() {
        let mut fighter = Fighter::new(Archetype::Duelist, Vec2::new(100.0, 100.0), true);
        fighter.attack = Some(ActiveAttack::new(MoveId::QuickSlash));

        for _ in 0..5 {
            tick_attack(&mut fighter);
            assert!(fighter.attack.is_some());
        }
        tick_attack(&mut fighter);
        assert!(fighter.attack.is_none());
    }

    #[test]
    fn test_hitbox_tracks_position() {
        let attack = ActiveAttack::new(MoveId::ClawSwipe);
        let a = attack.hitbox(Vec2::new(0.0, 0.0), true).expect("hitbox");
        let b = attack.hitbox(Vec2::new(50.0, 0.0), true).expect("hitbox");
        assert_eq!(b.x - a.x, 50.0);
    }

    #[test]
    fn test_dash_has_window_but_no_hitbox() {
        let attack = ActiveAttack::new(MoveId::ShadowDash);
        assert_eq!(attack.frames_remaining, 15);
        assert!(attack.hitbox(Vec2::ZERO, true).is_none());
    }

    #[test]
    fn test_struck_set() {
        let mut attack = ActiveAttack::new(MoveId::HammerSmash);
        assert!(!attack.has_struck(FighterId::P2));
        attack.mark_struck(FighterId::P2);
        attack.mark_struck(FighterId::P2);
        assert!(attack.has_struck(FighterId::P2));
        assert!(!attack.has_struck(FighterId::P1));
    }
}
