//! Hit Resolution
//!
//! Melee hitbox vs body checks and projectile vs body checks, run after
//! every fighter has moved for the tick. Both fighters' hitboxes are
//! evaluated against positions from the same point in the tick, so
//! trades land symmetrically regardless of player index.

use tracing::debug;

use crate::core::Vec2;
use crate::game::archetype::{MoveId, DEFAULT_HITSTUN_MULT};
use crate::game::events::{GameEvent, GameEventData};
use crate::game::state::{FighterId, MatchState};

struct PendingHit {
    attacker: FighterId,
    victim: FighterId,
    move_id: MoveId,
    attacker_center: Vec2,
}

/// Resolve melee attacks for the current tick.
///
/// Hits are collected against a consistent snapshot first and applied
/// after, so a mutual hit damages both fighters. Each attack activation
/// connects with a given victim at most once.
pub fn resolve_melee(state: &mut MatchState) {
    let mut hits: Vec<PendingHit> = Vec::new();

    for attacker_idx in 0..2 {
        let attacker = FighterId(attacker_idx as u8);
        let victim = attacker.opponent();

        let a = &state.fighters[attacker.index()];
        let v = &state.fighters[victim.index()];

        let Some(attack) = a.attack.as_ref() else {
            continue;
        };
        if attack.has_struck(victim) {
            continue;
        }
        let Some(hitbox) = attack.hitbox(a.pos, a.facing_right) else {
            continue;
        };
        if hitbox.intersects(&v.body_rect()) {
            hits.push(PendingHit {
                attacker,
                victim,
                move_id: attack.move_id,
                attacker_center: a.center(),
            });
        }
    }

    let tick = state.tick;
    for hit in hits {
        let def = hit.move_id.definition();

        let victim = &mut state.fighters[hit.victim.index()];
        victim.take_damage(def.damage, hit.attacker_center, def.hitstun_mult);
        let victim_total = victim.damage;
        let hitstun = victim.hitstun;

        if let Some(attack) = state.fighters[hit.attacker.index()].attack.as_mut() {
            attack.mark_struck(hit.victim);
        }

        debug!(
            attacker = hit.attacker.0,
            victim = hit.victim.0,
            move_id = ?hit.move_id,
            damage = def.damage,
            victim_total,
            "melee hit"
        );
        state.push_event(GameEvent::at(
            tick,
            GameEventData::HitLanded {
                attacker: hit.attacker,
                victim: hit.victim,
                move_id: hit.move_id,
                damage: def.damage,
                victim_total,
                hitstun,
            },
        ));
    }
}

/// Resolve projectile impacts for the current tick.
///
/// A projectile ignores its owner and fighters already in hitstun, and
/// is consumed by its first hit. Spent projectiles are swept afterwards.
pub fn resolve_projectiles(state: &mut MatchState) {
    let tick = state.tick;

    for p_idx in 0..state.projectiles.len() {
        if !state.projectiles[p_idx].active {
            continue;
        }

        let (owner, kind, damage, p_pos, p_rect) = {
            let p = &state.projectiles[p_idx];
            (p.owner, p.kind, p.damage, p.pos, p.rect())
        };

        for f_idx in 0..2 {
            let victim = FighterId(f_idx as u8);
            if victim == owner {
                continue;
            }
            let fighter = &state.fighters[victim.index()];
            if fighter.hitstun > 0 || !p_rect.intersects(&fighter.body_rect()) {
                continue;
            }

            state.fighters[victim.index()].take_damage(damage, p_pos, DEFAULT_HITSTUN_MULT);
            state.projectiles[p_idx].active = false;

            debug!(
                owner = owner.0,
                victim = victim.0,
                kind = kind.name(),
                damage,
                "projectile hit"
            );
            state.push_event(GameEvent::at(
                tick,
                GameEventData::ProjectileHit {
                    owner,
                    victim,
                    kind,
                    damage,
                },
            ));
            break;
        }
    }

    state.projectiles.retain(|p| p.active);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::archetype::Archetype;
    use crate::game::attack::ActiveAttack;
    use crate::game::projectile::{Projectile, ProjectileKind};
    use crate::game::stage::Stage;

    fn two_fighter_state() -> MatchState {
        MatchState::new(
            7,
            [Archetype::Warrior, Archetype::Duelist],
            Stage::battlefield(1280.0, 720.0),
        )
    }

    fn place(state: &mut MatchState, id: FighterId, x: f32, y: f32, facing_right: bool) {
        let f = &mut state.fighters[id.index()];
        f.pos = Vec2::new(x, y);
        f.prev_pos = f.pos;
        f.facing_right = facing_right;
    }

    #[test]
    fn test_melee_hit_applies_once_per_activation() {
        let mut state = two_fighter_state();
        place(&mut state, FighterId::P1, 300.0, 400.0, true);
        // Hammer hitbox reaches x 350..395; put the victim inside it
        place(&mut state, FighterId::P2, 360.0, 400.0, false);
        state.fighters[0].attack = Some(ActiveAttack::new(MoveId::HammerSmash));

        resolve_melee(&mut state);
        assert_eq!(state.fighters[1].damage, 20.0);

        // Same activation, next tick: victim stays inside, no second hit
        resolve_melee(&mut state);
        assert_eq!(state.fighters[1].damage, 20.0);
    }

    #[test]
    fn test_melee_miss_out_of_range() {
        let mut state = two_fighter_state();
        place(&mut state, FighterId::P1, 300.0, 400.0, true);
        place(&mut state, FighterId::P2, 600.0, 400.0, false);
        state.fighters[0].attack = Some(ActiveAttack::new(MoveId::HammerSmash));

        resolve_melee(&mut state);
        assert_eq!(state.fighters[1].damage, 0.0);
    }

    #[test]
    fn test_melee_hitbox_respects_facing() {
        let mut state = two_fighter_state();
        // Victim to the attacker's right, attacker facing left: whiff
        place(&mut state, FighterId::P1, 300.0, 400.0, false);
        place(&mut state, FighterId::P2, 360.0, 400.0, false);
        state.fighters[0].attack = Some(ActiveAttack::new(MoveId::HammerSmash));

        resolve_melee(&mut state);
        assert_eq!(state.fighters[1].damage, 0.0);
    }

    #[test]
    fn test_mutual_hits_both_land() {
        let mut state = two_fighter_state();
        place(&mut state, FighterId::P1, 300.0, 400.0, true);
        place(&mut state, FighterId::P2, 350.0, 400.0, false);
        state.fighters[0].attack = Some(ActiveAttack::new(MoveId::HammerSmash));
        state.fighters[1].attack = Some(ActiveAttack::new(MoveId::QuickSlash));

        resolve_melee(&mut state);
        // Both hitboxes overlapped both bodies before either hit applied
        assert_eq!(state.fighters[0].damage, 9.0);
        assert_eq!(state.fighters[1].damage, 20.0);
    }

    #[test]
    fn test_projectile_ignores_owner_and_hitstun() {
        let mut state = two_fighter_state();
        place(&mut state, FighterId::P1, 300.0, 400.0, true);
        place(&mut state, FighterId::P2, 500.0, 400.0, false);

        // Projectile sitting on top of its owner: no self-hit
        let on_owner = Projectile::spawn(
            ProjectileKind::Fireball,
            FighterId::P1,
            Vec2::new(250.0, 370.0),
            true,
            0,
        );
        state.projectiles.push(on_owner);
        resolve_projectiles(&mut state);
        assert_eq!(state.fighters[0].damage, 0.0);
        assert_eq!(state.projectiles.len(), 1);

        // Victim in hitstun is immune
        state.fighters[1].hitstun = 10;
        let mut p = Projectile::spawn(
            ProjectileKind::Fireball,
            FighterId::P1,
            Vec2::new(450.0, 370.0),
            true,
            0,
        );
        p.pos = state.fighters[1].center();
        state.projectiles.push(p);
        resolve_projectiles(&mut state);
        assert_eq!(state.fighters[1].damage, 0.0);
        assert_eq!(state.projectiles.len(), 2);

        // Hitstun over: the same projectile connects and is consumed
        state.fighters[1].hitstun = 0;
        resolve_projectiles(&mut state);
        assert_eq!(state.fighters[1].damage, 12.0);
        assert_eq!(state.projectiles.len(), 1);
    }

    proptest::proptest! {
        #[test]
        fn prop_total_damage_is_order_independent(
            amounts in proptest::collection::vec(0.5f32..30.0, 1..20),
        ) {
            let total = |seq: &[f32]| {
                let mut f = crate::game::state::Fighter::new(
                    Archetype::Guardian,
                    Vec2::new(400.0, 300.0),
                    true,
                );
                for &amount in seq {
                    f.take_damage(amount, Vec2::new(350.0, 300.0), DEFAULT_HITSTUN_MULT);
                }
                f.damage
            };

            let forward = total(&amounts);
            let mut reversed = amounts.clone();
            reversed.reverse();
            // Knockback depends on order; accumulated damage must not
            proptest::prop_assert!((forward - total(&reversed)).abs() < 1e-3);
        }
    }

    #[test]
    fn test_projectile_hit_emits_event() {
        let mut state = two_fighter_state();
        place(&mut state, FighterId::P1, 300.0, 400.0, true);
        place(&mut state, FighterId::P2, 500.0, 400.0, false);

        let mut p = Projectile::spawn(
            ProjectileKind::Missile,
            FighterId::P1,
            Vec2::ZERO,
            true,
            0,
        );
        p.pos = state.fighters[1].center();
        state.projectiles.push(p);

        resolve_projectiles(&mut state);
        let events = state.take_events();
        assert!(events.iter().any(|e| matches!(
            e.data,
            GameEventData::ProjectileHit {
                victim: FighterId::P2,
                kind: ProjectileKind::Missile,
                ..
            }
        )));
    }
}
