//! Platform Collision
//!
//! Axis-separated resolution against the platform set, one axis at a
//! time, using the fighter's previous-tick rect to decide which side a
//! crossing came from. Horizontal resolution only applies to solid
//! platforms; vertical resolution handles landing (both kinds) and
//! head bonks (solid only).

use crate::game::stage::Platform;
use crate::game::state::{Fighter, MAX_JUMPS};

/// Extra tolerance below a platform top when testing a landing, so a fast
/// fall that tunnels a few units past the surface still catches.
const LANDING_SLACK: f32 = 2.0;

/// Tolerance above a platform bottom when testing a head bonk.
const BONK_SLACK: f32 = 2.0;

/// Resolve horizontal overlap after the X movement step.
///
/// Passable platforms never block sideways movement. A solid wall only
/// stops the fighter if the previous rect was fully on the near side,
/// so standing overlap from a vertical drop does not snap sideways.
pub fn resolve_horizontal(fighter: &mut Fighter, platforms: &[Platform]) {
    let body = fighter.body_rect();
    let prev = fighter.prev_body_rect();

    for plat in platforms {
        if plat.passable || !body.intersects(&plat.rect) {
            continue;
        }
        // Only treat as a wall when the rects already overlapped in Y
        if prev.bottom() <= plat.rect.top() || prev.top() >= plat.rect.bottom() {
            continue;
        }

        if fighter.vel.x > 0.0 && prev.right() <= plat.rect.left() {
            fighter.pos.x = plat.rect.left() - body.w;
            fighter.vel.x = 0.0;
        } else if fighter.vel.x < 0.0 && prev.left() >= plat.rect.right() {
            fighter.pos.x = plat.rect.right();
            fighter.vel.x = 0.0;
        }
    }
}

/// Resolve vertical overlap after the Y movement step.
///
/// `dropping` is the held drop intent: it lets the fighter fall through
/// passable platforms. Landing restores both jumps and, when the fighter
/// was airborne, kills horizontal velocity so launches end on touchdown.
pub fn resolve_vertical(fighter: &mut Fighter, platforms: &[Platform], dropping: bool) {
    let was_grounded = fighter.grounded;
    fighter.grounded = false;

    let body = fighter.body_rect();
    let prev = fighter.prev_body_rect();

    for plat in platforms {
        if !body.intersects(&plat.rect) {
            continue;
        }

        if fighter.vel.y >= 0.0 {
            if plat.passable && dropping {
                continue;
            }
            // Falling: land if we came from above (with slack for fast falls)
            if prev.bottom() <= plat.rect.top() + (fighter.vel.y + LANDING_SLACK) {
                fighter.pos.y = plat.rect.top() - body.h;
                fighter.vel.y = 0.0;
                fighter.grounded = true;
                fighter.jumps_remaining = MAX_JUMPS;
                if !was_grounded {
                    fighter.vel.x = 0.0;
                }
                break;
            }
        } else if !plat.passable && prev.top() >= plat.rect.bottom() - BONK_SLACK {
            // Rising into a solid ceiling
            fighter.pos.y = plat.rect.bottom();
            fighter.vel.y = 0.0;
            break;
        }
    }
}

/// Integrate one tick of motion and resolve collisions, both axes.
///
/// `fall_gravity_scale` trims gravity while falling for floaty fighters;
/// 1.0 means normal gravity throughout.
pub fn step_motion(
    fighter: &mut Fighter,
    platforms: &[Platform],
    gravity: f32,
    air_resistance: f32,
    fall_gravity_scale: f32,
    dropping: bool,
) {
    fighter.vel.x *= air_resistance;
    fighter.pos.x += fighter.vel.x;
    resolve_horizontal(fighter, platforms);

    // Gravity applies even while grounded; the vertical pass re-lands the
    // fighter every tick, which is what keeps `grounded` stable.
    fighter.vel.y += gravity;
    if fall_gravity_scale < 1.0 && !fighter.grounded && fighter.vel.y > 0.5 {
        fighter.vel.y -= gravity * (1.0 - fall_gravity_scale);
    }
    fighter.pos.y += fighter.vel.y;
    resolve_vertical(fighter, platforms, dropping);
}

/// Capture the start-of-movement position used by the collision passes.
#[inline]
pub fn capture_prev_pos(fighter: &mut Fighter) {
    fighter.prev_pos = fighter.pos;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vec2;
    use crate::game::archetype::Archetype;

    fn fighter_at(x: f32, y: f32) -> Fighter {
        let mut f = Fighter::new(Archetype::Warrior, Vec2::new(x, y), true);
        f.prev_pos = f.pos;
        f
    }

    fn solid_floor() -> Platform {
        Platform::solid(0.0, 500.0, 1000.0, 20.0)
    }

    #[test]
    fn test_landing_on_solid_platform() {
        let plat = solid_floor();
        let mut f = fighter_at(100.0, 430.0);
        f.vel.y = 20.0;
        f.vel.x = 6.0;
        f.jumps_remaining = 0;

        capture_prev_pos(&mut f);
        f.pos.y += f.vel.y;
        resolve_vertical(&mut f, &[plat], false);

        assert!(f.grounded);
        assert_eq!(f.pos.y, 500.0 - 55.0);
        assert_eq!(f.vel.y, 0.0);
        assert_eq!(f.jumps_remaining, MAX_JUMPS);
        // Airborne landing kills horizontal velocity
        assert_eq!(f.vel.x, 0.0);
    }

    #[test]
    fn test_grounded_walk_keeps_horizontal_velocity() {
        let plat = solid_floor();
        let mut f = fighter_at(100.0, 445.0);
        f.grounded = true;
        f.vel.x = 4.5;
        f.vel.y = 0.8; // one tick of gravity while standing

        capture_prev_pos(&mut f);
        f.pos.y += f.vel.y;
        resolve_vertical(&mut f, &[plat], false);

        assert!(f.grounded);
        assert_eq!(f.vel.x, 4.5);
    }

    #[test]
    fn test_drop_through_passable() {
        let plat = Platform::passable(0.0, 400.0, 300.0, 15.0);
        let mut f = fighter_at(100.0, 340.0);
        f.vel.y = 8.0;

        capture_prev_pos(&mut f);
        f.pos.y += f.vel.y;
        resolve_vertical(&mut f, &[plat], true);
        assert!(!f.grounded);

        // Without the drop intent the same fall lands
        let mut f = fighter_at(100.0, 340.0);
        f.vel.y = 8.0;
        capture_prev_pos(&mut f);
        f.pos.y += f.vel.y;
        resolve_vertical(&mut f, &[plat], false);
        assert!(f.grounded);
    }

    #[test]
    fn test_rise_through_passable_from_below() {
        let plat = Platform::passable(0.0, 400.0, 300.0, 15.0);
        let mut f = fighter_at(100.0, 405.0);
        f.vel.y = -18.0;

        capture_prev_pos(&mut f);
        f.pos.y += f.vel.y;
        resolve_vertical(&mut f, &[plat], false);

        // No head bonk on a passable platform
        assert_eq!(f.vel.y, -18.0);
        assert!(!f.grounded);
    }

    #[test]
    fn test_head_bonk_on_solid() {
        let plat = Platform::solid(0.0, 300.0, 300.0, 20.0);
        let mut f = fighter_at(100.0, 325.0);
        f.vel.y = -10.0;

        capture_prev_pos(&mut f);
        f.pos.y += f.vel.y;
        resolve_vertical(&mut f, &[plat], false);

        assert_eq!(f.pos.y, 320.0);
        assert_eq!(f.vel.y, 0.0);
        assert!(!f.grounded);
    }

    #[test]
    fn test_wall_stops_sideways_motion() {
        let wall = Platform::solid(200.0, 400.0, 50.0, 200.0);
        let mut f = fighter_at(160.0, 450.0);
        f.vel.x = 10.0;

        capture_prev_pos(&mut f);
        f.pos.x += f.vel.x;
        resolve_horizontal(&mut f, &[wall]);

        assert_eq!(f.pos.x, 200.0 - 35.0);
        assert_eq!(f.vel.x, 0.0);
    }

    #[test]
    fn test_passable_never_blocks_sideways() {
        let plat = Platform::passable(200.0, 400.0, 50.0, 15.0);
        let mut f = fighter_at(160.0, 395.0);
        f.vel.x = 10.0;

        capture_prev_pos(&mut f);
        f.pos.x += f.vel.x;
        resolve_horizontal(&mut f, &[plat]);

        assert_eq!(f.pos.x, 170.0);
        assert_eq!(f.vel.x, 10.0);
    }

    #[test]
    fn test_fast_fall_does_not_tunnel() {
        // Falling 30 units per tick, overshooting most of the platform's
        // thickness in a single step
        let plat = solid_floor();
        let mut f = fighter_at(100.0, 440.0);
        f.vel.y = 30.0;

        capture_prev_pos(&mut f);
        f.pos.y += f.vel.y;
        resolve_vertical(&mut f, &[plat], false);

        assert!(f.grounded);
        assert_eq!(f.pos.y, 445.0);
    }
}
