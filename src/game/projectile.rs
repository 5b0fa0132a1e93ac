//! Projectiles
//!
//! Every ranged move spawns one of these. A projectile is a moving circle
//! (collision-tested as its bounding square) with fixed per-kind stats,
//! except the charge shot, whose stats scale with the charge level at
//! release. Projectiles never collide with their owner or with each other.

use serde::{Deserialize, Serialize};

use crate::core::{Rect, Vec2};
use crate::game::state::FighterId;

/// The distinct projectile types in the move catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectileKind {
    /// Slow-ish fireball, moderate damage.
    Fireball,
    /// Fast shard that gains downward drift each tick.
    IceShard,
    /// Very fast, short-lived missile.
    Missile,
    /// Slow, fat, high-damage orb.
    ArcaneOrb,
    /// Charge-scaled cannon shot.
    ChargeShot,
    /// Short-range flame cloud that shrinks as it travels.
    FlameBreath,
}

impl ProjectileKind {
    /// Display name, used in logs and events.
    pub fn name(self) -> &'static str {
        match self {
            ProjectileKind::Fireball => "fireball",
            ProjectileKind::IceShard => "ice_shard",
            ProjectileKind::Missile => "missile",
            ProjectileKind::ArcaneOrb => "arcane_orb",
            ProjectileKind::ChargeShot => "charge_shot",
            ProjectileKind::FlameBreath => "flame_breath",
        }
    }
}

/// How far past the stage edges a projectile may travel before despawning.
const OFFSTAGE_MARGIN: f32 = 50.0;

/// A live projectile.
///
/// `pos` is the center of the circle. `dir` is the horizontal travel sign
/// (+1 right, -1 left), fixed at spawn.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Projectile {
    /// Which kind of projectile this is
    pub kind: ProjectileKind,
    /// Center position
    pub pos: Vec2,
    /// Horizontal travel sign: +1.0 or -1.0
    pub dir: f32,
    /// Collision radius
    pub radius: f32,
    /// Horizontal speed per tick
    pub speed: f32,
    /// Damage dealt on hit
    pub damage: f32,
    /// Remaining lifetime in ticks
    pub lifetime: u32,
    /// Accumulated vertical drift velocity (ice shard only)
    pub vy: f32,
    /// Fighter that fired this projectile (immune to it)
    pub owner: FighterId,
    /// Cleared on hit or expiry; swept at the end of each tick
    pub active: bool,
}

impl Projectile {
    /// Spawn a projectile of `kind` from a fighter at `owner_pos`.
    ///
    /// `charge` only matters for [`ProjectileKind::ChargeShot`], scaling
    /// radius, speed, and damage in integer steps.
    pub fn spawn(
        kind: ProjectileKind,
        owner: FighterId,
        owner_pos: Vec2,
        facing_right: bool,
        charge: u32,
    ) -> Self {
        let dir = if facing_right { 1.0 } else { -1.0 };

        let (radius, speed, damage, lifetime, dx_right, dx_left, dy) = match kind {
            ProjectileKind::Fireball => (15.0, 10.0, 12.0, 100, 50.0, -10.0, 30.0),
            ProjectileKind::IceShard => (12.0, 14.0, 7.0, 100, 50.0, -10.0, 25.0),
            ProjectileKind::Missile => (8.0, 16.0, 6.0, 40, 50.0, -10.0, 30.0),
            ProjectileKind::ArcaneOrb => (20.0, 4.0, 16.0, 150, 50.0, -10.0, 30.0),
            ProjectileKind::ChargeShot => (
                (10 + charge / 10) as f32,
                (12 + charge / 20) as f32,
                (8 + charge / 8) as f32,
                100,
                50.0,
                -10.0,
                30.0,
            ),
            ProjectileKind::FlameBreath => (25.0, 3.0, 14.0, 25, 40.0, -30.0, 20.0),
        };

        let dx = if facing_right { dx_right } else { dx_left };

        Self {
            kind,
            pos: Vec2::new(owner_pos.x + dx, owner_pos.y + dy),
            dir,
            radius,
            speed,
            damage,
            lifetime,
            vy: 0.0,
            owner,
            active: true,
        }
    }

    /// Bounding square used for collision tests.
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_center(self.pos, self.radius, self.radius)
    }

    /// Advance one tick of motion and lifetime.
    ///
    /// Deactivates the projectile when its lifetime expires or it leaves
    /// the stage bounds (plus margin).
    pub fn advance(&mut self, stage_width: f32, stage_height: f32) {
        self.pos.x += self.speed * self.dir;

        match self.kind {
            ProjectileKind::IceShard => {
                self.vy += 0.3;
                self.pos.y += self.vy;
            }
            ProjectileKind::FlameBreath => {
                // The cloud disperses as it drifts
                self.radius = (self.radius - 1.0).max(5.0);
            }
            _ => {}
        }

        self.lifetime = self.lifetime.saturating_sub(1);
        if self.lifetime == 0 {
            self.active = false;
            return;
        }

        if self.pos.x < -OFFSTAGE_MARGIN
            || self.pos.x > stage_width + OFFSTAGE_MARGIN
            || self.pos.y > stage_height + OFFSTAGE_MARGIN
        {
            self.active = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_offsets_follow_facing() {
        let pos = Vec2::new(300.0, 400.0);
        let right = Projectile::spawn(ProjectileKind::Fireball, FighterId::P1, pos, true, 0);
        let left = Projectile::spawn(ProjectileKind::Fireball, FighterId::P1, pos, false, 0);

        assert_eq!(right.pos, Vec2::new(350.0, 430.0));
        assert_eq!(right.dir, 1.0);
        assert_eq!(left.pos, Vec2::new(290.0, 430.0));
        assert_eq!(left.dir, -1.0);
    }

    #[test]
    fn test_charge_shot_scaling() {
        let pos = Vec2::ZERO;
        let weak = Projectile::spawn(ProjectileKind::ChargeShot, FighterId::P1, pos, true, 0);
        let full = Projectile::spawn(ProjectileKind::ChargeShot, FighterId::P1, pos, true, 100);

        assert_eq!(weak.radius, 10.0);
        assert_eq!(weak.speed, 12.0);
        assert_eq!(weak.damage, 8.0);

        assert_eq!(full.radius, 20.0);
        assert_eq!(full.speed, 17.0);
        assert_eq!(full.damage, 20.0);
    }

    #[test]
    fn test_ice_shard_drifts_down() {
        let mut shard =
            Projectile::spawn(ProjectileKind::IceShard, FighterId::P1, Vec2::ZERO, true, 0);
        let y0 = shard.pos.y;
        shard.advance(1280.0, 720.0);
        shard.advance(1280.0, 720.0);
        // Drift accumulates: 0.3 then 0.6
        assert!((shard.pos.y - (y0 + 0.9)).abs() < 1e-5);
    }

    #[test]
    fn test_flame_breath_shrinks_to_floor() {
        let mut flame = Projectile::spawn(
            ProjectileKind::FlameBreath,
            FighterId::P2,
            Vec2::new(600.0, 300.0),
            true,
            0,
        );
        for _ in 0..24 {
            flame.advance(1280.0, 720.0);
        }
        assert_eq!(flame.radius, 5.0);
        assert!(flame.active);
        flame.advance(1280.0, 720.0);
        assert!(!flame.active);
    }

    #[test]
    fn test_offstage_despawn() {
        let mut missile = Projectile::spawn(
            ProjectileKind::Missile,
            FighterId::P1,
            Vec2::new(1250.0, 300.0),
            true,
            0,
        );
        // 16 units per tick: crosses x = 1330 within a few ticks
        for _ in 0..10 {
            missile.advance(1280.0, 720.0);
            if !missile.active {
                break;
            }
        }
        assert!(!missile.active);
        assert!(missile.lifetime > 0);
    }
}
