//! Fighter Archetypes and Move Catalog
//!
//! Each archetype binds the three move slots (primary, secondary, special)
//! to entries in a static [`MoveDefinition`] table. The tables are pure
//! data: damage, timing, hitbox geometry rule, optional self-impulse, and
//! optional projectile. The couple of moves with behavior a table cannot
//! express (teleport displacement, jump-count clamp, charge toggling) are
//! special-cased by the tick loop, keyed on [`MoveId`].

use serde::{Deserialize, Serialize};

use crate::core::{Rect, Vec2};
use crate::error::SimError;
use crate::game::projectile::ProjectileKind;

/// The six selectable fighter types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    /// Slow-ish bruiser with a huge hammer and a ground pound.
    Warrior,
    /// Fastest fighter; weak, spammable slashes and a dash.
    Duelist,
    /// Projectile zoner with a chargeable cannon shot.
    Ranger,
    /// Balanced swordfighter with distinct grounded/aerial primaries.
    Guardian,
    /// Floaty caster; all offense is projectiles plus a blink escape.
    Caster,
    /// Slow heavyweight with strong lunging melee.
    Brute,
}

/// All archetypes, in selection order.
pub const ARCHETYPES: [Archetype; 6] = [
    Archetype::Warrior,
    Archetype::Duelist,
    Archetype::Ranger,
    Archetype::Guardian,
    Archetype::Caster,
    Archetype::Brute,
];

impl Archetype {
    /// Parse an archetype from its lowercase name.
    ///
    /// Hosts pass menu selections through here; an unknown name is a fatal
    /// configuration error, rejected before any fighter is built.
    pub fn from_name(name: &str) -> Result<Self, SimError> {
        match name {
            "warrior" => Ok(Archetype::Warrior),
            "duelist" => Ok(Archetype::Duelist),
            "ranger" => Ok(Archetype::Ranger),
            "guardian" => Ok(Archetype::Guardian),
            "caster" => Ok(Archetype::Caster),
            "brute" => Ok(Archetype::Brute),
            other => Err(SimError::UnknownArchetype(other.to_string())),
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Archetype::Warrior => "warrior",
            Archetype::Duelist => "duelist",
            Archetype::Ranger => "ranger",
            Archetype::Guardian => "guardian",
            Archetype::Caster => "caster",
            Archetype::Brute => "brute",
        }
    }

    /// Ground movement speed in units per tick.
    pub fn move_speed(self) -> f32 {
        match self {
            Archetype::Warrior => 4.5,
            Archetype::Duelist => 6.5,
            Archetype::Ranger => 5.5,
            Archetype::Guardian => 5.0,
            Archetype::Caster => 4.0,
            Archetype::Brute => 4.0,
        }
    }

    /// Whether the secondary slot is a charge toggle instead of a move.
    #[inline]
    pub fn charges_secondary(self) -> bool {
        matches!(self, Archetype::Ranger)
    }

    /// Whether reduced effective gravity applies while falling.
    #[inline]
    pub fn is_floaty(self) -> bool {
        matches!(self, Archetype::Caster)
    }

    /// Resolve a move slot to a catalog entry.
    ///
    /// Returns `None` for the Ranger secondary (charge toggle, handled by
    /// the tick loop). The Guardian primary depends on whether the fighter
    /// is grounded.
    pub fn move_for_slot(self, slot: MoveSlot, grounded: bool) -> Option<MoveId> {
        use MoveSlot::*;
        match (self, slot) {
            (Archetype::Warrior, Primary) => Some(MoveId::HammerSmash),
            (Archetype::Warrior, Secondary) => Some(MoveId::FireBlast),
            (Archetype::Warrior, Special) => Some(MoveId::GroundPound),

            (Archetype::Duelist, Primary) => Some(MoveId::QuickSlash),
            (Archetype::Duelist, Secondary) => Some(MoveId::IceShardThrow),
            (Archetype::Duelist, Special) => Some(MoveId::ShadowDash),

            (Archetype::Ranger, Primary) => Some(MoveId::MissileShot),
            (Archetype::Ranger, Secondary) => None,
            (Archetype::Ranger, Special) => Some(MoveId::ScrewAttack),

            (Archetype::Guardian, Primary) => Some(if grounded {
                MoveId::ForwardSlash
            } else {
                MoveId::AerialSlash
            }),
            (Archetype::Guardian, Secondary) => Some(MoveId::ShieldBreaker),
            (Archetype::Guardian, Special) => Some(MoveId::BladeRush),

            (Archetype::Caster, Primary) => Some(MoveId::ArcaneOrb),
            (Archetype::Caster, Secondary) => Some(MoveId::FireBlast),
            (Archetype::Caster, Special) => Some(MoveId::Blink),

            (Archetype::Brute, Primary) => Some(MoveId::ClawSwipe),
            (Archetype::Brute, Secondary) => Some(MoveId::FlameBreath),
            (Archetype::Brute, Special) => Some(MoveId::BodySlam),
        }
    }
}

/// The three action slots every fighter has.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveSlot {
    /// Primary attack slot
    Primary,
    /// Secondary attack slot
    Secondary,
    /// Special move slot
    Special,
}

impl MoveSlot {
    /// All slots, in activation order.
    pub const ALL: [MoveSlot; 3] = [MoveSlot::Primary, MoveSlot::Secondary, MoveSlot::Special];

    /// Cooldown array index for this slot.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            MoveSlot::Primary => 0,
            MoveSlot::Secondary => 1,
            MoveSlot::Special => 2,
        }
    }
}

/// Every move in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveId {
    /// Warrior primary: slow, heavy hammer swing.
    HammerSmash,
    /// Warrior/Caster secondary: fireball projectile.
    FireBlast,
    /// Warrior special: fast-fall slam with a wide low hitbox.
    GroundPound,
    /// Duelist primary: fast, weak slash.
    QuickSlash,
    /// Duelist secondary: ice shard projectile with gravity drift.
    IceShardThrow,
    /// Duelist special: forward-up dash (no hitbox, pure movement).
    ShadowDash,
    /// Ranger primary: fast, short-lived missile projectile.
    MissileShot,
    /// Ranger charge release: cannon shot scaled by charge level.
    ChargeShot,
    /// Ranger special: rising spin with a body-sized hitbox.
    ScrewAttack,
    /// Guardian grounded primary.
    ForwardSlash,
    /// Guardian aerial primary, hitbox sits slightly higher.
    AerialSlash,
    /// Guardian secondary: tall, slow vertical breaker.
    ShieldBreaker,
    /// Guardian special: forward rush with a tracking blade hitbox.
    BladeRush,
    /// Caster primary: slow, fat orb projectile.
    ArcaneOrb,
    /// Caster special: 150-unit teleport, direction from held intents.
    Blink,
    /// Brute primary: lunging claw.
    ClawSwipe,
    /// Brute secondary: short-range flame cloud projectile with recoil.
    FlameBreath,
    /// Brute special: leaping slam, low hitstun multiplier.
    BodySlam,
}

impl MoveId {
    /// Look up the static definition for this move.
    pub fn definition(self) -> &'static MoveDefinition {
        match self {
            MoveId::HammerSmash => &HAMMER_SMASH,
            MoveId::FireBlast => &FIRE_BLAST,
            MoveId::GroundPound => &GROUND_POUND,
            MoveId::QuickSlash => &QUICK_SLASH,
            MoveId::IceShardThrow => &ICE_SHARD_THROW,
            MoveId::ShadowDash => &SHADOW_DASH,
            MoveId::MissileShot => &MISSILE_SHOT,
            MoveId::ChargeShot => &CHARGE_SHOT,
            MoveId::ScrewAttack => &SCREW_ATTACK,
            MoveId::ForwardSlash => &FORWARD_SLASH,
            MoveId::AerialSlash => &AERIAL_SLASH,
            MoveId::ShieldBreaker => &SHIELD_BREAKER,
            MoveId::BladeRush => &BLADE_RUSH,
            MoveId::ArcaneOrb => &ARCANE_ORB,
            MoveId::Blink => &BLINK,
            MoveId::ClawSwipe => &CLAW_SWIPE,
            MoveId::FlameBreath => &FLAME_BREATH,
            MoveId::BodySlam => &BODY_SLAM,
        }
    }
}

/// Facing-dependent hitbox placement rule.
///
/// The rect is always derived fresh from the owner's current position, so a
/// lunging fighter's hitbox tracks the lunge with no stored mutable rect.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HitboxRule {
    /// X offset from the owner's top-left when facing right
    pub dx_right: f32,
    /// X offset when facing left
    pub dx_left: f32,
    /// Y offset from the owner's top-left
    pub dy: f32,
    /// Hitbox width
    pub w: f32,
    /// Hitbox height
    pub h: f32,
}

impl HitboxRule {
    /// Compute the hitbox rect for an owner at `pos` facing `facing_right`.
    #[inline]
    pub fn rect(&self, pos: Vec2, facing_right: bool) -> Rect {
        let dx = if facing_right {
            self.dx_right
        } else {
            self.dx_left
        };
        Rect::new(pos.x + dx, pos.y + self.dy, self.w, self.h)
    }
}

/// Velocity impulse applied on activation.
///
/// `forward` is signed by facing (positive = toward the facing direction);
/// either axis may be left untouched.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Impulse {
    /// New vx magnitude along the facing direction, if set
    pub forward: Option<f32>,
    /// New vy, if set (negative = upward)
    pub vertical: Option<f32>,
}

/// Static definition of one move.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveDefinition {
    /// Which move this is
    pub id: MoveId,
    /// Melee damage on hit (unused when `hitbox` is None)
    pub damage: f32,
    /// Hitstun multiplier applied to melee damage
    pub hitstun_mult: f32,
    /// Cooldown in ticks, set on the activating slot
    pub cooldown: u32,
    /// Hitbox lifetime in ticks (0 = no attack window)
    pub active_frames: u32,
    /// Hitbox placement rule, if the move has a hitbox
    pub hitbox: Option<HitboxRule>,
    /// Self-velocity impulse, if any (lunges, leaps, recoil)
    pub impulse: Option<Impulse>,
    /// Projectile spawned on activation, if any
    pub projectile: Option<ProjectileKind>,
}

/// Default hitstun multiplier for melee hits and projectile impacts.
pub const DEFAULT_HITSTUN_MULT: f32 = 2.5;

static HAMMER_SMASH: MoveDefinition = MoveDefinition {
    id: MoveId::HammerSmash,
    damage: 20.0,
    hitstun_mult: DEFAULT_HITSTUN_MULT,
    cooldown: 45,
    active_frames: 15,
    hitbox: Some(HitboxRule {
        dx_right: 50.0,
        dx_left: -50.0,
        dy: 10.0,
        w: 45.0,
        h: 45.0,
    }),
    impulse: None,
    projectile: None,
};

static FIRE_BLAST: MoveDefinition = MoveDefinition {
    id: MoveId::FireBlast,
    damage: 0.0,
    hitstun_mult: DEFAULT_HITSTUN_MULT,
    cooldown: 70,
    active_frames: 0,
    hitbox: None,
    impulse: None,
    projectile: Some(ProjectileKind::Fireball),
};

static GROUND_POUND: MoveDefinition = MoveDefinition {
    id: MoveId::GroundPound,
    damage: 20.0,
    hitstun_mult: DEFAULT_HITSTUN_MULT,
    cooldown: 60,
    active_frames: 30,
    hitbox: Some(HitboxRule {
        dx_right: -30.0,
        dx_left: -30.0,
        dy: 50.0,
        w: 100.0,
        h: 30.0,
    }),
    // Kill horizontal drift and slam straight down
    impulse: Some(Impulse {
        forward: Some(0.0),
        vertical: Some(20.0),
    }),
    projectile: None,
};

static QUICK_SLASH: MoveDefinition = MoveDefinition {
    id: MoveId::QuickSlash,
    damage: 9.0,
    hitstun_mult: DEFAULT_HITSTUN_MULT,
    cooldown: 15,
    active_frames: 6,
    hitbox: Some(HitboxRule {
        dx_right: 45.0,
        dx_left: -45.0,
        dy: 15.0,
        w: 35.0,
        h: 30.0,
    }),
    impulse: None,
    projectile: None,
};

static ICE_SHARD_THROW: MoveDefinition = MoveDefinition {
    id: MoveId::IceShardThrow,
    damage: 0.0,
    hitstun_mult: DEFAULT_HITSTUN_MULT,
    cooldown: 35,
    active_frames: 0,
    hitbox: None,
    impulse: None,
    projectile: Some(ProjectileKind::IceShard),
};

// Damage is carried for parity with the other dash stats but the move has
// no hitbox, so it never deals it.
static SHADOW_DASH: MoveDefinition = MoveDefinition {
    id: MoveId::ShadowDash,
    damage: 9.0,
    hitstun_mult: DEFAULT_HITSTUN_MULT,
    cooldown: 40,
    active_frames: 15,
    hitbox: None,
    impulse: Some(Impulse {
        forward: Some(15.0),
        vertical: Some(-12.0),
    }),
    projectile: None,
};

static MISSILE_SHOT: MoveDefinition = MoveDefinition {
    id: MoveId::MissileShot,
    damage: 0.0,
    hitstun_mult: DEFAULT_HITSTUN_MULT,
    cooldown: 20,
    active_frames: 0,
    hitbox: None,
    impulse: None,
    projectile: Some(ProjectileKind::Missile),
};

static CHARGE_SHOT: MoveDefinition = MoveDefinition {
    id: MoveId::ChargeShot,
    damage: 0.0,
    hitstun_mult: DEFAULT_HITSTUN_MULT,
    cooldown: 0,
    active_frames: 0,
    hitbox: None,
    impulse: None,
    projectile: Some(ProjectileKind::ChargeShot),
};

static SCREW_ATTACK: MoveDefinition = MoveDefinition {
    id: MoveId::ScrewAttack,
    damage: 14.0,
    hitstun_mult: DEFAULT_HITSTUN_MULT,
    cooldown: 50,
    active_frames: 25,
    // Body rect (35x55) inflated by 40x20, anchored up-left
    hitbox: Some(HitboxRule {
        dx_right: -20.0,
        dx_left: -20.0,
        dy: -10.0,
        w: 75.0,
        h: 75.0,
    }),
    impulse: Some(Impulse {
        forward: Some(0.0),
        vertical: Some(-13.0),
    }),
    projectile: None,
};

static FORWARD_SLASH: MoveDefinition = MoveDefinition {
    id: MoveId::ForwardSlash,
    damage: 16.0,
    hitstun_mult: DEFAULT_HITSTUN_MULT,
    cooldown: 25,
    active_frames: 10,
    hitbox: Some(HitboxRule {
        dx_right: 35.0,
        dx_left: -65.0,
        dy: 10.0,
        w: 60.0,
        h: 45.0,
    }),
    impulse: None,
    projectile: None,
};

static AERIAL_SLASH: MoveDefinition = MoveDefinition {
    id: MoveId::AerialSlash,
    damage: 16.0,
    hitstun_mult: DEFAULT_HITSTUN_MULT,
    cooldown: 25,
    active_frames: 10,
    hitbox: Some(HitboxRule {
        dx_right: 35.0,
        dx_left: -65.0,
        dy: 5.0,
        w: 60.0,
        h: 50.0,
    }),
    impulse: None,
    projectile: None,
};

static SHIELD_BREAKER: MoveDefinition = MoveDefinition {
    id: MoveId::ShieldBreaker,
    damage: 22.0,
    hitstun_mult: DEFAULT_HITSTUN_MULT,
    cooldown: 60,
    active_frames: 20,
    hitbox: Some(HitboxRule {
        dx_right: 25.0,
        dx_left: -55.0,
        dy: -20.0,
        w: 50.0,
        h: 75.0,
    }),
    impulse: None,
    projectile: None,
};

static BLADE_RUSH: MoveDefinition = MoveDefinition {
    id: MoveId::BladeRush,
    damage: 6.0,
    hitstun_mult: DEFAULT_HITSTUN_MULT,
    cooldown: 40,
    active_frames: 20,
    hitbox: Some(HitboxRule {
        dx_right: 35.0,
        dx_left: -65.0,
        dy: 10.0,
        w: 60.0,
        h: 45.0,
    }),
    impulse: Some(Impulse {
        forward: Some(10.0),
        vertical: Some(0.0),
    }),
    projectile: None,
};

static ARCANE_ORB: MoveDefinition = MoveDefinition {
    id: MoveId::ArcaneOrb,
    damage: 0.0,
    hitstun_mult: DEFAULT_HITSTUN_MULT,
    cooldown: 80,
    active_frames: 0,
    hitbox: None,
    impulse: None,
    projectile: Some(ProjectileKind::ArcaneOrb),
};

static BLINK: MoveDefinition = MoveDefinition {
    id: MoveId::Blink,
    damage: 0.0,
    hitstun_mult: DEFAULT_HITSTUN_MULT,
    cooldown: 50,
    active_frames: 0,
    hitbox: None,
    impulse: None,
    projectile: None,
};

static CLAW_SWIPE: MoveDefinition = MoveDefinition {
    id: MoveId::ClawSwipe,
    damage: 22.0,
    hitstun_mult: DEFAULT_HITSTUN_MULT,
    cooldown: 35,
    active_frames: 12,
    hitbox: Some(HitboxRule {
        dx_right: 40.0,
        dx_left: -60.0,
        dy: 10.0,
        w: 50.0,
        h: 35.0,
    }),
    impulse: Some(Impulse {
        forward: Some(10.0),
        vertical: None,
    }),
    projectile: None,
};

static FLAME_BREATH: MoveDefinition = MoveDefinition {
    id: MoveId::FlameBreath,
    damage: 0.0,
    hitstun_mult: DEFAULT_HITSTUN_MULT,
    cooldown: 60,
    active_frames: 0,
    hitbox: None,
    // Recoil: shoved backward off the breath
    impulse: Some(Impulse {
        forward: Some(-2.0),
        vertical: None,
    }),
    projectile: Some(ProjectileKind::FlameBreath),
};

static BODY_SLAM: MoveDefinition = MoveDefinition {
    id: MoveId::BodySlam,
    damage: 25.0,
    hitstun_mult: 1.0,
    cooldown: 70,
    active_frames: 40,
    hitbox: Some(HitboxRule {
        dx_right: -25.0,
        dx_left: -25.0,
        dy: 45.0,
        w: 85.0,
        h: 30.0,
    }),
    impulse: Some(Impulse {
        forward: Some(8.0),
        vertical: Some(-10.0),
    }),
    projectile: None,
};
