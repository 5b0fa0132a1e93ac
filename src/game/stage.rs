//! Stage Geometry
//!
//! A stage is a set of platforms plus the two spawn points. The standard
//! layout is one wide solid platform low in the stage with two passable
//! side platforms above it, scaled from the configured stage dimensions.

use serde::{Deserialize, Serialize};

use crate::core::{Rect, Vec2};
use crate::game::state::{FIGHTER_HEIGHT, FIGHTER_WIDTH};

/// One platform.
///
/// Passable platforms only stop a fighter falling onto them from above,
/// and a held drop intent falls straight through. Solid platforms block
/// from every side.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    /// Platform bounds
    pub rect: Rect,
    /// True if fighters can pass through from below or drop through
    pub passable: bool,
}

impl Platform {
    /// A solid platform.
    pub fn solid(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
            passable: false,
        }
    }

    /// A drop-through platform.
    pub fn passable(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
            passable: true,
        }
    }
}

/// Platforms and spawn points for one match.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Stage {
    /// All platforms
    pub platforms: Vec<Platform>,
    /// Spawn points: player one left, player two right
    pub spawn_points: [Vec2; 2],
}

impl Stage {
    /// The standard battlefield layout for a stage of the given size.
    ///
    /// One solid main platform 60% of the stage width, centered, 150
    /// units above the bottom; two passable side platforms 200 units
    /// higher, inset from the main platform's edges. Fighters spawn
    /// standing on the side platforms.
    pub fn battlefield(width: f32, height: f32) -> Self {
        let main_w = width * 0.6;
        let main_x = (width - main_w) / 2.0;
        let main_y = height - 150.0;

        let side_y = height - 350.0;
        let side_w = 200.0;
        let left = Platform::passable(main_x + 50.0, side_y, side_w, 15.0);
        let right = Platform::passable(main_x + main_w - 250.0, side_y, side_w, 15.0);

        let spawn = |p: &Platform| {
            Vec2::new(
                p.rect.center().x - FIGHTER_WIDTH / 2.0,
                p.rect.top() - FIGHTER_HEIGHT,
            )
        };
        let spawn_points = [spawn(&left), spawn(&right)];

        Self {
            platforms: vec![
                Platform::solid(main_x, main_y, main_w, 20.0),
                left,
                right,
            ],
            spawn_points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_battlefield_layout() {
        let stage = Stage::battlefield(1280.0, 720.0);
        assert_eq!(stage.platforms.len(), 3);

        let main = &stage.platforms[0];
        assert!(!main.passable);
        assert_eq!(main.rect, Rect::new(256.0, 570.0, 768.0, 20.0));

        assert!(stage.platforms[1].passable);
        assert!(stage.platforms[2].passable);
        assert_eq!(stage.platforms[1].rect.top(), 370.0);
    }

    #[test]
    fn test_spawns_sit_on_side_platforms() {
        let stage = Stage::battlefield(1280.0, 720.0);
        for (i, spawn) in stage.spawn_points.iter().enumerate() {
            let plat = &stage.platforms[i + 1];
            assert_eq!(spawn.y, plat.rect.top() - FIGHTER_HEIGHT);
            assert!(spawn.x > plat.rect.left() && spawn.x < plat.rect.right());
        }
        // Left spawn is left of right spawn
        assert!(stage.spawn_points[0].x < stage.spawn_points[1].x);
    }
}
