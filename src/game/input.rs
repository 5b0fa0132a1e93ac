//! Intent Capture
//!
//! A fighter's input for one tick, already mapped from whatever device the
//! host polls. The simulation never sees keys, only intents: held movement
//! and attack flags plus the one release edge that charge shots need.

use serde::{Deserialize, Serialize};

/// Held intents and release edges for a single fighter on a single tick.
///
/// All flags are packed into one `u16`. Movement and attack flags are
/// level-triggered ("currently held"); `SECONDARY_RELEASED` is an edge the
/// host reports on the tick the key went up, so the simulation does not have
/// to diff consecutive frames itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFrame {
    flags: u16,
}

impl InputFrame {
    /// Move-left held
    pub const LEFT: u16 = 0x0001;
    /// Move-right held
    pub const RIGHT: u16 = 0x0002;
    /// Down/drop held (falls through passable platforms)
    pub const DOWN: u16 = 0x0004;
    /// Jump held
    pub const JUMP: u16 = 0x0008;
    /// Primary attack held
    pub const PRIMARY: u16 = 0x0010;
    /// Secondary attack held
    pub const SECONDARY: u16 = 0x0020;
    /// Special move held
    pub const SPECIAL: u16 = 0x0040;
    /// Secondary attack released this tick (edge, not level)
    pub const SECONDARY_RELEASED: u16 = 0x0080;

    /// Create an idle frame.
    pub const fn new() -> Self {
        Self { flags: 0 }
    }

    /// Create a frame from raw flags (tests, scripted demos).
    pub const fn from_flags(flags: u16) -> Self {
        Self { flags }
    }

    /// Builder-style flag set, for scripted inputs.
    #[must_use]
    pub const fn with(self, flag: u16) -> Self {
        Self {
            flags: self.flags | flag,
        }
    }

    /// Set or clear a flag.
    pub fn set(&mut self, flag: u16, on: bool) {
        if on {
            self.flags |= flag;
        } else {
            self.flags &= !flag;
        }
    }

    /// Raw flag word.
    #[inline]
    pub const fn flags(&self) -> u16 {
        self.flags
    }

    #[inline]
    fn has(&self, flag: u16) -> bool {
        self.flags & flag != 0
    }

    /// Move-left held this tick.
    #[inline]
    pub fn left(&self) -> bool {
        self.has(Self::LEFT)
    }

    /// Move-right held this tick.
    #[inline]
    pub fn right(&self) -> bool {
        self.has(Self::RIGHT)
    }

    /// Drop intent held this tick.
    #[inline]
    pub fn down(&self) -> bool {
        self.has(Self::DOWN)
    }

    /// Jump held this tick.
    #[inline]
    pub fn jump(&self) -> bool {
        self.has(Self::JUMP)
    }

    /// Primary attack held this tick.
    #[inline]
    pub fn primary(&self) -> bool {
        self.has(Self::PRIMARY)
    }

    /// Secondary attack held this tick.
    #[inline]
    pub fn secondary(&self) -> bool {
        self.has(Self::SECONDARY)
    }

    /// Special move held this tick.
    #[inline]
    pub fn special(&self) -> bool {
        self.has(Self::SPECIAL)
    }

    /// Secondary attack released this tick.
    #[inline]
    pub fn secondary_released(&self) -> bool {
        self.has(Self::SECONDARY_RELEASED)
    }

    /// True if nothing is held or reported.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.flags == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_frame() {
        let frame = InputFrame::new();
        assert!(frame.is_idle());
        assert!(!frame.left());
        assert!(!frame.jump());
        assert!(!frame.secondary_released());
    }

    #[test]
    fn test_with_builder() {
        let frame = InputFrame::new()
            .with(InputFrame::RIGHT)
            .with(InputFrame::PRIMARY);
        assert!(frame.right());
        assert!(frame.primary());
        assert!(!frame.left());
    }

    #[test]
    fn test_set_and_clear() {
        let mut frame = InputFrame::new();
        frame.set(InputFrame::JUMP, true);
        assert!(frame.jump());

        frame.set(InputFrame::JUMP, false);
        assert!(!frame.jump());
        assert!(frame.is_idle());
    }

    #[test]
    fn test_release_edge_is_independent_of_held_flag() {
        let frame = InputFrame::new().with(InputFrame::SECONDARY_RELEASED);
        assert!(frame.secondary_released());
        assert!(!frame.secondary());
    }
}
