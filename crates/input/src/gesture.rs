//! Gesture translator for hand-tracking front ends.
//!
//! The tracker reports one [`Gesture`] per camera frame: which horizontal zone
//! the index fingertip is in and whether thumb and index are pinched. Holding
//! a hand in a side zone repeats the move at most once per move cooldown;
//! holding a pinch rotates at most once per rotate cooldown.

use arrayvec::ArrayVec;

use crate::types::{Command, GESTURE_MOVE_COOLDOWN_MS, GESTURE_ROTATE_COOLDOWN_MS};

/// Fingertip distance (in frame pixels) under which thumb and index count as
/// pinched
pub const PINCH_THRESHOLD_PX: f32 = 30.0;

/// Horizontal third of the camera frame the fingertip is in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandZone {
    Left,
    #[default]
    Center,
    Right,
}

/// One frame's worth of hand state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Gesture {
    pub zone: HandZone,
    pub pinch: bool,
}

impl Gesture {
    /// No hand, or a hand in the middle zone without a pinch
    pub fn neutral() -> Self {
        Self::default()
    }

    /// Classify raw landmark measurements from a mirrored frame
    ///
    /// `index_x` is the fingertip column, `frame_width` the frame width in
    /// pixels, `pinch_distance` the thumb-to-index distance in pixels.
    pub fn from_landmarks(index_x: f32, frame_width: f32, pinch_distance: f32) -> Self {
        let left_boundary = frame_width / 3.0;
        let right_boundary = 2.0 * frame_width / 3.0;
        let zone = if index_x < left_boundary {
            HandZone::Left
        } else if index_x > right_boundary {
            HandZone::Right
        } else {
            HandZone::Center
        };
        Self {
            zone,
            pinch: pinch_distance < PINCH_THRESHOLD_PX,
        }
    }
}

/// Commands produced for one frame (at most a move and a rotation)
pub type GestureCommands = ArrayVec<Command, 2>;

/// Rate-limits gestures into engine commands
#[derive(Debug, Clone)]
pub struct GestureTranslator {
    since_move_ms: u32,
    since_rotate_ms: u32,
    move_cooldown_ms: u32,
    rotate_cooldown_ms: u32,
}

impl GestureTranslator {
    pub fn new() -> Self {
        Self::with_config(GESTURE_MOVE_COOLDOWN_MS, GESTURE_ROTATE_COOLDOWN_MS)
    }

    pub fn with_config(move_cooldown_ms: u32, rotate_cooldown_ms: u32) -> Self {
        // Start ready so the first gesture acts immediately.
        Self {
            since_move_ms: move_cooldown_ms.saturating_add(1),
            since_rotate_ms: rotate_cooldown_ms.saturating_add(1),
            move_cooldown_ms,
            rotate_cooldown_ms,
        }
    }

    /// Advance time by `elapsed_ms` and translate this frame's gesture
    pub fn update(&mut self, elapsed_ms: u32, gesture: Gesture) -> GestureCommands {
        let mut out = GestureCommands::new();
        self.since_move_ms = self.since_move_ms.saturating_add(elapsed_ms);
        self.since_rotate_ms = self.since_rotate_ms.saturating_add(elapsed_ms);

        if self.since_move_ms > self.move_cooldown_ms {
            let command = match gesture.zone {
                HandZone::Left => Some(Command::MoveLeft),
                HandZone::Right => Some(Command::MoveRight),
                HandZone::Center => None,
            };
            if let Some(command) = command {
                out.push(command);
                self.since_move_ms = 0;
            }
        }

        if gesture.pinch && self.since_rotate_ms > self.rotate_cooldown_ms {
            out.push(Command::Rotate);
            self.since_rotate_ms = 0;
        }

        out
    }
}

impl Default for GestureTranslator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn left() -> Gesture {
        Gesture {
            zone: HandZone::Left,
            pinch: false,
        }
    }

    fn pinch() -> Gesture {
        Gesture {
            zone: HandZone::Center,
            pinch: true,
        }
    }

    #[test]
    fn test_first_gesture_acts_immediately() {
        let mut t = GestureTranslator::new();
        assert_eq!(t.update(0, left()).as_slice(), &[Command::MoveLeft]);
    }

    #[test]
    fn test_held_zone_repeats_after_cooldown() {
        let mut t = GestureTranslator::new();
        assert_eq!(t.update(0, left()).len(), 1);

        // 150ms is not enough; the gap must exceed the cooldown.
        assert!(t.update(100, left()).is_empty());
        assert!(t.update(50, left()).is_empty());
        assert_eq!(t.update(1, left()).as_slice(), &[Command::MoveLeft]);
    }

    #[test]
    fn test_pinch_rotates_at_most_every_500ms() {
        let mut t = GestureTranslator::new();
        assert_eq!(t.update(0, pinch()).as_slice(), &[Command::Rotate]);

        let mut rotations = 0;
        for _ in 0..30 {
            rotations += t.update(33, pinch()).len();
        }
        // 990ms of held pinch after the first rotation.
        assert_eq!(rotations, 1);
    }

    #[test]
    fn test_move_and_rotate_in_one_frame() {
        let mut t = GestureTranslator::new();
        let g = Gesture {
            zone: HandZone::Right,
            pinch: true,
        };
        assert_eq!(
            t.update(16, g).as_slice(),
            &[Command::MoveRight, Command::Rotate]
        );
    }

    #[test]
    fn test_neutral_produces_nothing() {
        let mut t = GestureTranslator::new();
        assert!(t.update(1000, Gesture::neutral()).is_empty());
    }

    #[test]
    fn test_from_landmarks_zones_and_pinch() {
        assert_eq!(Gesture::from_landmarks(100.0, 640.0, 80.0).zone, HandZone::Left);
        assert_eq!(Gesture::from_landmarks(320.0, 640.0, 80.0).zone, HandZone::Center);
        assert_eq!(Gesture::from_landmarks(600.0, 640.0, 80.0).zone, HandZone::Right);
        assert!(Gesture::from_landmarks(320.0, 640.0, 12.0).pinch);
        assert!(!Gesture::from_landmarks(320.0, 640.0, 30.0).pinch);
    }
}
