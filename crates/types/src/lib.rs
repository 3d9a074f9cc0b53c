//! Core types module - shared data structures and constants
//!
//! Plain data used by every layer: the engine, the input translators and the
//! terminal renderer. Nothing in here knows about game rules.
//!
//! # Board Dimensions
//!
//! The board size is chosen at construction time. The defaults match the
//! classic playfield:
//!
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Rows**: 20 (indexed 0-19, top to bottom)
//! - **Spawn position**: (3, 0) on a 10-wide board
//!
//! # Timing Constants
//!
//! The engine has no clock. These are defaults for the hosts that drive it:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Host frame interval (~60 FPS) |
//! | `FALL_INTERVAL_MS` | 500 | Gravity tick interval |
//! | `GESTURE_MOVE_COOLDOWN_MS` | 150 | Minimum gap between gesture moves |
//! | `GESTURE_ROTATE_COOLDOWN_MS` | 500 | Minimum gap between gesture rotations |
//!
//! # Examples
//!
//! ```
//! use handblock_types::{Command, PieceColor, ShapeKind, DEFAULT_COLS, DEFAULT_ROWS};
//!
//! let kind = ShapeKind::from_str("t").unwrap();
//! assert_eq!(kind, ShapeKind::T);
//!
//! assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
//! assert_eq!(Command::MoveLeft.delta(), Some((-1, 0)));
//!
//! assert_eq!(PieceColor::Orange.rgb(), (255, 165, 0));
//! assert_eq!((DEFAULT_COLS, DEFAULT_ROWS), (10, 20));
//! ```

/// Default board width in cells
pub const DEFAULT_COLS: u16 = 10;

/// Default board height in cells
pub const DEFAULT_ROWS: u16 = 20;

/// Host frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Default gravity interval (one row every 500ms)
pub const FALL_INTERVAL_MS: u32 = 500;

/// Minimum time between two gesture-driven horizontal moves
pub const GESTURE_MOVE_COOLDOWN_MS: u32 = 150;

/// Minimum time between two pinch rotations
pub const GESTURE_ROTATE_COOLDOWN_MS: u32 = 500;

/// Points awarded for each cleared row
pub const LINE_CLEAR_POINTS: u32 = 100;

/// The seven tetromino shapes, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    Z,
    S,
    T,
    L,
    J,
}

impl ShapeKind {
    /// Every shape, in catalog order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::Z,
        ShapeKind::S,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::J,
    ];

    /// Parse shape kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use handblock_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("i"), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_str("J"), Some(ShapeKind::J));
    /// assert_eq!(ShapeKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "o" => Some(ShapeKind::O),
            "z" => Some(ShapeKind::Z),
            "s" => Some(ShapeKind::S),
            "t" => Some(ShapeKind::T),
            "l" => Some(ShapeKind::L),
            "j" => Some(ShapeKind::J),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::O => "o",
            ShapeKind::Z => "z",
            ShapeKind::S => "s",
            ShapeKind::T => "t",
            ShapeKind::L => "l",
            ShapeKind::J => "j",
        }
    }
}

/// Display color of a piece and of the cells it settles into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    Cyan,
    Red,
    Green,
    Blue,
    Orange,
    Yellow,
    Purple,
}

impl PieceColor {
    /// The fixed palette pieces draw their color from
    pub const PALETTE: [PieceColor; 7] = [
        PieceColor::Cyan,
        PieceColor::Red,
        PieceColor::Green,
        PieceColor::Blue,
        PieceColor::Orange,
        PieceColor::Yellow,
        PieceColor::Purple,
    ];

    /// 24-bit RGB value
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            PieceColor::Cyan => (0, 255, 255),
            PieceColor::Red => (255, 0, 0),
            PieceColor::Green => (0, 255, 0),
            PieceColor::Blue => (0, 0, 255),
            PieceColor::Orange => (255, 165, 0),
            PieceColor::Yellow => (255, 255, 0),
            PieceColor::Purple => (128, 0, 128),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceColor::Cyan => "cyan",
            PieceColor::Red => "red",
            PieceColor::Green => "green",
            PieceColor::Blue => "blue",
            PieceColor::Orange => "orange",
            PieceColor::Yellow => "yellow",
            PieceColor::Purple => "purple",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceColor)`: Cell settled by a piece of that color
pub type Cell = Option<PieceColor>;

/// Commands the engine accepts
///
/// Keyboard, gesture and gravity drivers all reduce to these four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down; also the gravity tick
    SoftDrop,
    /// Rotate piece 90° clockwise in place
    Rotate,
}

impl Command {
    /// Parse command from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use handblock_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveRight"), Some(Command::MoveRight));
    /// assert_eq!(Command::from_str("ROTATE"), Some(Command::Rotate));
    /// assert_eq!(Command::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" | "left" => Some(Command::MoveLeft),
            "moveright" | "right" => Some(Command::MoveRight),
            "softdrop" | "down" => Some(Command::SoftDrop),
            "rotate" => Some(Command::Rotate),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::Rotate => "rotate",
        }
    }

    /// Translation applied by a movement command, `None` for rotation
    pub fn delta(&self) -> Option<(i32, i32)> {
        match self {
            Command::MoveLeft => Some((-1, 0)),
            Command::MoveRight => Some((1, 0)),
            Command::SoftDrop => Some((0, 1)),
            Command::Rotate => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_strings_roundtrip() {
        for cmd in [
            Command::MoveLeft,
            Command::MoveRight,
            Command::SoftDrop,
            Command::Rotate,
        ] {
            assert_eq!(Command::from_str(cmd.as_str()), Some(cmd));
        }
    }

    #[test]
    fn palette_colors_are_distinct() {
        for (i, a) in PieceColor::PALETTE.iter().enumerate() {
            for b in &PieceColor::PALETTE[i + 1..] {
                assert_ne!(a.rgb(), b.rgb());
            }
        }
    }

    #[test]
    fn only_rotate_has_no_delta() {
        assert_eq!(Command::Rotate.delta(), None);
        assert_eq!(Command::SoftDrop.delta(), Some((0, 1)));
    }
}
