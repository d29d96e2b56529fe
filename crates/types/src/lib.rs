//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be
//! shared by the engine, the terminal renderer and the key map alike.
//!
//! # Arena Dimensions
//!
//! The default playfield is 12 columns by 20 rows. Both are configurable per
//! session; these constants are only the defaults.
//!
//! # Cell Ids
//!
//! | Id | Meaning |
//! |----|---------|
//! | 0 | empty |
//! | 1 | T |
//! | 2 | O |
//! | 3 | L |
//! | 4 | J |
//! | 5 | I |
//! | 6 | S |
//! | 7 | Z |
//!
//! # Examples
//!
//! ```
//! use arena_tetris_types::{GameAction, RotationDirection, Tetromino};
//!
//! assert_eq!(Tetromino::T.id(), 1);
//! assert_eq!(RotationDirection::Clockwise.reverse(), RotationDirection::CounterClockwise);
//! assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
//! ```

/// A cell of the arena or of a piece matrix.
///
/// `0` is empty, `1..=7` is occupied by the piece kind with that id.
pub type Cell = u8;

/// The empty cell value.
pub const EMPTY: Cell = 0;

/// Default arena width in cells.
pub const DEFAULT_ARENA_WIDTH: u8 = 12;

/// Default arena height in cells.
pub const DEFAULT_ARENA_HEIGHT: u8 = 20;

/// Smallest accepted arena side; the 4x4 I piece must fit.
pub const MIN_ARENA_SIDE: u8 = 4;

/// Gravity interval in milliseconds (one row per second).
pub const DEFAULT_DROP_INTERVAL_MS: u32 = 1000;

/// Host frame interval in milliseconds (16ms ≈ 60 FPS).
pub const TICK_MS: u32 = 16;

/// Points awarded per cleared row.
pub const SCORE_PER_LINE: u32 = 10;

/// How long the line-clear banner stays visible (milliseconds).
pub const CLEAR_BANNER_MS: u32 = 900;

/// The seven tetromino kinds.
///
/// The discriminant order is the catalog order `T J L O S Z I` used when
/// picking a random piece; the cell id of each kind is given by [`Tetromino::id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tetromino {
    T,
    J,
    L,
    O,
    S,
    Z,
    I,
}

impl Tetromino {
    /// Every kind, in catalog order.
    pub const ALL: [Tetromino; 7] = [
        Tetromino::T,
        Tetromino::J,
        Tetromino::L,
        Tetromino::O,
        Tetromino::S,
        Tetromino::Z,
        Tetromino::I,
    ];

    /// Cell id written into the arena for this kind.
    pub fn id(&self) -> Cell {
        match self {
            Tetromino::T => 1,
            Tetromino::O => 2,
            Tetromino::L => 3,
            Tetromino::J => 4,
            Tetromino::I => 5,
            Tetromino::S => 6,
            Tetromino::Z => 7,
        }
    }
}

/// Direction of a quarter turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

impl RotationDirection {
    /// The opposite turn, used to undo a rotation.
    pub fn reverse(&self) -> Self {
        match self {
            RotationDirection::Clockwise => RotationDirection::CounterClockwise,
            RotationDirection::CounterClockwise => RotationDirection::Clockwise,
        }
    }
}

/// Commands the input collaborator can issue to a session.
///
/// Movement and rotation are only honored while the session is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down, locking it if it is blocked
    SoftDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Reset the arena and score and start running
    Start,
    /// Halt a running session
    Stop,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_tetris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("rotateCw"), Some(GameAction::RotateCw));
    /// assert_eq!(GameAction::from_str("START"), Some(GameAction::Start));
    /// assert_eq!(GameAction::from_str("pause"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            "start" => Some(GameAction::Start),
            "stop" => Some(GameAction::Stop),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::Start => "start",
            GameAction::Stop => "stop",
        }
    }

    /// Whether the action is a piece command (ignored unless running).
    pub fn is_piece_command(&self) -> bool {
        !matches!(self, GameAction::Start | GameAction::Stop)
    }
}
