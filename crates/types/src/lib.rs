//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no I/O, making them usable in any context
//! (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - Pieces may hang above row 0 (negative rows) while spawning
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Default simulation step (~60 FPS) |
//! | `BASE_DROP_MS` | 1000 | Gravity interval at level 1 |
//! | `LOCK_DELAY_MS` | 500 | Grace period before a grounded piece locks |
//! | `LOCK_LIMIT` | 10 | Lock counter value that forces a lock |
//!
//! # Drop Intervals by Level
//!
//! Gravity speeds up by a tenth of `BASE_DROP_MS` per level and stops
//! speeding up at level 9:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 1000ms |
//! | 2 | 900ms |
//! | 5 | 600ms |
//! | 9+ | 200ms |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece: PieceKind = "t".parse().unwrap();
//! assert_eq!(piece, PieceKind::T);
//!
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//!
//! let action: GameAction = "hardDrop".parse().unwrap();
//! assert_eq!(action, GameAction::HardDrop);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Default simulation step in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// Lock delay once a piece is grounded (500ms)
pub const LOCK_DELAY_MS: u32 = 500;

/// Lock counter value at which a grounded piece locks immediately
pub const LOCK_LIMIT: u8 = 10;

/// Level above which gravity no longer speeds up
pub const LEVEL_SPEED_CAP: u32 = 9;

/// Score needed per level step (`level = score / SCORE_PER_LEVEL + 1`)
pub const SCORE_PER_LEVEL: u32 = 500;

/// Points for clearing N rows in one lock
///
/// - 0 rows: 0 points
/// - 1 row: 40 points
/// - 2 rows: 100 points
/// - 3 rows: 300 points
/// - 4 rows: 1200 points
///
/// No level multiplier is applied.
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];


/// Error returned when parsing a type from its string name fails
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown piece kind: {0:?}")]
    PieceKind(String),
    #[error("unknown rotation: {0:?}")]
    Rotation(String),
    #[error("unknown game action: {0:?}")]
    GameAction(String),
}

/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and color:
/// - **O**: Yellow, 2x2 square
/// - **I**: Cyan, 4-wide bar
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **L**: Orange, L-shaped
/// - **J**: Blue, J-shaped (mirror of L)
/// - **T**: Purple, T-shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    O,
    I,
    S,
    Z,
    L,
    J,
    T,
}

impl PieceKind {
    /// Number of piece kinds
    pub const LEN: usize = 7;

    /// Canonical order, used as the unshuffled bag
    pub const ALL: [PieceKind; Self::LEN] = [
        PieceKind::O,
        PieceKind::I,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::L,
        PieceKind::J,
        PieceKind::T,
    ];

    /// Side length of the piece's square shape matrix
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::O.side(), 2);
    /// assert_eq!(PieceKind::T.side(), 3);
    /// assert_eq!(PieceKind::I.side(), 4);
    /// ```
    pub fn side(&self) -> u8 {
        match self {
            PieceKind::O => 2,
            PieceKind::I => 4,
            PieceKind::S | PieceKind::Z | PieceKind::L | PieceKind::J | PieceKind::T => 3,
        }
    }

    /// Uppercase single-letter name
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::O => "O",
            PieceKind::I => "I",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::L => "L",
            PieceKind::J => "J",
            PieceKind::T => "T",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PieceKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "o" => Ok(PieceKind::O),
            "i" => Ok(PieceKind::I),
            "s" => Ok(PieceKind::S),
            "z" => Ok(PieceKind::Z),
            "l" => Ok(PieceKind::L),
            "j" => Ok(PieceKind::J),
            "t" => Ok(PieceKind::T),
            _ => Err(ParseError::PieceKind(s.to_string())),
        }
    }
}

/// Rotation states following the Super Rotation System (SRS)
///
/// - **North**: Spawn orientation (index 0)
/// - **East**: Rotated 90° clockwise (index 1)
/// - **South**: Rotated 180° (index 2)
/// - **West**: Rotated 90° counter-clockwise (index 3)
///
/// The rotation cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotation index in `0..4`, used to address kick tables
    pub fn index(&self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Rotation for an index, taken modulo 4
    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    /// Rotate clockwise (90°), wrapping West → North
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Rotate counter-clockwise (-90°), wrapping North → West
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_ccw(), Rotation::West);
    /// assert_eq!(Rotation::East.rotate_ccw(), Rotation::North);
    /// ```
    pub fn rotate_ccw(&self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::North => "north",
            Rotation::East => "east",
            Rotation::South => "south",
            Rotation::West => "west",
        }
    }
}

impl FromStr for Rotation {
    type Err = ParseError;

    /// Accepts full names or single letters (case-insensitive):
    /// "north" | "n", "east" | "e", "south" | "s", "west" | "w"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "north" | "n" => Ok(Rotation::North),
            "east" | "e" => Ok(Rotation::East),
            "south" | "s" => Ok(Rotation::South),
            "west" | "w" => Ok(Rotation::West),
            _ => Err(ParseError::Rotation(s.to_string())),
        }
    }
}

/// Discrete player intents fed into the engine
///
/// Each action maps 1:1 to an engine operation. Several actions may arrive
/// in one frame; they are applied in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, locking if it cannot move and time is up
    SoftDrop,
    /// Drop piece to the lowest valid row and lock it
    HardDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Swap with the held piece (once per lock)
    Hold,
    /// Reset the whole session
    Restart,
}

impl GameAction {
    pub const ALL: [GameAction; 8] = [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::HardDrop,
        GameAction::RotateCw,
        GameAction::RotateCcw,
        GameAction::Hold,
        GameAction::Restart,
    ];

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::Hold => "hold",
            GameAction::Restart => "restart",
        }
    }
}

impl FromStr for GameAction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "moveleft" => Ok(GameAction::MoveLeft),
            "moveright" => Ok(GameAction::MoveRight),
            "softdrop" => Ok(GameAction::SoftDrop),
            "harddrop" => Ok(GameAction::HardDrop),
            "rotatecw" => Ok(GameAction::RotateCw),
            "rotateccw" => Ok(GameAction::RotateCcw),
            "hold" => Ok(GameAction::Hold),
            "restart" => Ok(GameAction::Restart),
            _ => Err(ParseError::GameAction(s.to_string())),
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled with the color of the given piece kind
pub type Cell = Option<PieceKind>;

/// Where the active piece is in the lock cycle
///
/// - **Falling**: gravity moves the piece down
/// - **GroundedWaiting**: resting on something, inside the lock-delay budget
/// - **Locking**: transient; the piece was committed during this step and
///   the next piece has already spawned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LockPhase {
    #[default]
    Falling,
    GroundedWaiting,
    Locking,
}

/// Core-side notice emitted by an action or a lock.
///
/// Purely advisory: a presentation layer may play sounds or flash text for
/// them, and the engine does not care whether anyone reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    Rotated,
    RotateRejected,
    HardDropped,
    Held,
    HoldRejected,
    /// A piece was committed to the board
    Locked { lines_cleared: u8, score_delta: u32 },
    /// The next piece could not spawn and the session was reset
    ToppedOut,
}

impl GameEvent {
    /// Whether this notice reports a rejected request
    pub fn is_rejection(&self) -> bool {
        matches!(self, GameEvent::RotateRejected | GameEvent::HoldRejected)
    }
}
