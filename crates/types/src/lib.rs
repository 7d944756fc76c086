//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no dependencies (serde derives are behind the
//! optional `serde` feature), so they can be used from the engine, the input
//! layer and the terminal view alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 40 rows (indexed 0-39), of which rows 0-19 are the hidden
//!   buffer and rows 20-39 are visible
//! - **Spawn position**: row 18, column 3 (top-left of the 4x4 bounding box)
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds and are carried as `f64`, because the
//! engine is driven by a floating point frame delta:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_GRAVITY_MS` | 500 | Gravity interval at level 0 |
//! | `GRAVITY_DECAY` | 0.8 | Per-level gravity multiplier |
//! | `MIN_GRAVITY_MS` | 50 | Gravity interval floor |
//! | `SOFT_DROP_GRAVITY_MS` | 50 | Gravity interval while soft dropping |
//! | `LOCK_DELAY_MS` | 500 | Time before a resting piece locks |
//! | `FLASH_STEP_MS` | 100 | Duration of one tetris flash inversion |
//!
//! # Examples
//!
//! ```
//! use termv_types::{PieceKind, Rotation, RotationDirection, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! assert_eq!(PieceKind::T.color_id(), 3);
//! assert_eq!(PieceKind::from_color_id(3), Some(PieceKind::T));
//!
//! let rotated = Rotation::North.rotated(RotationDirection::CounterClockwise);
//! assert_eq!(rotated, Rotation::West);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 40);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells, hidden buffer included (40 rows)
pub const BOARD_HEIGHT: u8 = 40;

/// Rows above the visible playfield where pieces spawn (20 rows)
pub const HIDDEN_HEIGHT: u8 = 20;

/// Rows shown to the player (20 rows)
pub const VISIBLE_HEIGHT: u8 = BOARD_HEIGHT - HIDDEN_HEIGHT;

/// Spawn row of the piece bounding box: two rows above the visible region.
pub const SPAWN_ROW: i8 = HIDDEN_HEIGHT as i8 - 2;

/// Spawn column of the piece bounding box: a 4-wide box centered on 10 columns.
pub const SPAWN_COL: i8 = 3;

/// Gravity interval at level 0 (500ms per row)
pub const BASE_GRAVITY_MS: f64 = 500.0;

/// Each level multiplies the gravity interval by this factor.
pub const GRAVITY_DECAY: f64 = 0.8;

/// Gravity interval never drops below this floor.
pub const MIN_GRAVITY_MS: f64 = 50.0;

/// Gravity interval while soft drop is held.
pub const SOFT_DROP_GRAVITY_MS: f64 = 50.0;

/// Lock delay when a piece can no longer fall (500ms)
pub const LOCK_DELAY_MS: f64 = 500.0;

/// One inversion of the tetris flash lasts this long.
pub const FLASH_STEP_MS: f64 = 100.0;

/// Inversions played after a tetris (2 full on/off cycles).
pub const TETRIS_FLASH_TOGGLES: u8 = 4;

/// Lines needed per level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Points per row descended by gravity while soft dropping.
pub const SOFT_DROP_POINTS: u32 = 1;

/// Points per row descended by a hard drop.
pub const HARD_DROP_POINTS_PER_ROW: u32 = 2;

/// Line clear scoring table, indexed by lines cleared at once.
///
/// Points are multiplied by (level + 1).
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Frame pacing interval for the terminal front-end (16ms ≈ 60 FPS)
pub const TICK_MS: u64 = 16;

/// Soft drop is treated as released this long after the last Down key press.
///
/// Terminals generally do not report key releases.
pub const SOFT_DROP_GRACE_MS: f64 = 150.0;


/// The seven tetromino piece kinds
///
/// The declaration order is significant: a kind's ordinal selects its shape
/// table and its colour id is `ordinal + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in ordinal order (the order a fresh bag is filled in).
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Ordinal of the kind (0-6).
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Board colour id for this kind (1-7).
    ///
    /// # Examples
    ///
    /// ```
    /// use termv_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.color_id(), 1);
    /// assert_eq!(PieceKind::L.color_id(), 7);
    /// ```
    pub fn color_id(&self) -> u8 {
        self.index() as u8 + 1
    }

    /// Inverse of [`PieceKind::color_id`]; `None` for 0 (empty) or anything above 7.
    pub fn from_color_id(id: u8) -> Option<Self> {
        match id {
            1..=7 => Some(Self::ALL[id as usize - 1]),
            _ => None,
        }
    }

    /// Single uppercase letter naming the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// Direction of a rotation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationDirection {
    /// +1 rotation step
    Clockwise,
    /// -1 rotation step
    CounterClockwise,
}

impl RotationDirection {
    /// Signed step applied to the rotation index.
    pub fn delta(&self) -> i8 {
        match self {
            RotationDirection::Clockwise => 1,
            RotationDirection::CounterClockwise => -1,
        }
    }
}

/// Rotation states of a piece
///
/// - **North**: Spawn orientation (index 0)
/// - **East**: One clockwise step (index 1)
/// - **South**: Two steps (index 2)
/// - **West**: One counter-clockwise step (index 3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotation index (0-3), used to select a row of the shape tables.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Rotation for any signed index, taken modulo 4.
    pub fn from_index(index: i8) -> Self {
        match index.rem_euclid(4) {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    /// Rotation one step in `direction`.
    pub fn rotated(&self, direction: RotationDirection) -> Self {
        Self::from_index(self.index() as i8 + direction.delta())
    }
}

/// Top-level state of a game session.
///
/// `Init -> Running <-> Paused`, `Running -> GameOver`, and any state `-> Quit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum GameStatus {
    Init,
    Running,
    Paused,
    GameOver,
    Quit,
}

impl GameStatus {
    /// No further gameplay can happen from this state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::GameOver | GameStatus::Quit)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Init => "init",
            GameStatus::Running => "running",
            GameStatus::Paused => "paused",
            GameStatus::GameOver => "game over",
            GameStatus::Quit => "quit",
        }
    }
}

/// Discrete actions a driver can apply to the game
///
/// Each action maps to one engine entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Enable soft drop and move the piece one cell down
    SoftDrop,
    /// Disable soft drop
    SoftDropRelease,
    /// Rotate piece one step clockwise
    RotateCw,
    /// Rotate piece one step counter-clockwise
    RotateCcw,
    /// Drop piece to the lowest valid row and lock it
    HardDrop,
    /// Toggle pause state
    Pause,
    /// End the session
    Quit,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled with the colour of the specified kind
pub type Cell = Option<PieceKind>;
