//! Snapshot module - read-only per-frame view of the game
//!
//! A [`GameSnapshot`] is a plain `Copy` value holding everything a view draws:
//! the colour-id grid, the active piece and its landing row, the next kind,
//! counters, status and the flash state. [`Game::snapshot_into`] refills one
//! in place each frame.
//!
//! [`Game::snapshot_into`]: crate::game::Game::snapshot_into

use crate::piece::Piece;
use crate::types::{GameStatus, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

/// Colour-id grid: 0 = empty, 1-7 = piece colours.
pub type ColorGrid = [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub row: i8,
    pub col: i8,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            row: value.row,
            col: value.col,
        }
    }
}

impl From<ActiveSnapshot> for Piece {
    fn from(value: ActiveSnapshot) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            row: value.row,
            col: value.col,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FlashSnapshot {
    pub active: bool,
    pub toggles_remaining: u8,
}

impl FlashSnapshot {
    /// Filled cells should be drawn inverted this frame.
    pub fn inverted(&self) -> bool {
        self.active && self.toggles_remaining % 2 == 1
    }
}

/// Everything a view needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameSnapshot {
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_grid"))]
    pub board: ColorGrid,
    pub active: ActiveSnapshot,
    pub ghost_row: i8,
    pub next: PieceKind,
    pub status: GameStatus,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub soft_dropping: bool,
    pub flash: FlashSnapshot,
}

impl GameSnapshot {
    /// Reset to the state of a snapshot taken before any game exists.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Gameplay actions would currently have an effect.
    pub fn playable(&self) -> bool {
        self.status == GameStatus::Running
    }

    pub fn paused(&self) -> bool {
        self.status == GameStatus::Paused
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// Board cells of the active piece.
    pub fn active_cells(&self) -> [(i8, i8); 4] {
        Piece::from(self.active).cells()
    }

    /// Board cells of the ghost piece.
    pub fn ghost_cells(&self) -> [(i8, i8); 4] {
        Piece {
            row: self.ghost_row,
            ..Piece::from(self.active)
        }
        .cells()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let active = ActiveSnapshot::from(Piece::spawn(PieceKind::I));
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active,
            ghost_row: active.row,
            next: PieceKind::I,
            status: GameStatus::Init,
            score: 0,
            lines: 0,
            level: 0,
            soft_dropping: false,
            flash: FlashSnapshot::default(),
        }
    }
}

// serde only derives for arrays up to 32 elements.
#[cfg(feature = "serde")]
fn serialize_grid<S>(grid: &ColorGrid, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_seq(grid.iter())
}
