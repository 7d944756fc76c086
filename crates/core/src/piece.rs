//! Pieces module - Tetromino shapes, collision and rotation
//!
//! Every kind has four rotation states, each given as four (row, col) offsets
//! inside a 4x4 bounding box anchored at the piece's reference position.
//! Rotation uses a small fixed kick list rather than the SRS wall kick tables.

use crate::board::Board;
use crate::types::{PieceKind, Rotation, RotationDirection, SPAWN_COL, SPAWN_ROW};

/// Offset of a single mino relative to the bounding box origin, as (row, col)
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from the bounding box origin
pub type PieceShape = [MinoOffset; 4];

/// Shape tables indexed by [kind ordinal][rotation index].
///
/// Rotation 0 is the spawn orientation; each following index is one clockwise step.
const SHAPES: [[PieceShape; 4]; 7] = [
    // I
    [
        [(1, 0), (1, 1), (1, 2), (1, 3)],
        [(0, 2), (1, 2), (2, 2), (3, 2)],
        [(2, 0), (2, 1), (2, 2), (2, 3)],
        [(0, 1), (1, 1), (2, 1), (3, 1)],
    ],
    // O: identical in every rotation
    [
        [(0, 1), (0, 2), (1, 1), (1, 2)],
        [(0, 1), (0, 2), (1, 1), (1, 2)],
        [(0, 1), (0, 2), (1, 1), (1, 2)],
        [(0, 1), (0, 2), (1, 1), (1, 2)],
    ],
    // T
    [
        [(0, 0), (0, 1), (0, 2), (1, 1)],
        [(0, 1), (1, 1), (2, 1), (1, 2)],
        [(1, 0), (1, 1), (1, 2), (0, 1)],
        [(0, 1), (1, 0), (1, 1), (2, 1)],
    ],
    // S: rotates about the center (1, 1) of its 3x3 box
    [
        [(0, 1), (0, 2), (1, 0), (1, 1)],
        [(0, 1), (1, 1), (1, 2), (2, 2)],
        [(1, 1), (1, 2), (2, 0), (2, 1)],
        [(0, 0), (1, 0), (1, 1), (2, 1)],
    ],
    // Z
    [
        [(0, 0), (0, 1), (1, 1), (1, 2)],
        [(0, 2), (1, 1), (1, 2), (2, 1)],
        [(1, 0), (1, 1), (2, 1), (2, 2)],
        [(0, 1), (1, 0), (1, 1), (2, 0)],
    ],
    // J
    [
        [(0, 0), (0, 1), (0, 2), (1, 2)],
        [(0, 0), (0, 1), (1, 0), (2, 0)],
        [(0, 0), (1, 0), (1, 1), (1, 2)],
        [(0, 1), (1, 1), (2, 1), (2, 0)],
    ],
    // L
    [
        [(0, 0), (0, 1), (0, 2), (1, 0)],
        [(0, 0), (1, 0), (2, 0), (2, 1)],
        [(1, 0), (1, 1), (1, 2), (0, 2)],
        [(0, 0), (0, 1), (1, 1), (2, 1)],
    ],
];

/// Positional offsets tried in order when rotating, as (row, col).
///
/// In place, one right, one left, one up, two right, two left.
pub const KICKS: [(i8, i8); 6] = [(0, 0), (0, 1), (0, -1), (-1, 0), (0, 2), (0, -2)];

/// Get the shape (mino offsets) for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    SHAPES[kind.index()][rotation.index()]
}

/// Active falling piece
///
/// Occupied cells are derived from the shape tables on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub row: i8,
    pub col: i8,
}

impl Piece {
    /// Create a piece in spawn orientation at the spawn point.
    ///
    /// The result is not validated against any board.
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            row: SPAWN_ROW,
            col: SPAWN_COL,
        }
    }

    /// Get the shape (mino offsets) for current rotation
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Absolute board coordinates of the four minos.
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.shape()
            .map(|(dr, dc)| (self.row.saturating_add(dr), self.col.saturating_add(dc)))
    }

    /// Board colour id of this piece (1-7).
    pub fn color_id(&self) -> u8 {
        self.kind.color_id()
    }

    /// Copy of this piece translated by (d_row, d_col).
    ///
    /// Saturates at the i8 limits, which are far outside the board, so an
    /// oversized translation yields an invalid piece rather than wrapping.
    pub fn shifted(&self, d_row: i8, d_col: i8) -> Self {
        Self {
            row: self.row.saturating_add(d_row),
            col: self.col.saturating_add(d_col),
            ..*self
        }
    }

    /// All minos are inside the board and on empty cells.
    pub fn is_valid(&self, board: &Board) -> bool {
        self.cells()
            .iter()
            .all(|&(row, col)| board.is_empty(row, col))
    }

    /// One row further down would still be a valid placement.
    pub fn can_fall(&self, board: &Board) -> bool {
        self.shifted(1, 0).is_valid(board)
    }

    /// Rotate one step in `direction`, trying each entry of [`KICKS`] in order.
    ///
    /// The first kicked placement that is valid is committed (rotation and
    /// position together). When none fit the piece is left untouched and
    /// `false` is returned.
    pub fn try_rotate(&mut self, board: &Board, direction: RotationDirection) -> bool {
        let rotated = Self {
            rotation: self.rotation.rotated(direction),
            ..*self
        };

        for &(d_row, d_col) in KICKS.iter() {
            let candidate = rotated.shifted(d_row, d_col);
            if candidate.is_valid(board) {
                *self = candidate;
                return true;
            }
        }

        false
    }

    /// Lowest row this piece can reach by falling straight down.
    ///
    /// Used for the ghost preview; the piece itself is not moved.
    pub fn ghost_row(&self, board: &Board) -> i8 {
        let mut ghost = *self;
        while ghost.can_fall(board) {
            ghost = ghost.shifted(1, 0);
        }
        ghost.row
    }
}
