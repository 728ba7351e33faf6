//! Piece module - tetromino shape matrices and rotation transforms
//!
//! A piece is plain data: its kind, a square shape matrix, a rotation state
//! and the board position of the matrix's top-left corner. Rotation builds a
//! new value instead of mutating in place, so a piece and its rotated
//! candidate never share storage while kicks are being tested.

use crate::types::{PieceKind, Rotation, BOARD_WIDTH};

/// Largest shape matrix side (the I piece)
pub const MAX_SIDE: usize = 4;

/// Square occupancy matrix of side 2, 3 or 4, indexed `[row][col]`
///
/// Only the top-left `side x side` corner of `cells` is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    side: u8,
    cells: [[bool; MAX_SIDE]; MAX_SIDE],
}

impl Shape {
    /// Spawn-orientation shape for a piece kind
    pub fn spawn(kind: PieceKind) -> Self {
        let filled: &[(usize, usize)] = match kind {
            PieceKind::O => &[(0, 0), (0, 1), (1, 0), (1, 1)],
            PieceKind::I => &[(1, 0), (1, 1), (1, 2), (1, 3)],
            PieceKind::S => &[(0, 1), (0, 2), (1, 0), (1, 1)],
            PieceKind::Z => &[(0, 0), (0, 1), (1, 1), (1, 2)],
            PieceKind::L => &[(0, 2), (1, 0), (1, 1), (1, 2)],
            PieceKind::J => &[(0, 0), (1, 0), (1, 1), (1, 2)],
            PieceKind::T => &[(0, 1), (1, 0), (1, 1), (1, 2)],
        };

        let mut cells = [[false; MAX_SIDE]; MAX_SIDE];
        for &(row, col) in filled {
            cells[row][col] = true;
        }
        Self {
            side: kind.side(),
            cells,
        }
    }

    pub fn side(&self) -> u8 {
        self.side
    }

    /// Whether the cell at `(row, col)` is filled; false outside the matrix
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        let side = self.side as usize;
        row < side && col < side && self.cells[row][col]
    }

    /// Matrix rotated 90° clockwise: `out[j][side - 1 - i] = in[i][j]`
    pub fn rotated_cw(&self) -> Self {
        let n = self.side as usize;
        let mut cells = [[false; MAX_SIDE]; MAX_SIDE];
        for i in 0..n {
            for j in 0..n {
                cells[j][n - 1 - i] = self.cells[i][j];
            }
        }
        Self {
            side: self.side,
            cells,
        }
    }

    /// Matrix rotated 90° counter-clockwise: `out[side - 1 - j][i] = in[i][j]`
    pub fn rotated_ccw(&self) -> Self {
        let n = self.side as usize;
        let mut cells = [[false; MAX_SIDE]; MAX_SIDE];
        for i in 0..n {
            for j in 0..n {
                cells[n - 1 - j][i] = self.cells[i][j];
            }
        }
        Self {
            side: self.side,
            cells,
        }
    }

    /// Offsets `(dx, dy)` of filled cells relative to the top-left corner,
    /// in row-major order
    pub fn minos(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let n = self.side as usize;
        (0..n).flat_map(move |row| {
            (0..n)
                .filter(move |&col| self.cells[row][col])
                .map(move |col| (col as i8, row as i8))
        })
    }
}

/// A tetromino placed (or about to be placed) on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub rotation: Rotation,
    /// Column of the shape matrix's left edge
    pub x: i8,
    /// Row of the shape matrix's top edge; negative while above the board
    pub y: i8,
}

impl Piece {
    /// Create a piece in spawn orientation at `(0, 0)`
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: Shape::spawn(kind),
            rotation: Rotation::North,
            x: 0,
            y: 0,
        }
    }

    /// Create a piece in spawn orientation at its spawn position
    pub fn spawned(kind: PieceKind) -> Self {
        let mut piece = Self::new(kind);
        piece.initialize_spawn_position();
        piece
    }

    pub fn side(&self) -> u8 {
        self.shape.side()
    }

    /// Center the bounding box horizontally and place it on row 0.
    ///
    /// The I piece starts one row higher because its spawn shape leaves the
    /// matrix's top row empty.
    pub fn initialize_spawn_position(&mut self) {
        self.x = ((BOARD_WIDTH - self.side()) / 2) as i8;
        self.y = if self.kind == PieceKind::I { -1 } else { 0 };
    }

    /// Same piece rotated 90° clockwise; position unchanged
    pub fn rotated_cw(&self) -> Self {
        Self {
            shape: self.shape.rotated_cw(),
            rotation: self.rotation.rotate_cw(),
            ..*self
        }
    }

    /// Same piece rotated 90° counter-clockwise; position unchanged
    pub fn rotated_ccw(&self) -> Self {
        Self {
            shape: self.shape.rotated_ccw(),
            rotation: self.rotation.rotate_ccw(),
            ..*self
        }
    }

    /// Same piece moved by `(dx, dy)`
    pub fn translated(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Back to spawn orientation and spawn position.
    ///
    /// Undoes rotation by stepping counter-clockwise until the rotation
    /// index is 0, so the matrix matches the spawn matrix exactly.
    pub fn normalized(&self) -> Self {
        let mut piece = *self;
        while piece.rotation != Rotation::North {
            piece = piece.rotated_ccw();
        }
        piece.initialize_spawn_position();
        piece
    }

    /// Absolute board coordinates `(x, y)` of the filled cells
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .minos()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}
