//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell can be empty or filled with a piece kind.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)
//!
//! The board is also the validity checker: every move, rotation and spawn is
//! tested against it before the engine commits anything.

use arrayvec::ArrayVec;
use thiserror::Error;

use crate::piece::Piece;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// A freshly spawned piece would overlap locked cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("spawn blocked for {kind} piece")]
pub struct SpawnBlocked {
    pub kind: PieceKind,
}

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Check whether `piece`, shifted by `(dx, dy)`, fits.
    ///
    /// Every filled cell must be inside the side walls and above the floor.
    /// Cells above the board (negative rows) are allowed and are not checked
    /// against locked cells; cells on the board must be empty.
    pub fn is_valid_position(&self, piece: &Piece, dx: i8, dy: i8) -> bool {
        piece.cells().all(|(x, y)| {
            let (x, y) = (x + dx, y + dy);
            if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
                return false;
            }
            y < 0 || !self.is_occupied(x, y)
        })
    }

    /// True iff moving the piece one row down would be invalid
    pub fn is_grounded(&self, piece: &Piece) -> bool {
        !self.is_valid_position(piece, 0, 1)
    }

    /// Build a piece of `kind` at its spawn position and check it can enter play.
    ///
    /// The whole bounding box is checked, empty matrix cells included, but
    /// only the part of it that lies on the board. For the I piece that skips
    /// the box's top row, which spawns above row 0.
    ///
    /// Pure: the board is not touched whether or not the spawn succeeds.
    pub fn spawn(&self, kind: PieceKind) -> Result<Piece, SpawnBlocked> {
        let piece = Piece::spawned(kind);
        let side = piece.side() as i8;

        for row in 0..side {
            for col in 0..side {
                if self.is_occupied(piece.x + col, piece.y + row) {
                    return Err(SpawnBlocked { kind });
                }
            }
        }

        Ok(piece)
    }

    /// Write the piece's filled cells into the grid.
    ///
    /// Cells outside the board (above row 0) are dropped.
    pub fn commit(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            self.set(x, y, Some(piece.kind));
        }
    }

    /// Clear all full rows and return the row indices that were cleared (sorted bottom to top)
    ///
    /// Non-full rows are copied down in order to close the gaps and the
    /// vacated top rows are emptied. Uses a two-pointer pass with zero allocation.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, { BOARD_HEIGHT as usize }> {
        let mut cleared_rows = ArrayVec::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        // Scan from bottom to top
        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Clear the remaining rows at the top
        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared_rows
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(BOARD_WIDTH as usize)
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Fill every cell of row `y` except the listed columns
    pub fn fill_row_except(&mut self, y: i8, holes: &[i8], kind: PieceKind) {
        for x in 0..BOARD_WIDTH as i8 {
            if !holes.contains(&x) {
                self.set(x, y, Some(kind));
            }
        }
    }

    /// Create from a 2D vector (converts to flat array)
    ///
    /// # Panics
    ///
    /// Panics if the rows are not exactly `BOARD_HEIGHT x BOARD_WIDTH`.
    pub fn from_cells(cells_2d: Vec<Vec<Cell>>) -> Self {
        assert_eq!(cells_2d.len(), BOARD_HEIGHT as usize);
        assert!(cells_2d.iter().all(|row| row.len() == BOARD_WIDTH as usize));

        let mut flat = [None; BOARD_SIZE];
        for (y, row) in cells_2d.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                flat[y * BOARD_WIDTH as usize + x] = *cell;
            }
        }
        Self { cells: flat }
    }

    /// Convert to 2D vector for testing/display
    pub fn to_cells(&self) -> Vec<Vec<Cell>> {
        self.rows().map(<[Cell]>::to_vec).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();

        board.set(0, 0, Some(PieceKind::I));
        board.set(5, 10, Some(PieceKind::T));

        assert_eq!(board.get(0, 0), Some(Some(PieceKind::I)));
        assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));

        assert_eq!(board.cells[0], Some(PieceKind::I));
        assert_eq!(board.cells[10 * 10 + 5], Some(PieceKind::T));
    }

    #[test]
    fn test_cells_above_board_are_allowed() {
        let mut board = Board::new();
        board.fill_row_except(0, &[], PieceKind::Z);

        // I spawn matrix has its top row at y = -1; shifted up one more row
        // the filled row sits at y = -1 and ignores the full row 0.
        let i = Piece::spawned(PieceKind::I);
        assert!(!board.is_valid_position(&i, 0, 0));
        assert!(board.is_valid_position(&i, 0, -1));
    }

    #[test]
    fn test_walls_and_floor_reject() {
        let board = Board::new();
        let o = Piece::spawned(PieceKind::O);

        assert!(!board.is_valid_position(&o, -5, 0));
        assert!(!board.is_valid_position(&o, 5, 0));
        assert!(board.is_valid_position(&o, 0, 18));
        assert!(!board.is_valid_position(&o, 0, 19));
        assert!(board.is_grounded(&o.translated(0, 18)));
        assert!(!board.is_grounded(&o.translated(0, 17)));
    }

    #[test]
    fn test_commit_skips_cells_above_board() {
        let mut board = Board::new();
        let i = Piece::spawned(PieceKind::I).rotated_cw().translated(0, -1);
        // Vertical I spanning rows -2..=1 in column 5.
        board.commit(&i);

        let filled: Vec<_> = (0..20)
            .filter(|&y| board.is_occupied(5, y))
            .collect();
        assert_eq!(filled, vec![0, 1]);
    }

    #[test]
    fn test_clear_full_rows_compacts() {
        let mut board = Board::new();
        board.fill_row_except(19, &[], PieceKind::I);
        board.set(2, 18, Some(PieceKind::T));
        board.fill_row_except(17, &[], PieceKind::L);
        board.set(7, 16, Some(PieceKind::S));

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[19, 17]);

        assert_eq!(board.get(2, 19), Some(Some(PieceKind::T)));
        assert_eq!(board.get(7, 18), Some(Some(PieceKind::S)));
        assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 2);
    }

    #[test]
    fn test_from_cells_roundtrip() {
        let mut cells_2d = vec![vec![None; 10]; 20];
        cells_2d[5][3] = Some(PieceKind::O);
        cells_2d[10][7] = Some(PieceKind::L);

        let board = Board::from_cells(cells_2d.clone());
        assert_eq!(board.to_cells(), cells_2d);
    }
}
