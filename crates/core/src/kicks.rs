//! Kicks module - SRS wall kick resolution
//!
//! Implements the Super Rotation System kick search.
//! Reference: https://tetris.wiki/SRS
//!
//! All offsets are in board coordinates: +x is right, +y is down.
//!
//! Two lookup schemes are used and both are part of SRS:
//! - J, L, S, T, Z and O use a per-rotation *offset* table; the kick for
//!   candidate `k` is `OFFSETS[from][k] - OFFSETS[to][k]`.
//! - I uses dedicated *kick* tables (one per direction) that are read
//!   directly by starting rotation.

use crate::board::Board;
use crate::piece::Piece;
use crate::types::PieceKind;

/// Number of candidate offsets tried per rotation
pub const KICK_COUNT: usize = 5;

/// Five `(dx, dy)` candidates per rotation index
pub type KickTable = [[(i8, i8); KICK_COUNT]; 4];

/// Offset data for every piece except I, indexed by rotation index
pub const OFFSETS: KickTable = [
    // 0 (spawn)
    [(0, 0), (0, 0), (0, 0), (0, 0), (0, 0)],
    // R
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // 2
    [(0, 0), (0, 0), (0, 0), (0, 0), (0, 0)],
    // L
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
];

/// I piece kicks for clockwise rotation, indexed by starting rotation
pub const I_KICKS_CW: KickTable = [
    // 0->R
    [(0, 0), (-2, 0), (1, 0), (-2, 1), (1, -2)],
    // R->2
    [(0, 0), (-1, 0), (2, 0), (-1, -2), (2, 1)],
    // 2->L
    [(0, 0), (2, 0), (-1, 0), (2, -1), (-1, 2)],
    // L->0
    [(0, 0), (1, 0), (-2, 0), (1, 2), (-2, -1)],
];

/// I piece kicks for counter-clockwise rotation, indexed by starting rotation
pub const I_KICKS_CCW: KickTable = [
    // 0->L
    [(0, 0), (-1, 0), (2, 0), (-1, -2), (2, 1)],
    // R->0
    [(0, 0), (2, 0), (-1, 0), (2, -1), (-1, 2)],
    // 2->R
    [(0, 0), (1, 0), (-2, 0), (1, 2), (-2, -1)],
    // L->2
    [(0, 0), (-2, 0), (1, 0), (-2, 1), (1, -2)],
];

/// Candidate translations for rotating `kind` from `from` to `to`
/// (rotation indices), in priority order
pub fn kick_offsets(kind: PieceKind, from: usize, to: usize) -> [(i8, i8); KICK_COUNT] {
    if kind == PieceKind::I {
        let clockwise = to == (from + 1) % 4;
        let table = if clockwise { &I_KICKS_CW } else { &I_KICKS_CCW };
        return table[from];
    }

    let mut kicks = [(0, 0); KICK_COUNT];
    for (k, kick) in kicks.iter_mut().enumerate() {
        let (fx, fy) = OFFSETS[from][k];
        let (tx, ty) = OFFSETS[to][k];
        *kick = (fx - tx, fy - ty);
    }
    kicks
}

/// Try to place `rotated` (a rotated copy of `current`) using SRS kicks.
///
/// Returns the rotated piece translated by the first candidate offset that
/// gives a valid placement, or `None` if every candidate collides. Nothing
/// is mutated either way.
pub fn try_rotate(board: &Board, current: &Piece, rotated: &Piece) -> Option<Piece> {
    let from = current.rotation.index();
    let to = rotated.rotation.index();

    kick_offsets(rotated.kind, from, to)
        .into_iter()
        .find(|&(dx, dy)| board.is_valid_position(rotated, dx, dy))
        .map(|(dx, dy)| rotated.translated(dx, dy))
}
