use crate::piece::Piece;
use crate::types::{Cell, LockPhase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Read-only view of a session, copied out for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Piece,
    /// Active piece moved straight down to its landing row
    pub ghost: Piece,
    pub next: PieceKind,
    /// Held piece, always in spawn orientation
    pub hold: Option<Piece>,
    pub can_hold: bool,
    pub score: u32,
    pub level: u32,
    pub lock_phase: LockPhase,
    pub top_outs: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.active = Piece::spawned(PieceKind::O);
        self.ghost = self.active;
        self.next = PieceKind::O;
        self.hold = None;
        self.can_hold = true;
        self.score = 0;
        self.level = 1;
        self.lock_phase = LockPhase::Falling;
        self.top_outs = 0;
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let active = Piece::spawned(PieceKind::O);
        let mut s = Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active,
            ghost: active,
            next: PieceKind::O,
            hold: None,
            can_hold: true,
            score: 0,
            level: 1,
            lock_phase: LockPhase::Falling,
            top_outs: 0,
        };
        s.clear();
        s
    }
}
