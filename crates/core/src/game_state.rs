//! Game state module - manages the complete game state
//!
//! This module ties together all core components: board, pieces, kicks, bag
//! and scoring. It owns the session (score, level, hold slot, timers) and
//! runs the gravity/lock-delay state machine one simulation step at a time.
//!
//! Timers are elapsed-time accumulators fed by [`GameState::tick`]; they are
//! never read from a wall clock.

use arrayvec::ArrayVec;

use crate::board::{Board, SpawnBlocked};
use crate::kicks;
use crate::piece::Piece;
use crate::scoring::{gravity_interval_ms, level_for_score, line_clear_score};
use crate::snapshot::GameSnapshot;
use crate::types::*;
use crate::Bag;

/// Undrained notices kept before the oldest are dropped
pub const EVENT_CAPACITY: usize = 16;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Piece,
    bag: Bag,
    hold: Option<Piece>,
    can_hold: bool,
    score: u32,
    level: u32,
    gravity_timer_ms: u32,
    lock_timer_ms: u32,
    /// Lock-delay resets since the last lock, capped at `LOCK_LIMIT`
    lock_counter: u8,
    grounded: bool,
    /// `grounded` as of the previous step
    was_grounded: bool,
    top_outs: u32,
    /// Pending notices, newest last. Bounded so undrained sessions stay flat.
    events: ArrayVec<GameEvent, EVENT_CAPACITY>,
}

impl GameState {
    /// Start a session with a bag seeded from OS entropy
    pub fn new() -> Self {
        Self::from_parts(Board::new(), Bag::new())
    }

    /// Start a session with a reproducible piece sequence
    pub fn with_seed(seed: u64) -> Self {
        Self::from_parts(Board::new(), Bag::with_seed(seed))
    }

    /// Start a session on a prepared board.
    ///
    /// If the first piece cannot spawn, the usual top-out recovery runs.
    pub fn with_board(board: Board, seed: u64) -> Self {
        Self::from_parts(board, Bag::with_seed(seed))
    }

    fn from_parts(board: Board, bag: Bag) -> Self {
        let mut state = Self {
            board,
            active: Piece::spawned(bag.peek()),
            bag,
            hold: None,
            can_hold: true,
            score: 0,
            level: 1,
            gravity_timer_ms: 0,
            lock_timer_ms: 0,
            lock_counter: 0,
            grounded: false,
            was_grounded: false,
            top_outs: 0,
            events: ArrayVec::new(),
        };
        state.spawn_next();
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Piece {
        self.active
    }

    /// Next piece in the bag
    pub fn next_piece(&self) -> PieceKind {
        self.bag.peek()
    }

    pub fn hold_piece(&self) -> Option<Piece> {
        self.hold
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lock_counter(&self) -> u8 {
        self.lock_counter
    }

    pub fn lock_timer_ms(&self) -> u32 {
        self.lock_timer_ms
    }

    pub fn gravity_timer_ms(&self) -> u32 {
        self.gravity_timer_ms
    }

    /// Number of automatic resets caused by a blocked spawn
    pub fn top_outs(&self) -> u32 {
        self.top_outs
    }

    /// Current gravity interval based on level
    pub fn gravity_interval_ms(&self) -> u32 {
        gravity_interval_ms(self.level)
    }

    /// Check if the active piece is resting on the floor or on locked cells
    pub fn is_grounded(&self) -> bool {
        self.board.is_grounded(&self.active)
    }

    /// Falling or waiting out the lock delay
    pub fn lock_phase(&self) -> LockPhase {
        if self.is_grounded() {
            LockPhase::GroundedWaiting
        } else {
            LockPhase::Falling
        }
    }

    /// Active piece moved straight down to the lowest valid row
    pub fn ghost(&self) -> Piece {
        let mut ghost = self.active;
        while self.board.is_valid_position(&ghost, 0, 1) {
            ghost = ghost.translated(0, 1);
        }
        ghost
    }

    /// Take all pending notices, oldest first.
    ///
    /// At most [`EVENT_CAPACITY`] are kept between drains; older ones are lost.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }

    /// Number of notices waiting to be drained
    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        for (dst, src) in out.board.iter_mut().zip(self.board.rows()) {
            dst.copy_from_slice(src);
        }
        out.active = self.active;
        out.ghost = self.ghost();
        out.next = self.bag.peek();
        out.hold = self.hold;
        out.can_hold = self.can_hold;
        out.score = self.score;
        out.level = self.level;
        out.lock_phase = self.lock_phase();
        out.top_outs = self.top_outs;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Advance timers by `elapsed_ms` and apply gravity and lock delay.
    ///
    /// Returns [`LockPhase::Locking`] if a piece locked during this step,
    /// otherwise the phase the new active position is in.
    pub fn tick(&mut self, elapsed_ms: u32) -> LockPhase {
        self.gravity_timer_ms = self.gravity_timer_ms.saturating_add(elapsed_ms);
        self.lock_timer_ms = self.lock_timer_ms.saturating_add(elapsed_ms);

        self.was_grounded = self.grounded;
        self.grounded = self.board.is_grounded(&self.active);

        if self.grounded && self.lock_counter >= LOCK_LIMIT {
            self.lock_piece();
            return LockPhase::Locking;
        }

        if self.gravity_timer_ms > self.gravity_interval_ms() {
            self.gravity_timer_ms = 0;
            if !self.grounded {
                self.active = self.active.translated(0, 1);
                self.lock_timer_ms = 0;
            } else {
                self.bump_lock_counter();
                if self.lock_timer_ms >= LOCK_DELAY_MS {
                    self.lock_piece();
                    return LockPhase::Locking;
                }
            }
        }

        self.lock_phase()
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(-1),
            GameAction::MoveRight => self.try_move(1),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => {
                self.hard_drop();
                true
            }
            GameAction::RotateCw => self.try_rotate(true),
            GameAction::RotateCcw => self.try_rotate(false),
            GameAction::Hold => self.hold(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Shift the active piece one column.
    ///
    /// Sliding onto a ledge (not grounded last step, grounded now) restarts
    /// the lock delay and counts towards the lock limit.
    pub fn try_move(&mut self, dx: i8) -> bool {
        if !self.board.is_valid_position(&self.active, dx, 0) {
            return false;
        }
        self.active = self.active.translated(dx, 0);

        if !self.was_grounded && self.is_grounded() {
            self.lock_timer_ms = 0;
            self.bump_lock_counter();
        }
        true
    }

    /// Move down one row, or lock if the piece is resting and out of time.
    ///
    /// Returns false only when nothing happened.
    pub fn soft_drop(&mut self) -> bool {
        if self.board.is_valid_position(&self.active, 0, 1) {
            self.active = self.active.translated(0, 1);
            self.lock_timer_ms = 0;
            return true;
        }

        if self.lock_timer_ms >= LOCK_DELAY_MS || self.lock_counter >= LOCK_LIMIT {
            self.lock_piece();
            return true;
        }
        false
    }

    /// Drop to the landing row and lock immediately
    pub fn hard_drop(&mut self) {
        self.active = self.ghost();
        self.push_event(GameEvent::HardDropped);
        self.lock_piece();
    }

    /// Rotate the active piece with SRS wall kicks
    pub fn try_rotate(&mut self, clockwise: bool) -> bool {
        let rotated = if clockwise {
            self.active.rotated_cw()
        } else {
            self.active.rotated_ccw()
        };

        let Some(placed) = kicks::try_rotate(&self.board, &self.active, &rotated) else {
            self.push_event(GameEvent::RotateRejected);
            return false;
        };

        self.active = placed;
        self.lock_timer_ms = 0;
        if self.is_grounded() {
            self.bump_lock_counter();
        }
        self.push_event(GameEvent::Rotated);
        true
    }

    /// Swap the active piece with the hold slot (once per lock).
    ///
    /// The first hold of a session takes the next piece from the bag; later
    /// holds swap with the held piece. The piece going into the slot is reset
    /// to spawn orientation. The hold is refused if the incoming piece cannot
    /// spawn.
    pub fn hold(&mut self) -> bool {
        if !self.can_hold {
            self.push_event(GameEvent::HoldRejected);
            return false;
        }

        let incoming = match self.hold {
            Some(held) => held.kind,
            None => self.bag.peek(),
        };
        let Ok(piece) = self.board.spawn(incoming) else {
            self.push_event(GameEvent::HoldRejected);
            return false;
        };

        if self.hold.is_none() {
            self.bag.pop();
        }
        self.hold = Some(self.active.normalized());
        self.active = piece;
        self.can_hold = false;
        self.lock_timer_ms = 0;
        self.lock_counter = 0;

        self.push_event(GameEvent::Held);
        true
    }

    /// Reset the whole session and spawn from a fresh bag
    pub fn restart(&mut self) {
        self.board.clear();
        self.score = 0;
        self.level = 1;
        self.can_hold = true;
        self.hold = None;
        self.reset_step_state();
        self.bag.refill();
        self.spawn_next();
    }

    /// Commit the active piece, clear rows, score, and bring in the next piece
    fn lock_piece(&mut self) {
        self.board.commit(&self.active);
        self.can_hold = true;

        let lines_cleared = self.board.clear_full_rows().len();
        let score_delta = line_clear_score(lines_cleared);
        if lines_cleared > 0 {
            self.score = self.score.saturating_add(score_delta);
            self.level = level_for_score(self.score);
        }
        self.push_event(GameEvent::Locked {
            lines_cleared: lines_cleared as u8,
            score_delta,
        });

        self.spawn_next();
        self.lock_timer_ms = 0;
        self.lock_counter = 0;
    }

    /// Pop the next piece from the bag into play, resetting on top-out
    fn spawn_next(&mut self) {
        let piece = match self.board.spawn(self.bag.peek()) {
            Ok(piece) => piece,
            Err(SpawnBlocked { .. }) => {
                self.recover_from_top_out();
                // The board is empty now, so the spawn area is free.
                Piece::spawned(self.bag.peek())
            }
        };
        self.bag.pop();
        self.active = piece;
    }

    fn recover_from_top_out(&mut self) {
        self.board.clear();
        self.bag.refill();
        self.score = 0;
        self.level = 1;
        self.can_hold = true;
        self.hold = None;
        self.reset_step_state();
        self.top_outs = self.top_outs.saturating_add(1);
        self.push_event(GameEvent::ToppedOut);
    }

    fn push_event(&mut self, event: GameEvent) {
        if self.events.is_full() {
            self.events.remove(0);
        }
        self.events.push(event);
    }

    /// Forget timers and grounding carried over from a previous session
    fn reset_step_state(&mut self) {
        self.gravity_timer_ms = 0;
        self.lock_timer_ms = 0;
        self.lock_counter = 0;
        self.grounded = false;
        self.was_grounded = false;
    }

    fn bump_lock_counter(&mut self) {
        self.lock_counter = (self.lock_counter + 1).min(LOCK_LIMIT);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
