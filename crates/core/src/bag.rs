//! Bag module - 7-bag random piece generation
//!
//! Each bag contains one of each piece (O, I, S, Z, L, J, T), shuffled.
//! Pieces are drawn from the front; as soon as a bag is used up a fresh one
//! is generated, so a "next" piece is always available for preview.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::types::PieceKind;

/// Shuffle the canonical piece list into a new bag.
///
/// The result is always a permutation of [`PieceKind::ALL`].
pub fn generate_bag<R: Rng + ?Sized>(rng: &mut R) -> [PieceKind; PieceKind::LEN] {
    let mut bag = PieceKind::ALL;
    bag.shuffle(rng);
    bag
}

/// 7-bag piece source
#[derive(Debug, Clone)]
pub struct Bag {
    /// Remaining pieces of the current bag, front first
    queue: VecDeque<PieceKind>,
    rng: StdRng,
}

impl Bag {
    /// Create a bag seeded from the OS's random data source
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Create a bag with a reproducible piece sequence
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        let mut bag = Self {
            queue: VecDeque::with_capacity(PieceKind::LEN),
            rng,
        };
        bag.refill();
        bag
    }

    /// Throw away the remaining pieces and generate a fresh bag
    pub fn refill(&mut self) {
        let pieces = generate_bag(&mut self.rng);
        self.queue.clear();
        self.queue.extend(pieces);
    }

    /// The piece the next [`Bag::pop`] will return
    pub fn peek(&self) -> PieceKind {
        self.queue[0]
    }

    /// Take the front piece, regenerating the bag once it runs out.
    ///
    /// # Panics
    ///
    /// Panics if the bag is empty, which the refill-after-pop rule rules out.
    pub fn pop(&mut self) -> PieceKind {
        let kind = self
            .queue
            .pop_front()
            .expect("bag is refilled before it drains");
        if self.queue.is_empty() {
            self.refill();
        }
        kind
    }

    /// Remaining pieces of the current bag, front first
    pub fn remaining(&self) -> impl Iterator<Item = PieceKind> + '_ {
        self.queue.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Default for Bag {
    fn default() -> Self {
        Self::new()
    }
}
