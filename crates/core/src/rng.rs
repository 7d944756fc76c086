//! RNG module - 7-bag random piece generation
//!
//! Implements the "7-bag" randomizer: each bag holds one of each piece
//! (I, O, T, S, Z, J, L) in shuffled order and is drawn empty before being
//! refilled and reshuffled.
//!
//! Shuffling uses a small LCG so a given seed always produces the same sequence.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits, the low bits of a power-of-two LCG have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct PieceBag {
    bag: [PieceKind; 7],
    /// Index of the next piece to draw; 7 means the bag is spent.
    cursor: usize,
    rng: SimpleRng,
    seed: u32,
}

impl PieceBag {
    /// Create a spent bag; the first draw fills and shuffles it.
    pub fn new(seed: u32) -> Self {
        Self {
            bag: PieceKind::ALL,
            cursor: PieceKind::ALL.len(),
            rng: SimpleRng::new(seed),
            seed,
        }
    }

    /// Refill with all seven kinds and reshuffle.
    fn refill(&mut self) {
        self.bag = PieceKind::ALL;
        self.rng.shuffle(&mut self.bag);
        self.cursor = 0;
    }

    /// Draw the next piece, refilling first if the bag is spent.
    pub fn draw(&mut self) -> PieceKind {
        if self.cursor >= self.bag.len() {
            self.refill();
        }

        let piece = self.bag[self.cursor];
        self.cursor += 1;
        piece
    }

    /// Pieces left before the next refill.
    pub fn remaining(&self) -> usize {
        self.bag.len() - self.cursor
    }

    /// Seed this bag was created with.
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for PieceBag {
    fn default() -> Self {
        Self::new(1)
    }
}
