//! RNG module - deterministic piece selection
//!
//! Three selection policies, all reproducible from a seed:
//!
//! - **Bag**: the "7-bag" algorithm. Each bag holds one of each piece, shuffled, and
//!   is drawn until empty before a fresh bag is shuffled.
//! - **Uniform**: every draw is an independent pick among the seven kinds.
//! - **Sequence**: a fixed list of kinds repeated forever (puzzles and tests).
//!
//! Randomness comes from a small LCG so the same seed always yields the same game.

use crate::error::{EngineError, Result};
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
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Piece selection policy
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Randomizer {
    /// Shuffled bags of all seven kinds
    #[default]
    Bag,
    /// Independent uniform draws
    Uniform,
    /// Fixed cycle of kinds
    Sequence(Vec<PieceKind>),
}

impl Randomizer {
    /// Parse `bag` / `uniform` (case-insensitive); sequences are built in code
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "bag" | "7bag" | "7-bag" => Some(Randomizer::Bag),
            "uniform" | "random" => Some(Randomizer::Uniform),
            _ => None,
        }
    }
}

/// Deterministic stream of piece kinds
#[derive(Debug, Clone)]
pub struct PieceQueue {
    randomizer: Randomizer,
    /// Current bag of pieces (bag policy only)
    bag: [PieceKind; 7],
    /// Index into current bag, or into the fixed sequence
    index: usize,
    rng: SimpleRng,
}

impl PieceQueue {
    /// Create a new piece queue with the given seed and policy
    pub fn new(seed: u32, randomizer: Randomizer) -> Result<Self> {
        if matches!(&randomizer, Randomizer::Sequence(seq) if seq.is_empty()) {
            return Err(EngineError::EmptySequence);
        }
        Ok(Self::build(seed, randomizer))
    }

    fn build(seed: u32, randomizer: Randomizer) -> Self {
        let mut queue = Self {
            randomizer,
            bag: PieceKind::ALL,
            index: 0,
            rng: SimpleRng::new(seed),
        };
        if queue.randomizer == Randomizer::Bag {
            queue.refill_bag();
        }
        queue
    }

    /// Generate a new shuffled bag
    fn refill_bag(&mut self) {
        self.bag = PieceKind::ALL;
        self.rng.shuffle(&mut self.bag);
        self.index = 0;
    }

    /// Draw the next piece from the queue
    pub fn draw(&mut self) -> PieceKind {
        match self.randomizer {
            Randomizer::Bag => self.draw_from_bag(),
            Randomizer::Uniform => {
                let i = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
                PieceKind::ALL[i]
            }
            Randomizer::Sequence(ref seq) => {
                let piece = seq[self.index];
                self.index = (self.index + 1) % seq.len();
                piece
            }
        }
    }

    fn draw_from_bag(&mut self) -> PieceKind {
        if self.index >= self.bag.len() {
            self.refill_bag();
        }
        let piece = self.bag[self.index];
        self.index += 1;
        piece
    }

    /// Active selection policy
    pub fn randomizer(&self) -> &Randomizer {
        &self.randomizer
    }

    /// Get the current RNG state (for restarting game with a fresh sequence)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }

    /// Get current bag for testing/debugging
    #[cfg(test)]
    pub fn current_bag(&self) -> &[PieceKind] {
        &self.bag[self.index.min(self.bag.len())..]
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::build(1, Randomizer::Bag)
    }
}
