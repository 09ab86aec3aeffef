//! RNG module - seeded uniform piece randomization
//!
//! Every spawn is an independent uniform draw over the 7 piece kinds; there is
//! deliberately no bag and no fairness window. The generator is a simple
//! seeded LCG so tests and replays can rely on exact sequences.

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
}

/// Uniform piece source backed by a seeded [`SimpleRng`]
#[derive(Debug, Clone)]
pub struct PieceRng {
    rng: SimpleRng,
}

impl PieceRng {
    const KINDS: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Create a new piece source with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next piece kind, uniformly at random
    pub fn draw(&mut self) -> PieceKind {
        let index = self.rng.next_range(Self::KINDS.len() as u32) as usize;
        Self::KINDS[index]
    }
}

impl Default for PieceRng {
    fn default() -> Self {
        Self::new(1)
    }
}
