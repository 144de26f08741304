//! RNG module - random block-type selection
//!
//! The simulation only asks for "the next integer" and reduces it mod 7 itself.
//! [`SimpleRng`] is the default source: a small LCG so that a seed reproduces a
//! whole game. [`SequenceSource`] replays a fixed script, for tests and benches.

use crate::types::BlockType;

/// Source of integers the spawn phase reduces to a block type
pub trait RandomSource {
    /// Next integer; no distribution is assumed beyond "roughly uniform"
    fn next_int(&mut self) -> u32;

    /// Next block type (`next_int() mod 7`)
    fn next_block(&mut self) -> BlockType {
        BlockType::from_index((self.next_int() % 7) as usize)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_int(&mut self) -> u32 {
        (**self).next_int()
    }
}

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
        // Low bits of a power-of-two LCG cycle with a short period; mod 7 wants the high ones.
        self.state.rotate_left(16)
    }

    /// Current internal state (replaying from it continues the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RandomSource for SimpleRng {
    fn next_int(&mut self) -> u32 {
        self.next_u32()
    }
}

/// Replays a fixed list of integers, cycling when exhausted
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<u32>,
    pos: usize,
}

impl SequenceSource {
    /// An empty script yields 0 forever.
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            pos: 0,
        }
    }

    /// Script that spawns the given block types in order
    pub fn of_blocks(blocks: &[BlockType]) -> Self {
        Self::new(blocks.iter().map(|b| b.index() as u32).collect::<Vec<_>>())
    }
}

impl RandomSource for SequenceSource {
    fn next_int(&mut self) -> u32 {
        if self.values.is_empty() {
            return 0;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos = self.pos.wrapping_add(1);
        v
    }
}
