//! Bounded random draws
//!
//! The simulation only ever asks for an integer below a bound. Keeping that
//! behind a trait lets tests script exact activation sequences.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::TRIAL_RESOLUTION;

/// Source of bounded random integers
pub trait RandomSource {
    /// Uniform integer in `[0, bound)`. `bound` is never zero.
    fn next_below(&mut self, bound: u32) -> u32;

    /// Bernoulli trial at percent resolution. `p` is clamped to [0, 1]; the
    /// lowest draw passes even `p = 0`, so there is always a 1% floor.
    fn trial(&mut self, p: f32) -> bool {
        let p = p.clamp(0.0, 1.0);
        let draw = self.next_below(TRIAL_RESOLUTION) as f32 / TRIAL_RESOLUTION as f32;
        draw <= p
    }
}

/// Seeded PCG generator (deterministic per seed)
#[derive(Debug, Clone)]
pub struct PcgRandom {
    rng: Pcg32,
}

impl PcgRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl RandomSource for PcgRandom {
    fn next_below(&mut self, bound: u32) -> u32 {
        self.rng.random_range(0..bound)
    }
}

/// Replays a fixed list of draws, reducing each modulo the requested bound.
/// Once exhausted it keeps returning `fallback`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    draws: VecDeque<u32>,
    fallback: u32,
}

impl ScriptedRandom {
    pub fn new(draws: impl IntoIterator<Item = u32>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            fallback: 0,
        }
    }

    /// A source that always returns the same draw
    pub fn constant(draw: u32) -> Self {
        Self {
            draws: VecDeque::new(),
            fallback: draw,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_below(&mut self, bound: u32) -> u32 {
        self.draws.pop_front().unwrap_or(self.fallback) % bound
    }
}
