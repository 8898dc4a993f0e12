//! Randomness seam for the simulated peripheral.
//!
//! Latency and chunk sizes are drawn through [`NoiseSource`] so that tests
//! of the simulator itself can substitute a fixed sequence for the random
//! source and become deterministic.

use core::fmt::Debug;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the bounded randomness the simulator injects.
///
/// `Send` so a [`SimulatedUart`](crate::sim::SimulatedUart) can move onto a
/// worker thread together with its noise source.
pub trait NoiseSource: Debug + Send {
    /// Draw an integer uniformly from the inclusive range `[lo, hi]`.
    fn int_in_range(&mut self, lo: usize, hi: usize) -> usize;

    /// Draw a delay uniformly from `[0, max)`.
    fn delay_before(&mut self, max: Duration) -> Duration;
}

/// Default noise source backed by [`StdRng`].
#[derive(Debug)]
pub struct StdNoise {
    rng: StdRng,
}

impl StdNoise {
    /// Create an entropy-seeded source.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a source with a fixed seed for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for StdNoise {
    fn default() -> Self {
        Self::new()
    }
}

impl NoiseSource for StdNoise {
    fn int_in_range(&mut self, lo: usize, hi: usize) -> usize {
        self.rng.gen_range(lo..=hi)
    }

    fn delay_before(&mut self, max: Duration) -> Duration {
        let limit = max.as_micros() as u64;
        if limit == 0 {
            return Duration::ZERO;
        }
        Duration::from_micros(self.rng.gen_range(0..limit))
    }
}

/// Fixed-sequence noise source for deterministic simulator tests.
///
/// Draws integers from a scripted list, clamping each entry into the
/// requested range; once exhausted it returns the lower bound. Delays are
/// always zero.
#[cfg(test)]
#[derive(Debug)]
pub(crate) struct ScriptedNoise {
    ints: std::collections::VecDeque<usize>,
}

#[cfg(test)]
impl ScriptedNoise {
    pub(crate) fn new(ints: &[usize]) -> Self {
        Self {
            ints: ints.iter().copied().collect(),
        }
    }
}

#[cfg(test)]
impl NoiseSource for ScriptedNoise {
    fn int_in_range(&mut self, lo: usize, hi: usize) -> usize {
        self.ints.pop_front().map_or(lo, |v| v.clamp(lo, hi))
    }

    fn delay_before(&mut self, _max: Duration) -> Duration {
        Duration::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_in_range_stays_in_bounds() {
        let mut noise = StdNoise::seeded(42);
        for _ in 0..1000 {
            let v = noise.int_in_range(1, 16);
            assert!((1..=16).contains(&v));
        }
    }

    #[test]
    fn test_int_in_range_degenerate_range() {
        let mut noise = StdNoise::seeded(42);
        assert_eq!(noise.int_in_range(3, 3), 3);
    }

    #[test]
    fn test_delay_before_stays_under_bound() {
        let mut noise = StdNoise::seeded(42);
        let max = Duration::from_millis(50);
        for _ in 0..1000 {
            assert!(noise.delay_before(max) < max);
        }
    }

    #[test]
    fn test_delay_before_zero_bound_is_zero() {
        let mut noise = StdNoise::new();
        assert_eq!(noise.delay_before(Duration::ZERO), Duration::ZERO);
    }

    #[test]
    fn test_seeded_sources_draw_identically() {
        let mut a = StdNoise::seeded(7);
        let mut b = StdNoise::seeded(7);
        for _ in 0..100 {
            assert_eq!(a.int_in_range(0, 1000), b.int_in_range(0, 1000));
        }
    }

    #[test]
    fn test_scripted_sequence_clamps_and_falls_back() {
        let mut noise = ScriptedNoise::new(&[5, 99]);
        assert_eq!(noise.int_in_range(1, 8), 5);
        // Out-of-range entries clamp to the requested bounds.
        assert_eq!(noise.int_in_range(1, 8), 8);
        // Exhausted script falls back to the lower bound.
        assert_eq!(noise.int_in_range(1, 8), 1);
    }
}
