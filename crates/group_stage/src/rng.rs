//! Injectable randomness for the match simulator

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the uniform draws consumed by the simulation.
///
/// Every `rand::Rng` is a `RandomSource`, so a seeded `StdRng` gives
/// reproducible runs. Tests can also supply a scripted implementation.
pub trait RandomSource {
    /// Uniform float in `[0, 1)`
    fn next_f64(&mut self) -> f64;

    /// Uniform integer in `low..=high`
    fn next_int(&mut self, low: u32, high: u32) -> u32;
}

impl<R: Rng> RandomSource for R {
    fn next_f64(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn next_int(&mut self, low: u32, high: u32) -> u32 {
        self.gen_range(low..=high)
    }
}

/// Create the simulation RNG, seeded when `seed` is given and from OS entropy otherwise
pub fn simulation_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Replays fixed draws, for tests that need exact control over the simulation
#[cfg(test)]
pub(crate) struct ScriptedRng {
    floats: std::collections::VecDeque<f64>,
    ints: std::collections::VecDeque<u32>,
}

#[cfg(test)]
impl ScriptedRng {
    pub(crate) fn new(floats: &[f64], ints: &[u32]) -> Self {
        Self {
            floats: floats.iter().copied().collect(),
            ints: ints.iter().copied().collect(),
        }
    }

    /// Draws left unconsumed
    pub(crate) fn remaining(&self) -> usize {
        self.floats.len() + self.ints.len()
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRng {
    fn next_f64(&mut self) -> f64 {
        self.floats.pop_front().expect("scripted float draws exhausted")
    }

    fn next_int(&mut self, low: u32, high: u32) -> u32 {
        let value = self.ints.pop_front().expect("scripted int draws exhausted");
        assert!((low..=high).contains(&value), "scripted int {value} outside {low}..={high}");
        value
    }
}
