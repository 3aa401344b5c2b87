//! Target sources: random for play, scripted for tests and demos

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

use super::traits::TargetSource;

/// Uniform draws from `[1, range_max]`
#[derive(Debug, Clone)]
pub struct SeededTargets {
    rng: StdRng,
    seed: Option<u64>,
}

impl SeededTargets {
    /// Seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Reproducible sequence of targets
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for SeededTargets {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl TargetSource for SeededTargets {
    fn draw(&mut self, range_max: u32) -> u32 {
        self.rng.gen_range(1..=range_max.max(1))
    }
}

/// Replays a fixed list of targets; the last one repeats once the list runs out
#[derive(Debug, Clone)]
pub struct FixedTargets {
    queue: VecDeque<u32>,
    last: u32,
}

impl FixedTargets {
    pub fn new(targets: impl IntoIterator<Item = u32>) -> Self {
        let queue: VecDeque<u32> = targets.into_iter().collect();
        let last = queue.back().copied().unwrap_or(1);
        Self { queue, last }
    }

    /// Same target every round
    pub fn always(target: u32) -> Self {
        Self::new([target])
    }
}

impl TargetSource for FixedTargets {
    fn draw(&mut self, _range_max: u32) -> u32 {
        self.queue.pop_front().unwrap_or(self.last)
    }
}
