//! Target source that replays a script and records every draw

use numguess::TargetSource;
use std::sync::{Arc, Mutex};

/// Hands out scripted targets in order, then falls back to the middle of the range
///
/// The range of each draw is recorded so tests can check that a round was
/// started with the right difficulty.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTargets {
    script: Vec<u32>,
    draws: Arc<Mutex<Vec<u32>>>,
}

impl ScriptedTargets {
    pub fn new(script: impl IntoIterator<Item = u32>) -> Self {
        Self {
            script: script.into_iter().collect(),
            draws: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Shared view of the `range_max` passed to each draw
    pub fn draw_log(&self) -> Arc<Mutex<Vec<u32>>> {
        Arc::clone(&self.draws)
    }
}

impl TargetSource for ScriptedTargets {
    fn draw(&mut self, range_max: u32) -> u32 {
        let mut draws = self.draws.lock().unwrap();
        let index = draws.len();
        draws.push(range_max);
        self.script.get(index).copied().unwrap_or(range_max / 2)
    }
}
