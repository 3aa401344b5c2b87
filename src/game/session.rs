//! The game session: one round at a time, plus the best score across rounds

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use strum::Display;
use tracing::{debug, info, instrument, trace};

use super::difficulty::Difficulty;
use super::history::{GuessLog, HistoryEntry};
use super::outcome::{GuessOutcome, GuessReport, HintOutcome, HintWindow};
use super::target::SeededTargets;
use super::traits::TargetSource;
use crate::config::GameConfig;
use crate::error::{GameResult, GuessError};

/// Hints granted at the start of every round unless configured otherwise
pub const DEFAULT_HINTS_PER_ROUND: u32 = 3;

/// Where the current round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum RoundPhase {
    #[strum(to_string = "not started")]
    NotStarted,
    #[strum(to_string = "active")]
    Active,
    #[strum(to_string = "won")]
    Won,
}

/// Read-only view of a session for status displays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub difficulty: Difficulty,
    pub range_max: u32,
    pub phase: RoundPhase,
    pub attempts: u32,
    pub hints_remaining: u32,
    pub best_score: Option<u32>,
    pub elapsed_seconds: Option<f64>,
    pub history_len: usize,
}

/// Game state for the current round and the process-lifetime best score
#[derive(Debug)]
pub struct GameSession<S = SeededTargets> {
    targets: S,
    hints_per_round: u32,
    difficulty: Difficulty,
    target: u32,
    attempts: u32,
    hints_remaining: u32,
    best_score: Option<u32>,
    phase: RoundPhase,
    started_at: Option<Instant>,
    finished_at: Option<Instant>,
    history: GuessLog,
}

impl<S: TargetSource> GameSession<S> {
    /// Session with the default hint allowance; no round is in play until `start_round`
    pub fn new(targets: S) -> Self {
        Self::with_hints(targets, DEFAULT_HINTS_PER_ROUND)
    }

    pub fn with_config(config: &GameConfig, targets: S) -> Self {
        let mut session = Self::with_hints(targets, config.hints_per_round);
        session.difficulty = config.default_difficulty;
        session
    }

    fn with_hints(targets: S, hints_per_round: u32) -> Self {
        Self {
            targets,
            hints_per_round,
            difficulty: Difficulty::default(),
            target: 1,
            attempts: 0,
            hints_remaining: hints_per_round,
            best_score: None,
            phase: RoundPhase::NotStarted,
            started_at: None,
            finished_at: None,
            history: GuessLog::new(),
        }
    }

    /// Discard any round in play and begin a fresh one at `difficulty`
    #[instrument(skip(self, difficulty), fields(difficulty = difficulty.name()))]
    pub fn start_round(&mut self, difficulty: Difficulty) {
        let range_max = difficulty.range_max();
        self.difficulty = difficulty;
        self.target = self.targets.draw(range_max).clamp(1, range_max);
        self.attempts = 0;
        self.hints_remaining = self.hints_per_round;
        self.phase = RoundPhase::Active;
        self.started_at = None;
        self.finished_at = None;
        self.history.clear();

        info!(range_max, hints = self.hints_remaining, "Round started");
        trace!(target_value = self.target, "Target drawn");
    }

    /// New round at the current difficulty
    pub fn reset(&mut self) {
        self.start_round(self.difficulty);
    }

    pub fn change_difficulty(&mut self, difficulty: Difficulty) {
        self.start_round(difficulty);
    }

    pub fn submit_guess(&mut self, raw: &str) -> GameResult<GuessReport> {
        self.submit_guess_at(raw, Instant::now())
    }

    /// Submit a guess observed at `now`
    ///
    /// Malformed input is recorded as [`GuessOutcome::Invalid`] and still
    /// costs an attempt. Only a round that is not active rejects the call.
    #[instrument(skip(self, now), fields(attempts = self.attempts))]
    pub fn submit_guess_at(&mut self, raw: &str, now: Instant) -> GameResult<GuessReport> {
        if self.phase != RoundPhase::Active {
            debug!(phase = %self.phase, "Guess rejected");
            return Err(GuessError::invalid_state("submit a guess", self.phase));
        }

        if self.attempts == 0 {
            self.started_at = Some(now);
        }
        self.attempts = self.attempts.saturating_add(1);

        let (text, outcome) = match raw.trim().parse::<i64>() {
            Ok(guess) => (
                guess.to_string(),
                GuessOutcome::classify(guess, self.target, self.range_max()),
            ),
            Err(_) => (raw.to_string(), GuessOutcome::Invalid),
        };
        self.history.push(HistoryEntry::Guess { text, outcome });

        let mut new_best = false;
        if outcome.is_correct() {
            self.phase = RoundPhase::Won;
            self.finished_at = Some(now);
            if self.best_score.map_or(true, |best| self.attempts < best) {
                self.best_score = Some(self.attempts);
                new_best = true;
            }
            info!(attempts = self.attempts, new_best, "Round won");
        } else {
            debug!(attempts = self.attempts, outcome = outcome.label(), "Guess evaluated");
        }

        Ok(GuessReport {
            outcome,
            attempts: self.attempts,
            new_best,
        })
    }

    /// Spend a hint on a window around the target
    #[instrument(skip(self), fields(hints_remaining = self.hints_remaining))]
    pub fn request_hint(&mut self) -> GameResult<HintOutcome> {
        if self.phase != RoundPhase::Active {
            return Err(GuessError::invalid_state("request a hint", self.phase));
        }
        if self.hints_remaining == 0 {
            debug!("No hints left");
            return Ok(HintOutcome::NoHintsLeft);
        }

        self.hints_remaining -= 1;
        let window = HintWindow::around(self.target, self.range_max(), self.hints_remaining);
        self.history.push(HistoryEntry::Hint {
            lower: window.lower,
            upper: window.upper,
        });
        debug!(lower = window.lower, upper = window.upper, "Hint given");

        Ok(HintOutcome::Window(window))
    }
}

impl<S> GameSession<S> {
    /// Seconds since the first guess, to one decimal place; `None` before it
    ///
    /// The clock stops at the winning guess.
    pub fn elapsed_seconds(&self, now: Instant) -> Option<f64> {
        self.elapsed(now).map(|d| {
            let tenths = (d.as_millis() + 50) / 100;
            tenths as f64 / 10.0
        })
    }

    pub fn elapsed(&self, now: Instant) -> Option<Duration> {
        let started = self.started_at?;
        let until = match self.finished_at {
            Some(finished) if finished < now => finished,
            _ => now,
        };
        Some(until.saturating_duration_since(started))
    }

    pub fn snapshot(&self, now: Instant) -> SessionSnapshot {
        SessionSnapshot {
            difficulty: self.difficulty,
            range_max: self.range_max(),
            phase: self.phase,
            attempts: self.attempts,
            hints_remaining: self.hints_remaining,
            best_score: self.best_score,
            elapsed_seconds: self.elapsed_seconds(now),
            history_len: self.history.len(),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn range_max(&self) -> u32 {
        self.difficulty.range_max()
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn hints_remaining(&self) -> u32 {
        self.hints_remaining
    }

    pub fn hints_per_round(&self) -> u32 {
        self.hints_per_round
    }

    /// Fewest attempts of any win so far
    pub fn best_score(&self) -> Option<u32> {
        self.best_score
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn round_active(&self) -> bool {
        self.phase == RoundPhase::Active
    }

    pub fn history(&self) -> &GuessLog {
        &self.history
    }

    #[cfg(test)]
    pub(crate) fn target(&self) -> u32 {
        self.target
    }
}
