//! Results returned to the presentation layer

use serde::{Deserialize, Serialize};
use strum::Display;

/// Classification of a single guess submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum GuessOutcome {
    /// Text that does not parse as an integer
    #[strum(to_string = "Invalid")]
    Invalid,
    #[strum(to_string = "Out of range")]
    OutOfRange,
    #[strum(to_string = "Too low")]
    TooLow,
    #[strum(to_string = "Too high")]
    TooHigh,
    #[strum(to_string = "Correct!")]
    Correct,
}

impl GuessOutcome {
    /// Compare a parsed guess against the target and the `[1, range_max]` bounds
    pub fn classify(guess: i64, target: u32, range_max: u32) -> Self {
        if guess < 1 || guess > i64::from(range_max) {
            GuessOutcome::OutOfRange
        } else if guess < i64::from(target) {
            GuessOutcome::TooLow
        } else if guess > i64::from(target) {
            GuessOutcome::TooHigh
        } else {
            GuessOutcome::Correct
        }
    }

    /// History label for this outcome
    pub fn label(self) -> &'static str {
        match self {
            GuessOutcome::Invalid => "Invalid",
            GuessOutcome::OutOfRange => "Out of range",
            GuessOutcome::TooLow => "Too low",
            GuessOutcome::TooHigh => "Too high",
            GuessOutcome::Correct => "Correct!",
        }
    }

    pub fn is_correct(self) -> bool {
        self == GuessOutcome::Correct
    }
}

/// Answer to a guess submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessReport {
    pub outcome: GuessOutcome,
    /// Attempts used so far in this round, including this one
    pub attempts: u32,
    /// Set only on a winning guess that beat the previous best
    pub new_best: bool,
}

/// Interval guaranteed to contain the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintWindow {
    pub lower: u32,
    pub upper: u32,
    pub hints_remaining: u32,
}

impl HintWindow {
    /// Window of `range_max / 4` on either side of the target, clamped to the range
    pub fn around(target: u32, range_max: u32, hints_remaining: u32) -> Self {
        let span = range_max / 4;
        Self {
            lower: target.saturating_sub(span).max(1),
            upper: target.saturating_add(span).min(range_max),
            hints_remaining,
        }
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.lower..=self.upper).contains(&value)
    }
}

/// Answer to a hint request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HintOutcome {
    Window(HintWindow),
    /// The round's hints are used up; the caller should disable its hint action
    NoHintsLeft,
}
