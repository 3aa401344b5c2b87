//! numguess - the rules of a single-player number-guessing game
//!
//! A [`GameSession`] holds one round at a time:
//! - a secret target drawn from `[1, range_max]` for the chosen [`Difficulty`]
//! - directional feedback and attempt counting for every guess
//! - a limited number of hints, each a window around the target
//! - elapsed time from the first guess and a best score across rounds
//!
//! Rendering is left to the caller; the session only returns structured results.

pub mod config;
pub mod error;
pub mod game;

// Re-export commonly used types for convenience
pub use error::{GameResult, GuessError};

pub use game::{
    Difficulty, FixedTargets, GameSession, GuessLog, GuessOutcome, GuessReport, HintOutcome,
    HintWindow, HistoryEntry, RoundPhase, SeededTargets, SessionSnapshot, TargetSource,
};

pub use config::{DisplayConfig, GameConfig, NumguessConfig};
