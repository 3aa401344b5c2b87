//! Game rules: difficulty ranges, guess evaluation, hints and the round state machine

pub mod difficulty;
pub mod history;
pub mod outcome;
pub mod session;
pub mod target;
pub mod traits;

pub use difficulty::Difficulty;
pub use history::{GuessLog, HistoryEntry};
pub use outcome::{GuessOutcome, GuessReport, HintOutcome, HintWindow};
pub use session::{GameSession, RoundPhase, SessionSnapshot, DEFAULT_HINTS_PER_ROUND};
pub use target::{FixedTargets, SeededTargets};
pub use traits::TargetSource;
