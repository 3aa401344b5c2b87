//! Difficulty levels and the guessing range each one implies

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Difficulty of a round; fixes the upper bound of the guessing range
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    #[strum(serialize = "easy", to_string = "Easy (1-50)")]
    Easy,
    #[default]
    #[strum(serialize = "medium", to_string = "Medium (1-100)")]
    Medium,
    #[strum(serialize = "hard", to_string = "Hard (1-1000)")]
    Hard,
}

impl Difficulty {
    /// Largest valid guess (and target) for this difficulty
    pub const fn range_max(self) -> u32 {
        match self {
            Difficulty::Easy => 50,
            Difficulty::Medium => 100,
            Difficulty::Hard => 1000,
        }
    }

    /// Short lowercase name, as accepted by `FromStr`
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}
