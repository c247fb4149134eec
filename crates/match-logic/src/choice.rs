//! Choice definitions and the beats-relation

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MatchError;

/// A hand in Rock-Paper-Scissors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    /// All choices, in the order the board lays them out.
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// Whether `self` beats `other`.
    ///
    /// Rock beats Scissors, Scissors beats Paper, Paper beats Rock.
    /// Irreflexive: no choice beats itself.
    pub fn beats(self, other: Choice) -> bool {
        matches!(
            (self, other),
            (Choice::Rock, Choice::Scissors)
                | (Choice::Scissors, Choice::Paper)
                | (Choice::Paper, Choice::Rock)
        )
    }

    /// The one choice that beats `self`.
    pub fn beaten_by(self) -> Choice {
        match self {
            Choice::Rock => Choice::Paper,
            Choice::Paper => Choice::Scissors,
            Choice::Scissors => Choice::Rock,
        }
    }

    /// Lowercase identifier, also the suffix of the board's element ids.
    pub fn id(self) -> &'static str {
        match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissors => "scissor",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Choice::Rock => "Rock",
            Choice::Paper => "Paper",
            Choice::Scissors => "Scissors",
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Choice {
    type Err = MatchError;

    /// Accepts full names, the board id `scissor`, and single-letter shorthands.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" | "r" => Ok(Choice::Rock),
            "paper" | "p" => Ok(Choice::Paper),
            "scissors" | "scissor" | "s" => Ok(Choice::Scissors),
            _ => Err(MatchError::UnknownChoice(s.to_string())),
        }
    }
}
