//! Match configuration and score state

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::MatchError;

/// Score a side needs to win the match unless configured otherwise
pub const DEFAULT_WINNING_SCORE: u32 = 5;

/// One of the two sides of a match
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Player,
    Computer,
}

/// Match state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPhase {
    /// Rounds are accepted
    InProgress,
    /// A side reached the winning score; only `reset` leaves this phase
    Over,
}

/// Fixed configuration of a match
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMatchConfig")]
pub struct MatchConfig {
    winning_score: u32,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawMatchConfig {
    #[serde(default = "default_winning_score")]
    winning_score: u32,
}

fn default_winning_score() -> u32 {
    DEFAULT_WINNING_SCORE
}

impl TryFrom<RawMatchConfig> for MatchConfig {
    type Error = MatchError;

    fn try_from(raw: RawMatchConfig) -> Result<Self, Self::Error> {
        Self::new(raw.winning_score)
    }
}

impl MatchConfig {
    pub fn new(winning_score: u32) -> Result<Self, MatchError> {
        if winning_score == 0 {
            return Err(MatchError::InvalidWinningScore);
        }
        Ok(Self { winning_score })
    }

    /// Parse a JSON config such as `{"winning_score": 3}`
    pub fn from_json(json: &str) -> Result<Self, MatchError> {
        serde_json::from_str(json).map_err(|e| MatchError::InvalidConfig(e.to_string()))
    }

    pub fn winning_score(&self) -> u32 {
        self.winning_score
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { winning_score: DEFAULT_WINNING_SCORE }
    }
}

/// Running scores of a match.
///
/// Only round resolution and `reset` produce new values; there is no
/// public way to edit the scores directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MatchState {
    player_score: u32,
    computer_score: u32,
    winning_score: u32,
}

impl MatchState {
    /// Fresh 0-0 match
    pub fn new(config: MatchConfig) -> Self {
        Self {
            player_score: 0,
            computer_score: 0,
            winning_score: config.winning_score,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_scores(player_score: u32, computer_score: u32, winning_score: u32) -> Self {
        Self { player_score, computer_score, winning_score }
    }

    pub(crate) fn award(self, side: Side) -> Self {
        match side {
            Side::Player => Self { player_score: self.player_score + 1, ..self },
            Side::Computer => Self { computer_score: self.computer_score + 1, ..self },
        }
    }

    pub fn player_score(&self) -> u32 {
        self.player_score
    }

    pub fn computer_score(&self) -> u32 {
        self.computer_score
    }

    pub fn winning_score(&self) -> u32 {
        self.winning_score
    }

    pub fn config(&self) -> MatchConfig {
        MatchConfig { winning_score: self.winning_score }
    }

    pub fn is_over(&self) -> bool {
        self.player_score >= self.winning_score || self.computer_score >= self.winning_score
    }

    pub fn phase(&self) -> MatchPhase {
        if self.is_over() {
            MatchPhase::Over
        } else {
            MatchPhase::InProgress
        }
    }

    /// Side that reached the winning score, if any
    pub fn winner(&self) -> Option<Side> {
        if self.player_score >= self.winning_score {
            Some(Side::Player)
        } else if self.computer_score >= self.winning_score {
            Some(Side::Computer)
        } else {
            None
        }
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}

impl Serialize for MatchState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("MatchState", 4)?;
        s.serialize_field("player_score", &self.player_score)?;
        s.serialize_field("computer_score", &self.computer_score)?;
        s.serialize_field("winning_score", &self.winning_score)?;
        s.serialize_field("is_over", &self.is_over())?;
        s.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_rejects_zero() {
        assert_eq!(MatchConfig::new(0), Err(MatchError::InvalidWinningScore));
        assert_eq!(MatchConfig::new(1).unwrap().winning_score(), 1);
    }

    #[test]
    fn test_config_default_is_five() {
        assert_eq!(MatchConfig::default().winning_score(), 5);
    }

    #[test]
    fn test_config_from_json() {
        let config = MatchConfig::from_json(r#"{"winning_score": 3}"#).unwrap();
        assert_eq!(config.winning_score(), 3);

        let config = MatchConfig::from_json("{}").unwrap();
        assert_eq!(config.winning_score(), DEFAULT_WINNING_SCORE);
    }

    #[test]
    fn test_config_from_json_rejects_bad_input() {
        let err = MatchConfig::from_json(r#"{"winning_score": 0}"#).unwrap_err();
        assert!(matches!(err, MatchError::InvalidConfig(ref msg) if msg.contains("at least 1")), "{err}");

        assert!(MatchConfig::from_json(r#"{"best_of": 3}"#).is_err());
        assert!(MatchConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_new_state() {
        let state = MatchState::new(MatchConfig::default());
        assert_eq!(state.player_score(), 0);
        assert_eq!(state.computer_score(), 0);
        assert!(!state.is_over());
        assert_eq!(state.phase(), MatchPhase::InProgress);
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn test_is_over_on_either_side() {
        assert!(MatchState::with_scores(5, 3, 5).is_over());
        assert!(MatchState::with_scores(2, 5, 5).is_over());
        assert!(!MatchState::with_scores(4, 4, 5).is_over());

        assert_eq!(MatchState::with_scores(5, 3, 5).winner(), Some(Side::Player));
        assert_eq!(MatchState::with_scores(2, 5, 5).winner(), Some(Side::Computer));
    }

    #[test]
    fn test_award_moves_one_counter() {
        let state = MatchState::with_scores(1, 2, 5);
        assert_eq!(state.award(Side::Player), MatchState::with_scores(2, 2, 5));
        assert_eq!(state.award(Side::Computer), MatchState::with_scores(1, 3, 5));
    }

    #[test]
    fn test_state_serializes_derived_flag() {
        let json = serde_json::to_value(MatchState::with_scores(5, 3, 5)).unwrap();
        assert_eq!(json["player_score"], 5);
        assert_eq!(json["computer_score"], 3);
        assert_eq!(json["is_over"], true);
    }
}
