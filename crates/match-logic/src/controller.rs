//! Owned match session used by the front ends

use serde::Serialize;

use crate::choice::Choice;
use crate::error::MatchError;
use crate::game::{self, Round, RoundOutcome};
use crate::random::SeededRng;
use crate::state::{MatchConfig, MatchPhase, MatchState, Side};

/// A round stamped with its position in the current match
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RoundRecord {
    /// 1-based round number
    pub number: u32,
    pub round: Round,
}

/// Tally of a match so far
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    pub rounds_played: u32,
    pub player_wins: u32,
    pub computer_wins: u32,
    pub draws: u32,
    pub player_score: u32,
    pub computer_score: u32,
    pub winner: Option<Side>,
}

/// Single owner of a match: its state, its random source and its rounds
#[derive(Clone, Debug)]
pub struct MatchController {
    state: MatchState,
    rng: SeededRng,
    history: Vec<RoundRecord>,
}

impl MatchController {
    pub fn new(config: MatchConfig, rng: SeededRng) -> Self {
        Self {
            state: MatchState::new(config),
            rng,
            history: Vec::new(),
        }
    }

    /// Controller with a fixed seed, for reproducible sessions
    pub fn seeded(config: MatchConfig, seed: u64) -> Self {
        Self::new(config, SeededRng::new(seed))
    }

    /// Play one round against a random computer choice.
    ///
    /// A rejected round leaves state and history untouched.
    pub fn play(&mut self, choice: Choice) -> Result<&RoundRecord, MatchError> {
        let round = game::resolve_round(self.state, choice, &mut self.rng)?;
        self.state = round.state;
        let number = self.history.len() as u32 + 1;
        self.history.push(RoundRecord { number, round });
        Ok(&self.history[self.history.len() - 1])
    }

    pub fn reset(&mut self) -> MatchState {
        self.state = game::reset(&self.state);
        self.history.clear();
        self.state
    }

    pub fn is_over(&self) -> bool {
        game::is_match_over(&self.state)
    }

    pub fn phase(&self) -> MatchPhase {
        self.state.phase()
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    pub fn summary(&self) -> MatchSummary {
        let mut summary = MatchSummary {
            player_score: self.state.player_score(),
            computer_score: self.state.computer_score(),
            winner: self.state.winner(),
            ..Default::default()
        };
        for record in &self.history {
            summary.rounds_played += 1;
            match record.round.outcome {
                RoundOutcome::PlayerWin => summary.player_wins += 1,
                RoundOutcome::ComputerWin => summary.computer_wins += 1,
                RoundOutcome::Draw => summary.draws += 1,
            }
        }
        summary
    }
}
