//! Round resolution and match-end detection

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::choice::Choice;
use crate::error::MatchError;
use crate::outcome;
use crate::random::SeededRng;
use crate::state::{MatchState, Side};

/// Result of one player choice against one computer choice
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundOutcome {
    PlayerWin,
    ComputerWin,
    Draw,
}

impl RoundOutcome {
    /// Side that scores this round; `None` on a draw
    pub fn winner(self) -> Option<Side> {
        match self {
            RoundOutcome::PlayerWin => Some(Side::Player),
            RoundOutcome::ComputerWin => Some(Side::Computer),
            RoundOutcome::Draw => None,
        }
    }

    /// Serialized name, e.g. `player_win`
    pub fn as_str(self) -> &'static str {
        match self {
            RoundOutcome::PlayerWin => "player_win",
            RoundOutcome::ComputerWin => "computer_win",
            RoundOutcome::Draw => "draw",
        }
    }
}

/// Result of a single round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Round {
    pub player_choice: Choice,
    pub computer_choice: Choice,
    pub outcome: RoundOutcome,
    /// State after the round was scored
    pub state: MatchState,
}

/// Draw the computer's choice, 1/3 each, independent of earlier rounds
pub fn draw_computer_choice(rng: &mut SeededRng) -> Choice {
    Choice::ALL[rng.next_range(Choice::ALL.len() as u32) as usize]
}

/// Play one round against a freshly drawn computer choice
///
/// # Errors
/// `MatchError::MatchOver` if `state` is already over; the caller's state is
/// left as it was.
pub fn resolve_round(
    state: MatchState,
    player_choice: Choice,
    rng: &mut SeededRng,
) -> Result<Round, MatchError> {
    ensure_in_progress(&state)?;
    let computer_choice = draw_computer_choice(rng);
    apply_round(state, player_choice, computer_choice)
}

/// Score a round whose computer choice is already known
pub fn apply_round(
    state: MatchState,
    player_choice: Choice,
    computer_choice: Choice,
) -> Result<Round, MatchError> {
    ensure_in_progress(&state)?;

    let outcome = outcome(player_choice, computer_choice);
    let state = match outcome.winner() {
        Some(side) => state.award(side),
        None => state,
    };

    debug!(
        player = %player_choice,
        computer = %computer_choice,
        ?outcome,
        player_score = state.player_score(),
        computer_score = state.computer_score(),
        "round resolved"
    );
    if let Some(winner) = state.winner() {
        info!(?winner, player_score = state.player_score(), computer_score = state.computer_score(), "match over");
    }

    Ok(Round { player_choice, computer_choice, outcome, state })
}

pub fn is_match_over(state: &MatchState) -> bool {
    state.is_over()
}

/// Fresh 0-0 state with the same winning score
pub fn reset(state: &MatchState) -> MatchState {
    debug!(
        player_score = state.player_score(),
        computer_score = state.computer_score(),
        "match reset"
    );
    MatchState::new(state.config())
}

fn ensure_in_progress(state: &MatchState) -> Result<(), MatchError> {
    if state.is_over() {
        warn!(
            player_score = state.player_score(),
            computer_score = state.computer_score(),
            "round rejected: match already over"
        );
        return Err(MatchError::MatchOver {
            player_score: state.player_score(),
            computer_score: state.computer_score(),
        });
    }
    Ok(())
}
