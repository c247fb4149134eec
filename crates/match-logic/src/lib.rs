//! Match Logic for Rock-Paper-Scissors
//!
//! Round resolution and match-end detection for a single player against a
//! uniformly random computer opponent.
//! This crate is compiled to:
//! - Native (for the `rps` terminal harness)
//! - WASM (for the browser front end)

mod choice;
mod controller;
mod error;
mod game;
mod presentation;
mod random;
mod state;

#[cfg(feature = "wasm")]
mod wasm;

pub use choice::Choice;
pub use controller::{MatchController, MatchSummary, RoundRecord};
pub use error::MatchError;
pub use game::{apply_round, draw_computer_choice, is_match_over, reset, resolve_round, Round, RoundOutcome};
pub use presentation::{Flash, RoundView, Timings, MSG_COMPUTER_WINS, MSG_DRAW, MSG_PLAYER_WINS, MSG_RESTARTED};
pub use random::SeededRng;
pub use state::{MatchConfig, MatchPhase, MatchState, Side, DEFAULT_WINNING_SCORE};

/// Outcome table for Rock-Paper-Scissors, from the player's point of view
pub fn outcome(player: Choice, computer: Choice) -> RoundOutcome {
    if player == computer {
        RoundOutcome::Draw
    } else if player.beats(computer) {
        RoundOutcome::PlayerWin
    } else {
        RoundOutcome::ComputerWin
    }
}
