//! View model for the front ends
//!
//! Turns controller results into what the board shows: result text, the
//! flash class on the middle section, highlighted buttons, the win star and
//! whether choice input is enabled. Nothing here touches match state.

use serde::Serialize;

use crate::choice::Choice;
use crate::game::{Round, RoundOutcome};
use crate::state::{MatchState, Side};

pub const MSG_PLAYER_WINS: &str = "You Win!";
pub const MSG_COMPUTER_WINS: &str = "Computer Wins!";
pub const MSG_DRAW: &str = "It's a Draw!";
pub const MSG_RESTARTED: &str = "Game Restarted! Make your choice.";

/// Animation durations used by the board, in milliseconds.
/// Purely cosmetic; the controller never waits on them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Timings {
    pub button_bounce_ms: u32,
    pub score_bounce_ms: u32,
    pub start_shrink_ms: u32,
    pub flash_ms: u32,
}

impl Timings {
    pub const BOARD: Timings = Timings {
        button_bounce_ms: 300,
        score_bounce_ms: 400,
        start_shrink_ms: 600,
        flash_ms: 1000,
    };
}

/// Feedback flash on the middle section.
///
/// Serialized as `win`, `lose` or `draw`; the board's class is `flash-<value>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Flash {
    Win,
    Lose,
    Draw,
}

impl Flash {
    pub fn css_class(self) -> &'static str {
        match self {
            Flash::Win => "flash-win",
            Flash::Lose => "flash-lose",
            Flash::Draw => "flash-draw",
        }
    }
}

impl From<RoundOutcome> for Flash {
    fn from(outcome: RoundOutcome) -> Self {
        match outcome {
            RoundOutcome::PlayerWin => Flash::Win,
            RoundOutcome::ComputerWin => Flash::Lose,
            RoundOutcome::Draw => Flash::Draw,
        }
    }
}

/// Everything a front end needs to render after a round or a restart
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoundView {
    pub message: &'static str,
    pub flash: Option<Flash>,
    /// Element id of the highlighted player button, e.g. `p-rock`
    pub player_button: Option<String>,
    /// Element id of the highlighted computer button, e.g. `c-scissor`
    pub computer_button: Option<String>,
    pub star: Option<Side>,
    pub player_score: u32,
    pub computer_score: u32,
    pub is_over: bool,
    pub input_enabled: bool,
    pub match_message: Option<&'static str>,
}

impl RoundView {
    pub fn from_round(round: &Round) -> Self {
        let message = match round.outcome {
            RoundOutcome::PlayerWin => MSG_PLAYER_WINS,
            RoundOutcome::ComputerWin => MSG_COMPUTER_WINS,
            RoundOutcome::Draw => MSG_DRAW,
        };
        let mut view = Self::for_state(&round.state, message);
        view.flash = Some(Flash::from(round.outcome));
        view.player_button = Some(button_id(Side::Player, round.player_choice));
        view.computer_button = Some(button_id(Side::Computer, round.computer_choice));
        view.star = round.outcome.winner();
        view
    }

    /// Board right after a restart
    pub fn restarted(state: &MatchState) -> Self {
        Self::for_state(state, MSG_RESTARTED)
    }

    fn for_state(state: &MatchState, message: &'static str) -> Self {
        let match_message = state.winner().map(|side| match side {
            Side::Player => "You won the match!",
            Side::Computer => "Computer won the match!",
        });
        Self {
            message,
            flash: None,
            player_button: None,
            computer_button: None,
            star: None,
            player_score: state.player_score(),
            computer_score: state.computer_score(),
            is_over: state.is_over(),
            input_enabled: !state.is_over(),
            match_message,
        }
    }
}

/// Board element id for a choice button
pub fn button_id(side: Side, choice: Choice) -> String {
    let prefix = match side {
        Side::Player => "p",
        Side::Computer => "c",
    };
    format!("{}-{}", prefix, choice.id())
}
