//! WASM bindings for the browser front end

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::{outcome, Choice, MatchConfig, MatchController, RoundView, SeededRng, Timings};

fn parse_choice(choice: &str) -> Result<Choice, JsError> {
    choice.parse::<Choice>().map_err(|e| JsError::new(&e.to_string()))
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// A match owned by the page
///
/// The page keeps one instance and calls `play` from the choice buttons and
/// `reset` from the restart button.
#[wasm_bindgen]
pub struct WasmMatch {
    controller: MatchController,
}

#[wasm_bindgen]
impl WasmMatch {
    /// # Arguments
    /// * `winning_score` - Score that ends the match (at least 1)
    /// * `seed` - Optional fixed seed; host randomness when absent
    #[wasm_bindgen(constructor)]
    pub fn new(winning_score: u32, seed: Option<u64>) -> Result<WasmMatch, JsError> {
        let config = MatchConfig::new(winning_score).map_err(|e| JsError::new(&e.to_string()))?;
        let rng = match seed {
            Some(seed) => SeededRng::new(seed),
            None => SeededRng::from_entropy(),
        };
        Ok(WasmMatch { controller: MatchController::new(config, rng) })
    }

    /// Play one round; throws once the match is over
    pub fn play(&mut self, choice: &str) -> Result<JsValue, JsError> {
        let choice = parse_choice(choice)?;
        let record = self
            .controller
            .play(choice)
            .map_err(|e| JsError::new(&e.to_string()))?;
        to_js(&RoundView::from_round(&record.round))
    }

    pub fn reset(&mut self) -> Result<JsValue, JsError> {
        let state = self.controller.reset();
        to_js(&RoundView::restarted(&state))
    }

    #[wasm_bindgen(js_name = isOver)]
    pub fn is_over(&self) -> bool {
        self.controller.is_over()
    }

    /// Current scores as `{player_score, computer_score, winning_score, is_over}`
    pub fn state(&self) -> Result<JsValue, JsError> {
        to_js(&self.controller.state())
    }

    pub fn summary(&self) -> Result<JsValue, JsError> {
        to_js(&self.controller.summary())
    }
}

#[derive(serde::Serialize)]
struct ChoiceInfo {
    id: &'static str,
    name: &'static str,
}

/// Get the three choices in board order
#[wasm_bindgen]
pub fn get_choices() -> Result<JsValue, JsError> {
    let choices: Vec<ChoiceInfo> = Choice::ALL
        .iter()
        .map(|c| ChoiceInfo { id: c.id(), name: c.name() })
        .collect();
    to_js(&choices)
}

/// Outcome of `player` against `computer`: "player_win", "computer_win" or "draw"
#[wasm_bindgen]
pub fn describe_outcome(player: &str, computer: &str) -> Result<String, JsError> {
    let result = outcome(parse_choice(player)?, parse_choice(computer)?);
    Ok(result.as_str().to_string())
}

/// Animation durations the board uses, in milliseconds
#[wasm_bindgen]
pub fn get_timings() -> Result<JsValue, JsError> {
    to_js(&Timings::BOARD)
}
