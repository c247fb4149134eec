//! Interactive match loop

use std::io::{BufRead, Write};

use anyhow::Result;
use rps_match_logic::{Choice, MatchController, MatchError, Round, RoundView, Side};
use tracing::debug;

const HELP: &str = "choices: rock|paper|scissors (r|p|s); commands: restart, score, help, quit";

#[derive(Debug, PartialEq, Eq)]
enum Input {
    Choose(Choice),
    Restart,
    Score,
    Help,
    Quit,
}

fn parse_input(line: &str) -> Result<Input, MatchError> {
    match line.trim().to_ascii_lowercase().as_str() {
        "restart" | "reset" => Ok(Input::Restart),
        "score" => Ok(Input::Score),
        "help" | "?" => Ok(Input::Help),
        "quit" | "exit" | "q" => Ok(Input::Quit),
        other => other.parse().map(Input::Choose),
    }
}

/// Read commands until `quit` or end of input
pub fn run<R: BufRead, W: Write>(
    controller: &mut MatchController,
    input: R,
    mut output: W,
) -> Result<()> {
    writeln!(
        output,
        "First to {} wins. {}",
        controller.state().winning_score(),
        HELP
    )?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match parse_input(&line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(output, "{}. {}", err, HELP)?;
                continue;
            }
        };
        debug!(?command, "input");

        match command {
            Input::Choose(choice) => match controller.play(choice) {
                Ok(record) => render_round(&mut output, &RoundView::from_round(&record.round), &record.round)?,
                Err(err) => writeln!(output, "{}", err)?,
            },
            Input::Restart => {
                let state = controller.reset();
                let view = RoundView::restarted(&state);
                writeln!(output, "{} Score: {}-{}", view.message, view.player_score, view.computer_score)?;
            }
            Input::Score => {
                let summary = controller.summary();
                writeln!(
                    output,
                    "Score: you {} - computer {} ({} rounds, {} draws)",
                    summary.player_score, summary.computer_score, summary.rounds_played, summary.draws
                )?;
            }
            Input::Help => writeln!(output, "{}", HELP)?,
            Input::Quit => break,
        }
    }
    output.flush()?;
    Ok(())
}

fn render_round<W: Write>(output: &mut W, view: &RoundView, round: &Round) -> Result<()> {
    let star = match view.star {
        Some(Side::Player) => " *",
        Some(Side::Computer) => " (computer *)",
        None => "",
    };
    writeln!(
        output,
        "You: {} | Computer: {} | {}{} Score: {}-{}",
        round.player_choice, round.computer_choice, view.message, star, view.player_score, view.computer_score
    )?;
    if let Some(message) = view.match_message {
        writeln!(output, "{} Type `restart` to play again.", message)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rps_match_logic::{MatchConfig, MSG_RESTARTED};
    use std::io::Cursor;

    fn run_script(controller: &mut MatchController, script: &str) -> String {
        let mut out = Vec::new();
        run(controller, Cursor::new(script.as_bytes()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input("Rock").unwrap(), Input::Choose(Choice::Rock));
        assert_eq!(parse_input("s").unwrap(), Input::Choose(Choice::Scissors));
        assert_eq!(parse_input(" restart ").unwrap(), Input::Restart);
        assert_eq!(parse_input("q").unwrap(), Input::Quit);
        assert!(matches!(parse_input("lizard"), Err(MatchError::UnknownChoice(_))));
    }

    #[test]
    fn test_single_round_is_rendered() {
        let mut controller = MatchController::seeded(MatchConfig::default(), 1);
        let out = run_script(&mut controller, "rock\nquit\npaper\n");

        assert!(out.starts_with("First to 5 wins."));
        assert!(out.contains("You: Rock | Computer: "));
        // Input after quit is ignored
        assert_eq!(controller.history().len(), 1);
    }

    #[test]
    fn test_rounds_rejected_after_match_over_until_restart() {
        let mut controller = MatchController::seeded(MatchConfig::new(1).unwrap(), 99);
        let script = "rock\n".repeat(40);
        let out = run_script(&mut controller, &script);

        assert!(controller.is_over());
        assert!(out.contains("won the match!"));
        assert!(out.contains("match is already over"));
        let final_score = controller.state();
        assert_eq!(final_score.player_score() + final_score.computer_score(), 1);

        let out = run_script(&mut controller, "restart\nscore\n");
        assert!(out.contains(MSG_RESTARTED));
        assert!(out.contains("Score: you 0 - computer 0 (0 rounds, 0 draws)"));
        assert!(!controller.is_over());
    }

    #[test]
    fn test_unknown_input_is_reported() {
        let mut controller = MatchController::seeded(MatchConfig::default(), 1);
        let out = run_script(&mut controller, "lizard\n\n");
        assert!(out.contains("unknown choice: \"lizard\""));
        assert!(controller.history().is_empty());
    }
}
