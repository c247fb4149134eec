//! Headless matches with a random player

use std::io::Write;

use anyhow::Result;
use rps_match_logic::{Choice, MatchConfig, MatchController, SeededRng, Side};
use serde::Serialize;
use tracing::info;

/// Totals over a batch of simulated matches
#[derive(Debug, Default, Serialize)]
pub struct SimulationReport {
    pub matches: u32,
    pub winning_score: u32,
    pub player_match_wins: u32,
    pub computer_match_wins: u32,
    pub rounds: u64,
    pub draws: u64,
    /// Computer choice counts in `Choice::ALL` order
    pub computer_choices: [u64; 3],
}

impl SimulationReport {
    pub fn computer_choice_share(&self, choice: Choice) -> f64 {
        let idx = choice_index(choice);
        if self.rounds == 0 {
            return 0.0;
        }
        self.computer_choices[idx] as f64 / self.rounds as f64
    }
}

fn choice_index(choice: Choice) -> usize {
    match choice {
        Choice::Rock => 0,
        Choice::Paper => 1,
        Choice::Scissors => 2,
    }
}

/// Play `matches` complete matches; the player picks uniformly at random
/// from a stream independent of the computer's.
pub fn simulate(config: MatchConfig, matches: u32, seed: u64) -> SimulationReport {
    let mut controller = MatchController::seeded(config, seed);
    let mut player_rng = SeededRng::new(seed ^ 0x9e3779b97f4a7c15);
    let mut report = SimulationReport {
        matches,
        winning_score: config.winning_score(),
        ..Default::default()
    };

    for _ in 0..matches {
        controller.reset();
        while !controller.is_over() {
            let choice = Choice::ALL[player_rng.next_range(3) as usize];
            // The loop condition guarantees the match is still in progress
            let Ok(record) = controller.play(choice) else { break };
            report.computer_choices[choice_index(record.round.computer_choice)] += 1;
        }
        let summary = controller.summary();
        report.rounds += summary.rounds_played as u64;
        report.draws += summary.draws as u64;
        match summary.winner {
            Some(Side::Player) => report.player_match_wins += 1,
            Some(Side::Computer) => report.computer_match_wins += 1,
            None => {}
        }
    }

    info!(
        matches,
        rounds = report.rounds,
        player_match_wins = report.player_match_wins,
        computer_match_wins = report.computer_match_wins,
        "simulation finished"
    );
    report
}

pub fn print_report<W: Write>(report: &SimulationReport, out: &mut W) -> Result<()> {
    writeln!(out, "matches:        {} (first to {})", report.matches, report.winning_score)?;
    writeln!(out, "player wins:    {}", report.player_match_wins)?;
    writeln!(out, "computer wins:  {}", report.computer_match_wins)?;
    writeln!(out, "rounds:         {} ({} draws)", report.rounds, report.draws)?;
    for choice in Choice::ALL {
        writeln!(
            out,
            "computer {:<9} {:>6.2}%",
            choice.name(),
            report.computer_choice_share(choice) * 100.0
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_match_has_a_winner() {
        let report = simulate(MatchConfig::default(), 200, 42);
        assert_eq!(report.matches, 200);
        assert_eq!(report.player_match_wins + report.computer_match_wins, 200);
        assert_eq!(report.computer_choices.iter().sum::<u64>(), report.rounds);
        // At least winning_score rounds per match
        assert!(report.rounds >= 200 * 5);
    }

    #[test]
    fn test_computer_choices_are_uniform() {
        let report = simulate(MatchConfig::default(), 3000, 7);
        for choice in Choice::ALL {
            let share = report.computer_choice_share(choice);
            assert!((share - 1.0 / 3.0).abs() < 0.02, "{} share {:.4}", choice, share);
        }
    }

    #[test]
    fn test_simulation_is_reproducible() {
        let a = simulate(MatchConfig::new(3).unwrap(), 50, 9);
        let b = simulate(MatchConfig::new(3).unwrap(), 50, 9);
        assert_eq!(a.rounds, b.rounds);
        assert_eq!(a.player_match_wins, b.player_match_wins);
        assert_eq!(a.computer_choices, b.computer_choices);
    }

    #[test]
    fn test_print_report() {
        let report = simulate(MatchConfig::default(), 10, 1);
        let mut out = Vec::new();
        print_report(&report, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("matches:        10 (first to 5)"));
        assert!(text.contains("computer Scissors"));
    }

    #[test]
    fn test_zero_matches() {
        let report = simulate(MatchConfig::default(), 0, 1);
        assert_eq!(report.rounds, 0);
        assert_eq!(report.computer_choice_share(Choice::Rock), 0.0);
    }
}
