//! Match configuration from flags, environment and an optional JSON file

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use rps_match_logic::MatchConfig;
use tracing::debug;

#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Score that ends the match
    #[arg(long, env = "RPS_WINNING_SCORE")]
    pub winning_score: Option<u32>,

    /// JSON config file, e.g. `{"winning_score": 3}`
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl ConfigArgs {
    /// Flag or env var, then config file, then the default
    pub fn resolve(&self) -> Result<MatchConfig> {
        let from_file = match &self.config {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                let config = MatchConfig::from_json(&json)
                    .with_context(|| format!("parsing config {}", path.display()))?;
                Some(config)
            }
            None => None,
        };
        let config = merge(from_file, self.winning_score)?;
        debug!(winning_score = config.winning_score(), "match config resolved");
        Ok(config)
    }
}

fn merge(from_file: Option<MatchConfig>, winning_score: Option<u32>) -> Result<MatchConfig> {
    match winning_score {
        Some(score) => MatchConfig::new(score).context("--winning-score"),
        None => Ok(from_file.unwrap_or_default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_when_nothing_given() {
        let config = ConfigArgs::default().resolve().unwrap();
        assert_eq!(config, MatchConfig::default());
    }

    #[test]
    fn test_flag_beats_file() {
        let file = MatchConfig::new(7).ok();
        assert_eq!(merge(file, Some(2)).unwrap().winning_score(), 2);
        assert_eq!(merge(file, None).unwrap().winning_score(), 7);
    }

    #[test]
    fn test_zero_flag_is_rejected() {
        let err = merge(None, Some(0)).unwrap_err();
        assert!(format!("{:#}", err).contains("at least 1"));
    }

    #[test]
    fn test_missing_file_is_reported() {
        let args = ConfigArgs {
            winning_score: None,
            config: Some(PathBuf::from("/nonexistent/rps-config.json")),
        };
        let err = args.resolve().unwrap_err();
        assert!(err.to_string().contains("reading config"));
    }
}
