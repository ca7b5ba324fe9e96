//! Runner configuration loaded from environment variables.

use std::path::PathBuf;

use crate::errors::{Result, RunnerError};

#[derive(Debug, Clone)]
pub struct Config {
    /// Number of accounts that each buy one ticket.
    pub player_count: usize,
    /// Units minted to every generated account.
    pub player_funds: i128,
    /// Sleep through the sale window instead of fast-forwarding the clock.
    pub real_time: bool,
    /// Draw winners from a seeded entropy contract instead of the host PRNG.
    pub entropy_seed: Option<u64>,
    /// Write the run summary here as JSON.
    pub summary_out: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            player_count: 19,
            player_funds: 1_000_000_000_000_000_000,
            real_time: false,
            entropy_seed: None,
            summary_out: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();
        let config = Config {
            player_count: parse_or(&lookup, "PLAYER_COUNT", defaults.player_count)?,
            player_funds: parse_or(&lookup, "PLAYER_FUNDS", defaults.player_funds)?,
            real_time: parse_or(&lookup, "REAL_TIME", defaults.real_time)?,
            entropy_seed: parse_opt(&lookup, "ENTROPY_SEED")?,
            summary_out: lookup("SUMMARY_OUT").map(PathBuf::from),
        };

        if config.player_count == 0 {
            return Err(RunnerError::Config(
                "PLAYER_COUNT must be at least 1".to_string(),
            ));
        }
        if config.player_funds < 0 {
            return Err(RunnerError::Config(
                "PLAYER_FUNDS must not be negative".to_string(),
            ));
        }
        Ok(config)
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T> {
    Ok(parse_opt(lookup, key)?.unwrap_or(default))
}

fn parse_opt<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>> {
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|_| RunnerError::Config(format!("Invalid {key}")))
        })
        .transpose()
}
