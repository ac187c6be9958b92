
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use tracing::level_filters::LevelFilter;

use crate::reports::TOP_TRANSACTIONS;

pub const USAGE: &str = "Usage: transaction-aggregates [input].csv [log_level:optional] [top_n:optional] > [output].csv";

/// Settings for a single run of the command line tool, taken from positional arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    pub input_path: PathBuf,
    pub log_level: LevelFilter,
    /// How many of the largest transactions to log. Validated by the engine, so it may be negative here.
    pub top_n: i64
}

impl CliConfig {
    //NOTE: The argument surface is three positionals, so it is parsed by hand rather than with clap
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>
    {
        let mut args = args.into_iter();

        let input_path = args.next()
            .map(PathBuf::from)
            .ok_or_else(|| anyhow!("Missing input CSV path"))?;

        let log_level = args.next()
            .map(|level| parse_log_level(&level))
            .unwrap_or(LevelFilter::ERROR);

        let top_n = match args.next() {
            Some(value) => value.parse::<i64>()
                .map_err(|error| anyhow!("Invalid top_n '{value}': {error}"))?,
            None => TOP_TRANSACTIONS
        };

        Ok(Self {
            input_path,
            log_level,
            top_n
        })
    }
}

pub fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}
