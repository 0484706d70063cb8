//! Command-line parsing and the resolved run configuration.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{ArgAction, Parser};
use tracing::level_filters::LevelFilter;

use edgedump_text::ReportFormat;

/// Default report path, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "output.txt";

#[derive(Parser, Debug)]
#[command(
    name = "edgedump",
    version,
    about = "Render a binary edge list dump as a text report"
)]
pub struct Cli {
    /// Binary input file (i16 vertex count, then (from, to, weight) records)
    #[arg(short = 'i', value_name = "PATH")]
    pub input: Option<String>,

    /// Report file to create or overwrite
    #[arg(short = 'o', value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Report format (text, json)
    #[arg(long, value_parser = ReportFormat::from_str, default_value = "text")]
    pub format: ReportFormat,

    /// Increase diagnostic output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Everything a run needs, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: ReportFormat,
    pub log_level: LevelFilter,
}

impl Config {
    /// Resolve parsed arguments into a configuration.
    ///
    /// Returns `None` when no input file was named, in which case the caller
    /// prints usage and does nothing else.
    pub fn from_cli(cli: Cli) -> Option<Self> {
        let input = cli.input.filter(|path| !path.is_empty())?;
        let log_level = if cli.quiet {
            LevelFilter::ERROR
        } else {
            match cli.verbose {
                0 => LevelFilter::WARN,
                1 => LevelFilter::INFO,
                2 => LevelFilter::DEBUG,
                _ => LevelFilter::TRACE,
            }
        };
        Some(Self {
            input: PathBuf::from(input),
            output: PathBuf::from(cli.output),
            format: cli.format,
            log_level,
        })
    }
}
