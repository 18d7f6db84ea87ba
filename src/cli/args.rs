//! Command-line argument definitions for the METAR decoder
//!
//! This module defines the complete CLI interface using the clap derive API.

use clap::{Parser, Subcommand, ValueEnum};

use crate::{Error, Result};

/// CLI arguments for the METAR decoder
///
/// Decodes METAR aviation weather reports into structured observation
/// fields, either from manually supplied text or fetched live from the NOAA
/// weather server.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "metar-decoder",
    version,
    about = "Decode METAR aviation weather reports into structured observation fields",
    long_about = "Decodes METAR aviation weather reports into structured fields: observation \
                  time, station-automation flag, wind, visibility, runway visual range, and \
                  forecast-change groups. Reports can be supplied on the command line or \
                  fetched live from the NOAA observation server."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the METAR decoder
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Decode a manually supplied METAR message
    Decode(DecodeArgs),
    /// Fetch reports from the NOAA server and decode them
    Fetch(FetchArgs),
}

/// Arguments for the decode command
#[derive(Debug, Clone, Parser)]
pub struct DecodeArgs {
    /// Station identifier the report is filed under
    #[arg(value_name = "STATION", help = "Station identifier (e.g. LFLY)")]
    pub station: String,

    /// The raw METAR message, quoted as a single argument
    #[arg(
        value_name = "TEXT",
        help = "Raw METAR text (e.g. \"LFLY 292200Z AUTO VRB03KT CAVOK 06/M00 Q1000 NOSIG\")"
    )]
    pub text: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the fetch command
#[derive(Debug, Clone, Parser)]
pub struct FetchArgs {
    /// Stations to fetch, one or more identifiers
    ///
    /// Stations are fetched concurrently; a failure for one station does not
    /// abort the others.
    #[arg(
        value_name = "STATION",
        required = true,
        help = "One or more station identifiers to fetch"
    )]
    pub stations: Vec<String>,

    /// Base URL of the observation server
    ///
    /// Defaults to the NOAA server. Station files are expected at
    /// <URL>/<STATION>.TXT.
    #[arg(
        long = "server-url",
        value_name = "URL",
        help = "Override the observation server base URL"
    )]
    pub server_url: Option<String>,

    /// HTTP timeout for a single station fetch, in seconds
    #[arg(
        long = "timeout",
        value_name = "SECS",
        help = "HTTP timeout per station fetch, in seconds"
    )]
    pub timeout_secs: Option<u64>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Output and logging flags shared by every subcommand
#[derive(Debug, Clone, Parser)]
pub struct OutputArgs {
    /// Output format for decoded reports
    #[arg(
        long = "format",
        value_enum,
        default_value = "text",
        help = "Output format for decoded reports"
    )]
    pub format: OutputFormat,

    /// Enable verbose (debug-level) logging
    #[arg(short = 'v', long = "verbose", help = "Enable verbose logging")]
    pub verbose: bool,

    /// Suppress all output except errors and decoded reports
    #[arg(short = 'q', long = "quiet", help = "Only log errors")]
    pub quiet: bool,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable field listing
    Text,
    /// Pretty-printed JSON of the decoded report
    Json,
}

impl Args {
    /// Validate argument combinations beyond what clap enforces
    pub fn validate(&self) -> Result<()> {
        let output = match &self.command {
            Some(Commands::Decode(args)) => {
                if args.station.trim().is_empty() {
                    return Err(Error::configuration("station identifier must not be empty"));
                }
                if args.text.trim().is_empty() {
                    return Err(Error::configuration("report text must not be empty"));
                }
                &args.output
            }
            Some(Commands::Fetch(args)) => {
                if args.stations.iter().any(|s| s.trim().is_empty()) {
                    return Err(Error::configuration("station identifiers must not be empty"));
                }
                &args.output
            }
            None => return Ok(()),
        };

        if output.verbose && output.quiet {
            return Err(Error::configuration(
                "--verbose and --quiet are mutually exclusive",
            ));
        }

        Ok(())
    }

    /// Output flags of the selected subcommand
    pub fn output(&self) -> Option<&OutputArgs> {
        match &self.command {
            Some(Commands::Decode(args)) => Some(&args.output),
            Some(Commands::Fetch(args)) => Some(&args.output),
            None => None,
        }
    }

    /// Log level derived from the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.output() {
            Some(output) if output.verbose => "debug",
            Some(output) if output.quiet => "error",
            _ => "info",
        }
    }
}
