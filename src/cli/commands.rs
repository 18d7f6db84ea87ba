//! Command implementations for the METAR decoder CLI
//!
//! This module contains the command execution logic, progress reporting,
//! and report rendering for the CLI interface.

use colored::Colorize;
use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, info};

use crate::app::services::decoder::{Report, decode};
use crate::app::services::noaa_client::NoaaClient;
use crate::cli::args::{Args, Commands, DecodeArgs, FetchArgs, OutputArgs, OutputFormat};
use crate::app::models::DecodedReport;
use crate::config::Config;
use crate::{Error, Result};

/// Main command runner for the METAR decoder
///
/// Sets up logging, validates arguments, and dispatches to the selected
/// subcommand.
pub async fn run(args: Args) -> Result<()> {
    setup_logging(&args)?;

    info!("Starting METAR decoder");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    match args.command {
        Some(Commands::Decode(decode_args)) => run_decode(decode_args),
        Some(Commands::Fetch(fetch_args)) => run_fetch(fetch_args).await,
        // main() shows the help screen before calling run()
        None => Ok(()),
    }
}

/// Decode a manually supplied report and print it
fn run_decode(args: DecodeArgs) -> Result<()> {
    let report = Report::new(args.station.trim(), args.text.trim());
    let decoded = decode(report);
    print_report(&decoded, &args.output)
}

/// Fetch one or more stations concurrently, decode, and print each
async fn run_fetch(args: FetchArgs) -> Result<()> {
    let config = Config::with_overrides(args.server_url.clone(), args.timeout_secs);
    let client = NoaaClient::new(config)?;

    info!("Fetching {} station(s)", args.stations.len());

    let progress_bar = make_progress_bar(&args, args.stations.len());

    let client = &client;
    let fetches = args.stations.iter().map(|station| {
        let progress_bar = progress_bar.clone();
        async move {
            let result = client.fetch_report(station).await;
            if let Some(pb) = &progress_bar {
                pb.inc(1);
            }
            result
        }
    });
    let results = join_all(fetches).await;

    if let Some(pb) = &progress_bar {
        pb.finish_and_clear();
    }

    let mut decoded_reports = Vec::new();
    let mut failures = Vec::new();
    for (station, result) in args.stations.iter().zip(results) {
        match result {
            Ok(report) => decoded_reports.push(decode(report)),
            Err(e) => {
                error!("Failed to fetch {}: {}", station, e);
                failures.push(e);
            }
        }
    }

    for decoded in &decoded_reports {
        print_report(decoded, &args.output)?;
    }

    if decoded_reports.is_empty() {
        if let Some(first) = failures.into_iter().next() {
            return Err(first);
        }
    } else if !failures.is_empty() {
        eprintln!(
            "{}",
            format!("{} of {} stations failed", failures.len(), args.stations.len()).yellow()
        );
    }

    Ok(())
}

/// Progress bar for multi-station text-mode runs
fn make_progress_bar(args: &FetchArgs, total: usize) -> Option<ProgressBar> {
    if total < 2 || args.output.quiet || args.output.format == OutputFormat::Json {
        return None;
    }

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message("decoding reports");
    Some(pb)
}

/// Render a decoded report in the selected output format
fn print_report(decoded: &DecodedReport, output: &OutputArgs) -> Result<()> {
    match output.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(decoded)?);
        }
        OutputFormat::Text => print_report_text(decoded),
    }
    Ok(())
}

/// Human-readable field listing of a decoded report
fn print_report_text(decoded: &DecodedReport) {
    println!("{}", decoded.station.bold().cyan());
    if let Some(reported_at) = &decoded.reported_at {
        println!("  {:<18} {}", "Reported at:", reported_at);
    }
    println!("  {:<18} {}", "Raw:", decoded.raw_text.dimmed());
    println!(
        "  {:<18} {}",
        "Automated:",
        if decoded.auto { "yes" } else { "no" }
    );

    match &decoded.observation_time {
        Some(time) => println!(
            "  {:<18} day {}, {}:{}Z",
            "Observation time:", time.day, time.hour, time.minute
        ),
        None => println!("  {:<18} {}", "Observation time:", absent()),
    }

    match &decoded.wind {
        Some(wind) => {
            let mut line = format!("{} at {}", wind.direction, wind.speed);
            if let Some(gust) = wind.gust {
                line.push_str(&format!(", gusting {gust}"));
            }
            if let Some(variation) = wind.variation {
                line.push_str(&format!(
                    ", varying {:03}-{:03}°",
                    variation.from_degrees, variation.to_degrees
                ));
            }
            println!("  {:<18} {}", "Wind:", line);
        }
        None => println!("  {:<18} {}", "Wind:", absent()),
    }

    match &decoded.visibility {
        Some(visibility) => {
            let sector = visibility
                .direction
                .as_deref()
                .map(|d| format!(" ({d})"))
                .unwrap_or_default();
            println!(
                "  {:<18} {} m{}",
                "Visibility:", visibility.distance_meters, sector
            );
        }
        None => println!("  {:<18} {}", "Visibility:", absent()),
    }

    if decoded.rvr.is_empty() {
        println!("  {:<18} {}", "RVR:", absent());
    } else {
        for entry in &decoded.rvr {
            println!(
                "  {:<18} runway {}: {} m",
                "RVR:", entry.runway, entry.visibility_meters
            );
        }
    }

    if decoded.change_groups.is_empty() {
        println!("  {:<18} {}", "Change groups:", absent());
    } else {
        for (keyword, text) in decoded.change_groups.iter() {
            println!("  {:<18} {} {}", "Change group:", keyword.to_string().bold(), text);
        }
    }
}

fn absent() -> colored::ColoredString {
    "not reported".dimmed()
}

/// Configure the tracing subscriber from the verbosity flags
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::EnvFilter;

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("metar_decoder={}", log_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| Error::configuration(format!("failed to initialize logging: {e}")))?;

    Ok(())
}
