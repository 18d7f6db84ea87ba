use clap::Parser;
use metar_decoder::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic with signal handling
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => result,
            _ = tokio::signal::ctrl_c() => {
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err(metar_decoder::Error::interrupted("interrupted by user"))
            }
        }
    });

    match result {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("METAR Decoder - Aviation Weather Report Decoder");
    println!("===============================================");
    println!();
    println!("Decode METAR aviation weather reports into structured fields:");
    println!("observation time, automation flag, wind, visibility, runway visual");
    println!("range, and forecast-change groups.");
    println!();
    println!("USAGE:");
    println!("    metar-decoder <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    decode      Decode a manually supplied METAR message");
    println!("    fetch       Fetch reports from the NOAA server and decode them");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Decode a report supplied on the command line:");
    println!("    metar-decoder decode LFLY \"LFLY 292200Z AUTO VRB03KT CAVOK 06/M00 Q1000 NOSIG\"");
    println!();
    println!("    # Fetch and decode live reports for several stations:");
    println!("    metar-decoder fetch LFLY EGLL KJFK");
    println!();
    println!("    # Emit the decoded report as JSON:");
    println!("    metar-decoder decode LFLY \"LFLY 292200Z 22010G25KT 040V210 CAVOK\" --format json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    metar-decoder <COMMAND> --help");
}
