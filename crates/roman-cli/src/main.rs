//! Roman CLI - Command-line interface for Roman numeral conversion.

use clap::{Parser, Subcommand};

mod commands;
mod errors;
mod logging;
mod output;

use commands::{convert, normalize, symbols};

#[derive(Parser)]
#[command(name = "roman")]
#[command(about = "Best-effort Roman numeral to Arabic conversion")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert Roman numerals to decimal values
    Convert {
        /// Numerals to convert (reads one per line from stdin if none given)
        numerals: Vec<String>,
        /// Read numerals from a file, one per line
        #[arg(long, conflicts_with = "numerals")]
        file: Option<String>,
        /// Output one JSON report per line
        #[arg(long)]
        json: bool,
        /// Reject empty, lossy, and non-classical numerals
        #[arg(long)]
        strict: bool,
    },
    /// Show the canonical letter sequence for an input
    Normalize {
        /// Input to normalize
        input: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List every accepted symbol and its expansion
    Symbols {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert {
            numerals,
            file,
            json,
            strict,
        } => convert::run(numerals, file, json, strict),
        Commands::Normalize { input, json } => normalize::run(input, json),
        Commands::Symbols { json } => symbols::run(json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
