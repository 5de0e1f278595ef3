//! Premium Rater - command-line quoting tool
//!
//! # Usage
//!
//! ```bash
//! # Quote a driver with the default text report
//! premium-rater quote --age 30 --make Toyota --model Camry
//!
//! # Quote with accidents, as JSON
//! premium-rater quote --age 70 --make BMW --model X5 --accidents 2 --format json
//!
//! # Show the rate table
//! premium-rater rates
//! ```
//!
//! # Environment Variables
//!
//! * `RATING_CURRENCY` - Currency of the rate table (default: USD)
//! * `RATING_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `RATING_OUTPUT` - Default report format: text or json (default: text)
//! * `RUST_LOG` - Overrides `RATING_LOG_LEVEL` when set

use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use domain_rating::DriverProfile;
use interface_cli::{commands, telemetry, CliError, OutputFormat, RatingConfig};

#[derive(Parser, Debug)]
#[command(
    name = "premium-rater",
    about = "Quote driver insurance premiums from the built-in rate table",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rate a driver and print an itemized premium
    Quote(QuoteArgs),
    /// Print the knowledge base the engine rates against
    Rates(RatesArgs),
}

#[derive(Args, Debug)]
struct QuoteArgs {
    /// Driver age in whole years
    #[arg(long)]
    age: u32,
    /// Vehicle make, e.g. Toyota
    #[arg(long)]
    make: String,
    /// Vehicle model, e.g. Camry
    #[arg(long)]
    model: String,
    /// At-fault accidents in the last five years
    #[arg(long, default_value_t = 0)]
    accidents: u32,
    /// Report format (overrides RATING_OUTPUT)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Args, Debug)]
struct RatesArgs {
    /// Report format (overrides RATING_OUTPUT)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

fn main() -> ExitCode {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "premium-rater failed");
            eprintln!("error: {err:#}");
            let code = err
                .downcast_ref::<CliError>()
                .map(CliError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}

/// Loads configuration, initializes logging, and dispatches the command.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded, the rate table fails
/// verification, or the driver profile is invalid.
fn run(cli: Cli) -> anyhow::Result<String> {
    let config = RatingConfig::from_env().context("failed to load RATING_* configuration")?;
    telemetry::init(&config.log_level)?;

    let engine = commands::build_engine(&config)?;

    let output = match cli.command {
        Command::Quote(args) => {
            let format = args.format.unwrap_or(config.output);
            let profile = DriverProfile::new(args.age, args.make, args.model, args.accidents);
            commands::quote(&engine, &profile, format)?
        }
        Command::Rates(args) => {
            commands::rates(&engine, args.format.unwrap_or(config.output))?
        }
    };

    Ok(output)
}
