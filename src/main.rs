use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use loansim::application::batch::simulate_batch;
use loansim::application::engine::LoanSimulator;
use loansim::domain::loan::LoanRequest;
use loansim::domain::ports::ClockRef;
use loansim::infrastructure::clock::{FixedClock, SystemClock};
use loansim::interfaces::csv::request_reader::RequestReader;
use loansim::interfaces::csv::result_writer::ResultWriter;
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Evaluate as of this date (YYYY-MM-DD) instead of today.
    #[arg(long, global = true, env = "LOANSIM_AS_OF")]
    as_of: Option<NaiveDate>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Simulate a single loan and print the result as JSON
    Simulate {
        #[arg(long, allow_hyphen_values = true)]
        principal: Decimal,
        #[arg(long)]
        birth_date: NaiveDate,
        #[arg(long, allow_hyphen_values = true)]
        term_months: i32,
    },
    /// Simulate every request in a CSV file and print the results as CSV
    Batch {
        /// Input CSV with a `principal,birthDate,termMonths` header
        input: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let clock: ClockRef = match cli.as_of {
        Some(date) => Arc::new(FixedClock(date)),
        None => Arc::new(SystemClock),
    };
    let simulator = Arc::new(LoanSimulator::new(clock));

    match cli.command {
        Command::Simulate {
            principal,
            birth_date,
            term_months,
        } => {
            let request = LoanRequest::new(principal, birth_date, term_months);
            let result = simulator.simulate(&request)?;
            let json = serde_json::to_string_pretty(&result).into_diagnostic()?;
            println!("{json}");
        }
        Command::Batch { input } => {
            let file = File::open(input).into_diagnostic()?;
            let mut requests = Vec::new();
            for (row, request) in RequestReader::new(file).requests() {
                match request {
                    Ok(request) => requests.push((row, request)),
                    Err(e) => eprintln!("Error in row {row}: {e}"),
                }
            }

            let today = simulator.today();
            tracing::info!(rows = requests.len(), %today, "simulating batch");
            let outcomes = simulate_batch(Arc::clone(&simulator), today, requests).await;

            let stdout = io::stdout();
            let mut writer = ResultWriter::new(stdout.lock());
            for outcome in outcomes {
                match outcome.result {
                    Ok(result) => writer.write_result(outcome.row, &result)?,
                    Err(e) => eprintln!("Error in row {}: {e}", outcome.row),
                }
            }
            writer.flush()?;
        }
    }

    Ok(())
}
