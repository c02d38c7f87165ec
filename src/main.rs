//! Command-line interface for peoplegen
//!
//! # Usage Examples
//!
//! ```bash
//! # Only female names, tab separated
//! peoplegen -f -s $'\t' 20
//!
//! # 60% male, JSON with SSNs
//! peoplegen --male 60 --ssn -F json 50
//!
//! # Birth years between 1950 and 1990, written to a file
//! peoplegen --yearmin 1950 --yearmax 1990 -o people.csv 500
//! ```
//!
//! Any configuration error prints a message and the usage line to stderr
//! and exits with status 1 without producing output.

use clap::{CommandFactory, Parser};
use peoplegen::{Cli, RunConfig};

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing. Stdout carries the generated data.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => {
            e.print()?;
            return Ok(());
        }
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    let today = chrono::Local::now().date_naive();
    let config = match RunConfig::resolve(&cli, today) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{}", Cli::command().render_usage());
            std::process::exit(1);
        }
    };

    peoplegen::execute(&config)?;
    Ok(())
}
