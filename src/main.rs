#![forbid(unsafe_code)]

use addrscan::client::{blockchain_info::BlockchainInfoClient, lookup, lookup_in};
use addrscan::errors::{BlockchainInfoClientError, ConfigError, FetchError};
use addrscan::{config::Config, report};
use chrono::Utc;
use error_iter::ErrorIter as _;
use is_terminal::IsTerminal as _;
use onlyargs::{CliError, OnlyArgs as _};
use onlyargs_derive::OnlyArgs;
use std::io::{self, BufRead as _, Write as _};
use std::{env, process::ExitCode};
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::prelude::*;

/// Look up the balance and transaction history of a Bitcoin address.
#[derive(Debug, OnlyArgs)]
#[footer = "Environment variables:"]
#[footer = "  - RAWADDR_URL accepts a http: or https: URL"]
#[footer = "      default is \"https://blockchain.info\""]
#[footer = "  - RAWADDR_TIMEOUT is the request timeout in seconds. Default is 30."]
#[footer = "  - RUST_LOG sets the log filter, e.g. \"debug\". Default is \"info\"."]
#[footer = "  - TERM_COLOR accepts \"always\" to override automatic terminal sensing"]
struct Args {
    /// Wallet address to look up immediately.
    ///   Prompts for an address when omitted.
    address: Option<String>,

    /// Print the transaction history as a compact table.
    compact: bool,

    /// Print the summary as JSON.
    json: bool,

    /// Show timestamps in UTC instead of local time.
    utc: bool,
}

#[derive(Debug, Error)]
enum Error {
    #[error("Argument parsing error")]
    Args(#[from] CliError),

    #[error("Configuration error")]
    Config(#[from] ConfigError),

    #[error("Unable to create client")]
    Client(#[from] BlockchainInfoClientError),

    #[error("Wallet lookup failed")]
    Fetch(#[from] FetchError),

    #[error("I/O error")]
    Io(#[from] io::Error),

    #[error("Unable to serialize summary")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    // Initialize the tracing subscriber for instrumentation.
    // Uses the `RUST_LOG` environment var for configuration. E.g. `RUST_LOG=debug cargo run`
    //
    // See: https://docs.rs/tracing-subscriber/latest/tracing_subscriber/struct.EnvFilter.html#directives
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    let term_color = env::var("TERM_COLOR")
        .map(|color| color == "always")
        .unwrap_or_else(|_| io::stderr().is_terminal());
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(term_color)
                .with_writer(io::stderr),
        )
        .with(env_filter)
        .init();

    match run(onlyargs::parse()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(Error::Fetch(FetchError::Input(err))) => {
            eprintln!("Warning: {err}");

            ExitCode::FAILURE
        }
        Err(err) => {
            if matches!(err, Error::Args(_)) {
                eprintln!("{}", Args::HELP);
            }

            eprintln!("Error: {err}");
            for source in err.sources().skip(1) {
                eprintln!("  Caused by: {source}");
            }

            ExitCode::FAILURE
        }
    }
}

fn run(args: Result<Args, CliError>) -> Result<(), Error> {
    let args = args?;
    let config = Config::from_env()?;
    debug!("Using {config:?}");

    let client = BlockchainInfoClient::new(&config)?;

    // An address on the command line is looked up right away, otherwise ask for one.
    let address = match args.address.filter(|address| !address.trim().is_empty()) {
        Some(address) => address,
        None => prompt_address()?,
    };

    let summary = if args.utc {
        lookup_in(&client, &address, &Utc)?
    } else {
        lookup(&client, &address)?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else if args.compact {
        print!("{}", report::Compact(&summary));
    } else {
        print!("{}", report::Detailed(&summary));
    }

    Ok(())
}

fn prompt_address() -> Result<String, io::Error> {
    let mut stderr = io::stderr();
    write!(stderr, "Enter a Bitcoin wallet address: ")?;
    stderr.flush()?;

    let mut address = String::new();
    io::stdin().lock().read_line(&mut address)?;

    Ok(address)
}
