//! `squares` command line
//!
//! Runs one sequence operation against a JSON store and exits:
//!
//! | exit code | meaning                          |
//! |-----------|----------------------------------|
//! | 0         | success                          |
//! | 1         | storage or configuration failure |
//! | 2         | nothing to list / remove         |

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use square_sequencer_core::{SequenceError, SequenceManager, SequencerConfig, Square};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const EXIT_FAILURE: u8 = 1;
const EXIT_EMPTY: u8 = 2;

/// What a successful operation produced
#[derive(Debug)]
enum Outcome {
    Listed(Vec<Square>),
    Added(Square),
    Removed(Square),
    Reset,
}

fn cli() -> Command {
    Command::new("squares")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Place squares on a spiral grid and manage the stored sequence")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("JSON config file"),
        )
        .arg(
            Arg::new("store")
                .long("store")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Square store file (overrides config)"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .global(true)
                .value_parser(value_parser!(u64))
                .help("Colour seed for reproducible runs (overrides config)"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Print results as JSON"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log store activity to stderr"),
        )
        .subcommand(Command::new("list").about("List all squares in insertion order"))
        .subcommand(Command::new("add").about("Add the next square"))
        .subcommand(Command::new("delete-last").about("Remove the most recently added square"))
        .subcommand(Command::new("reset").about("Remove all squares"))
}

fn main() -> ExitCode {
    let matches = cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    match run(&matches) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(matches: &ArgMatches) -> anyhow::Result<ExitCode> {
    let config = load_config(matches)?;
    let manager = SequenceManager::from_config(&config);
    tracing::debug!(store = %config.store_path.display(), "using store");

    let (name, result) = match matches.subcommand() {
        Some(("list", _)) => ("list", manager.list().map(Outcome::Listed)),
        Some(("add", _)) => ("add", manager.add().map(Outcome::Added)),
        Some(("delete-last", _)) => ("delete-last", manager.delete_last().map(Outcome::Removed)),
        Some(("reset", _)) => ("reset", manager.reset().map(|()| Outcome::Reset)),
        _ => anyhow::bail!("unknown command"),
    };

    match result {
        Ok(outcome) => {
            println!("{}", render(&outcome, matches.get_flag("json"))?);
            Ok(ExitCode::SUCCESS)
        }
        Err(SequenceError::Empty) => {
            eprintln!("{}", empty_message(name));
            Ok(ExitCode::from(EXIT_EMPTY))
        }
        Err(e) => Err(anyhow::Error::new(e).context(format!("{} failed", name))),
    }
}

/// Config file (if any) with command line overrides applied
fn load_config(matches: &ArgMatches) -> anyhow::Result<SequencerConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => SequencerConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SequencerConfig::default(),
    };

    if let Some(store) = matches.get_one::<PathBuf>("store") {
        config.store_path = store.clone();
    }
    if let Some(seed) = matches.get_one::<u64>("seed") {
        config.rng_seed = Some(*seed);
    }

    config.validate()?;
    Ok(config)
}

fn empty_message(command: &str) -> &'static str {
    match command {
        "delete-last" => "No squares to remove",
        _ => "No squares found",
    }
}

fn render(outcome: &Outcome, json: bool) -> anyhow::Result<String> {
    if json {
        let value = match outcome {
            Outcome::Listed(squares) => serde_json::to_value(squares)?,
            Outcome::Added(square) | Outcome::Removed(square) => serde_json::to_value(square)?,
            Outcome::Reset => serde_json::json!({ "reset": true }),
        };
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    Ok(match outcome {
        Outcome::Listed(squares) => squares
            .iter()
            .map(describe)
            .collect::<Vec<_>>()
            .join("\n"),
        Outcome::Added(square) => format!("added {}", describe(square)),
        Outcome::Removed(square) => format!("removed {}", describe(square)),
        Outcome::Reset => "All squares have been reset".to_string(),
    })
}

fn describe(square: &Square) -> String {
    format!(
        "#{:<4} ({}, {}) {}",
        square.index, square.x, square.y, square.color
    )
}
