//! Lucidt CLI - lexes Lucid source files and prints their tokens.
//!
//! This is the main entry point for the lucidt CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{common::OutputFormat, run_lex, LexArgs};
use config::Config;
use error::{LucidtError, Result};

/// Lucidt - lexes Lucid source files
///
/// Lucidt runs the Lucid lexer over source files and prints the resulting
/// tokens with their locations, as text or JSON.
#[derive(Parser, Debug)]
#[command(name = "lucidt")]
#[command(author = "Lucid Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexes Lucid source files and prints their tokens", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "LUCIDT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "LUCIDT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "LUCIDT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the lucidt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Lex source files and print their tokens
    ///
    /// Each file is lexed independently. A file that fails to lex is
    /// reported on stderr with the offending line; the other files are
    /// still printed.
    Lex(LexCommand),
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCommand {
    /// Source files to lex
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Leave spaces, newlines and comments out of the output
    #[arg(short, long)]
    skip_trivia: bool,

    /// Number of files lexed in parallel (default: from config, else CPU count)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    jobs: Option<u32>,
}

/// Main entry point for the lucidt CLI.
///
/// Parses command-line arguments, loads configuration, initializes logging,
/// and dispatches to the appropriate command handler. Any error is printed
/// to stderr and turns into a failing exit status.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        },
    }
}

fn run(cli: Cli) -> Result<()> {
    // Configuration comes first so that its `verbose` key can raise the
    // log level.
    let config = load_config(cli.config.as_deref())?;
    let verbose = cli.verbose || config.verbose;

    init_logging(verbose, cli.no_color)?;

    execute_command(cli.command, verbose, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so that token dumps on stdout stay machine-readable.
/// `RUST_LOG` overrides the level chosen from `verbose`.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| LucidtError::Config(format!("failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    match command {
        Commands::Lex(args) => execute_lex(args, verbose, config),
    }
}

/// Execute the lex command.
fn execute_lex(args: LexCommand, verbose: bool, config: Config) -> Result<()> {
    let lex_args = LexArgs {
        verbose,
        files: args.files,
        format: args.format,
        skip_trivia: args.skip_trivia,
        jobs: args.jobs,
    };
    run_lex(lex_args, config)
}
