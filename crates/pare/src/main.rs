//! pare - command-line interface to the Condenser URL shortening service.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};
use console::Style;
use pare_config::{Overrides, load_config, load_config_from};

mod commands;
mod error;
mod exitcode;

use commands::{Context, Outcome, delete, meta, parse_server, shorten};
use error::CliResult;

// ─────────────────────────────────────────────────────────────────────────────
// CLI Structure
// ─────────────────────────────────────────────────────────────────────────────

/// Command-line interface to the Condenser URL shortening service.
#[derive(Parser, Debug)]
#[command(name = "pare")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Condenser server URL (overriding on-disk config)
    #[arg(long, global = true, env = "PARE_SERVER", value_parser = parse_server)]
    pub server: Option<String>,

    /// Condenser API key (overriding on-disk config)
    #[arg(long, global = true, env = "PARE_API_KEY", hide_env_values = true)]
    pub apikey: Option<String>,

    /// Config file to read instead of ~/.pare.json
    #[arg(long, global = true, env = "PARE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shorten a URL (default command)
    #[command(visible_alias = "short")]
    Shorten(shorten::ShortenArgs),

    /// Delete a shortcode
    #[command(visible_aliases = ["del", "rm"])]
    Delete(delete::DeleteArgs),

    /// Get metadata for a code
    Meta(meta::MetaArgs),
}

/// Global flags that take a separate value (`--server URL`).
const GLOBAL_VALUE_FLAGS: [&str; 3] = ["--server", "--apikey", "--config"];

/// Insert `shorten` when no subcommand is named, so `pare <url>` works.
fn with_default_command<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().collect();

    // Skip the program name and any leading global flags.
    let mut index = 1;
    while let Some(arg) = args.get(index).and_then(|a| a.to_str()) {
        if GLOBAL_VALUE_FLAGS.contains(&arg) {
            index += 2;
        } else if arg == "--debug"
            || GLOBAL_VALUE_FLAGS
                .iter()
                .any(|flag| arg.strip_prefix(flag).is_some_and(|rest| rest.starts_with('=')))
        {
            index += 1;
        } else {
            break;
        }
    }

    let Some(first) = args.get(index).and_then(|a| a.to_str()) else {
        return args;
    };
    let known = matches!(first, "help" | "-h" | "--help" | "-V" | "--version")
        || Cli::command().find_subcommand(first).is_some();
    if !known {
        args.insert(index, OsString::from("shorten"));
    }
    args
}

// ─────────────────────────────────────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    let cli = Cli::parse_from(with_default_command(std::env::args_os()));
    init_tracing(cli.debug);

    match run(cli) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(e) => {
            let red = Style::new().red().for_stderr();
            eprintln!("{} {}", red.apply_to("Error:"), e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn init_tracing(debug: bool) {
    use tracing_subscriber::prelude::*;

    let filter = if debug {
        "pare=debug,pare_client=debug,pare_config=debug,warn"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_filter(tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Resolve config, then dispatch to the command handler.
fn run(cli: Cli) -> CliResult<Outcome> {
    let overrides = Overrides {
        server: cli.server,
        api_key: cli.apikey,
    };
    let config = match &cli.config {
        Some(path) => load_config_from(path, &overrides)?,
        None => load_config(&overrides)?,
    };
    tracing::debug!(?config, "resolved config");

    let ctx = Context { config };
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Shorten(args) => shorten::run(args, &ctx, &mut stdout),
        Commands::Delete(args) => delete::run(args, &ctx, &mut stdout),
        Commands::Meta(args) => meta::run(args, &ctx, &mut stdout),
    }
}
