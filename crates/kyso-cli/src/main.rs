//! Kyso CLI
//!
//! Publish, inspect and manage reports on a Kyso installation.

mod cli;
mod commands;
mod context;
mod error;
mod interactive;

use std::io;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::{Cli, Commands};
use context::Context;
use error::{CliError, Result};
use interactive::LoginFlags;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Some(cmd) => execute_command(cmd, cli.api),
        None => {
            println!("{} Kyso CLI", "kyso".green().bold());
            println!();
            println!("Run {} for available commands.", "kyso --help".cyan());
            Ok(())
        }
    }
}

/// `--verbose` forces DEBUG; otherwise `KYSO_LOG` decides, defaulting to warnings.
fn init_tracing(verbose: bool) -> Result<()> {
    let builder = FmtSubscriber::builder().with_writer(io::stderr);
    let result = if verbose {
        let subscriber = builder
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    } else {
        let filter = EnvFilter::try_from_env("KYSO_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
        let subscriber = builder.with_env_filter(filter).with_target(false).finish();
        tracing::subscriber::set_global_default(subscriber)
    };
    result.map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {e}")))?;
    tracing::debug!("Verbose mode enabled");
    Ok(())
}

fn execute_command(cmd: Commands, api: Option<String>) -> Result<()> {
    if let Commands::Completions { shell } = cmd {
        clap_complete::generate(shell, &mut Cli::command(), "kyso", &mut io::stdout());
        return Ok(());
    }

    let context = Context::from_env(api)?;
    match cmd {
        Commands::Login {
            url,
            username,
            password,
            token,
        } => commands::run_login(
            &context,
            &LoginFlags {
                url,
                username,
                password,
                token,
            },
        ),
        Commands::Logout => commands::run_logout(&context),
        Commands::Whoami { json } => commands::run_whoami(&context, json),
        Commands::Status {
            path,
            version,
            json,
        } => commands::run_status(&context, &path, version, json),
        Commands::Push {
            path,
            message,
            dry_run,
        } => commands::run_push(&context, &path, message.as_deref(), dry_run),
        Commands::Pull { path, version } => commands::run_pull(&context, &path, version),
        Commands::Clone {
            report,
            version,
            path,
        } => commands::run_clone(&context, &report, version, path.as_deref()),
        Commands::Organizations { action } => commands::run_organizations(&context, action),
        Commands::Channels { action } => commands::run_channels(&context, action),
        Commands::Users { action } => commands::run_users(&context, action),
        Commands::Themes { action } => commands::run_themes(&context, action),
        Commands::Profile { action } => commands::run_profile(&context, action),
        Commands::Completions { .. } => Ok(()),
    }
}
