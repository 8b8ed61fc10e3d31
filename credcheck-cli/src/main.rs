//! credcheck CLI - check credentials and validate credential files locally

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use credcheck_core::{CredentialChecker, CredentialStore};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(name = "credcheck")]
#[command(about = "credcheck - Verify usernames and passwords against a fixed credential list")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a username/password pair
    Check {
        /// Username to check
        #[arg(short, long)]
        username: String,

        /// Password to check
        #[arg(short, long)]
        password: String,

        /// Credentials file (defaults to the built-in list)
        #[arg(short, long)]
        credentials: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Validate a credentials file
    Validate {
        /// Credentials file path
        file: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct CheckOutput<'a> {
    username: &'a str,
    matched: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("credcheck=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    match cli.command {
        Commands::Check {
            username,
            password,
            credentials,
            format,
        } => check_command(&username, &password, credentials, format),
        Commands::Validate { file } => validate_command(file),
    }
}

fn load_store(credentials: Option<PathBuf>) -> Result<CredentialStore> {
    match credentials {
        Some(path) => CredentialStore::load(&path)
            .with_context(|| format!("Failed to load credentials from {}", path.display())),
        None => {
            debug!("Using built-in credentials");
            Ok(CredentialStore::builtin())
        }
    }
}

fn check_command(
    username: &str,
    password: &str,
    credentials: Option<PathBuf>,
    format: OutputFormat,
) -> Result<ExitCode> {
    let checker = CredentialChecker::new(load_store(credentials)?);
    let matched = checker.check(Some(username), Some(password));

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&CheckOutput { username, matched })?
            );
        }
        OutputFormat::Text => {
            let status = if matched {
                "ACCEPTED".green()
            } else {
                "REJECTED".red()
            };
            println!("{} Username: {}", "▸".blue(), username);
            println!("{} Status: {}", "▸".blue(), status);
        }
    }

    Ok(if matched {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn validate_command(file: PathBuf) -> Result<ExitCode> {
    println!("{} Validating {}...", "→".blue(), file.display());

    match CredentialStore::load(&file) {
        Ok(store) => {
            println!("{} Credentials file is valid!", "✓".green());
            println!("  Records: {}", store.len());
            for username in store.usernames() {
                println!("  - {}", username);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("{} Credentials file is invalid:", "✗".red());
            println!("  {}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
