//! devup - developer machine bootstrap
//!
//! A command line tool that installs developer tooling, shell frameworks and
//! fonts from an ordered manifest, idempotently: presence checks skip what is
//! already there, bounded retries absorb transient failures, and a per-run
//! summary reports what an operator still has to fix by hand.

use clap::Parser;

mod cli;
mod commands;
mod error;
mod hash;
mod installer;
mod manager;
mod manifest;
mod orchestrator;
mod platform;
mod profile;
mod progress;
mod report;
mod summary;

use cli::{Cli, Commands};
use error::{DevupError, Result};

/// Abort before any install attempt when the host is not a supported platform
fn check_supported_platform() -> Result<()> {
    let detected = platform::detect();
    if !detected.is_supported() {
        return Err(DevupError::UnsupportedPlatform {
            os: std::env::consts::OS.to_string(),
        });
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    // Version and completions work anywhere; everything else needs a
    // platform we know how to drive
    let needs_platform = matches!(
        cli.command,
        Commands::Install(_) | Commands::Check(_) | Commands::List(_)
    );

    if needs_platform {
        if let Err(e) = check_supported_platform() {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    let result = match cli.command {
        Commands::Install(args) => commands::install::run(cli.verbose, args),
        Commands::Check(args) => commands::check::run(cli.verbose, args),
        Commands::List(args) => commands::list::run(cli.verbose, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
