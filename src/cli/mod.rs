//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - install: Install command arguments
//! - check: Check command arguments
//! - list: List command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod check;
pub mod completions;
pub mod install;
pub mod list;

pub use check::CheckArgs;
pub use completions::CompletionsArgs;
pub use install::InstallArgs;
pub use list::ListArgs;

/// devup - developer machine bootstrap
///
/// Install developer tooling, shell frameworks and fonts idempotently,
/// with bounded retries and a per-run summary.
#[derive(Parser, Debug)]
#[command(
    name = "devup",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Idempotent developer-machine bootstrap",
    long_about = "devup walks an ordered manifest of installation targets (system packages, \
                  cargo tools, PowerShell modules, fonts, git-cloned shell frameworks), \
                  skips what is already present, retries what fails, and reports a summary \
                  with a remediation command per failure.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  devup install                     \x1b[90m# Bootstrap this machine\x1b[0m\n   \
                  devup install --yes               \x1b[90m# Accept every optional group\x1b[0m\n   \
                  devup install --only core fonts   \x1b[90m# Restrict to named groups\x1b[0m\n   \
                  devup check                       \x1b[90m# Presence checks only, no installs\x1b[0m\n   \
                  devup list                        \x1b[90m# Show this platform's manifest\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install everything the platform manifest names
    Install(InstallArgs),

    /// Report which targets are present and which are missing
    Check(CheckArgs),

    /// List the manifest for this platform
    List(ListArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
