use std::path::PathBuf;

use clap::Parser;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Bootstrap with every optional group:\n    devup install --yes\n\n\
                   Core packages only:\n    devup install --only core\n\n\
                   Custom manifest:\n    devup install --manifest ./team.yaml\n\n\
                   More patient retries:\n    devup install --retries 5 --backoff-secs 10")]
pub struct InstallArgs {
    /// Accept every optional group without prompting
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Decline every optional group without prompting
    #[arg(long, conflicts_with = "yes")]
    pub skip_optional: bool,

    /// Restrict the run to the named groups (e.g. --only core fonts)
    #[arg(long = "only", value_name = "GROUP", num_args = 1..)]
    pub only: Vec<String>,

    /// Load a custom YAML manifest instead of the built-in one
    #[arg(long, value_name = "PATH", env = "DEVUP_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// Override the per-manager retry attempt count
    #[arg(long, value_name = "N")]
    pub retries: Option<u32>,

    /// Override the pause between retry attempts
    #[arg(long, value_name = "SECONDS")]
    pub backoff_secs: Option<u64>,

    /// Do not write the shell profile
    #[arg(long)]
    pub no_profile: bool,
}
