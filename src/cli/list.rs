use std::path::PathBuf;

use clap::Parser;

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Load a custom YAML manifest instead of the built-in one
    #[arg(long, value_name = "PATH", env = "DEVUP_MANIFEST")]
    pub manifest: Option<PathBuf>,
}
