use std::path::PathBuf;

use clap::Parser;

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Restrict the check to the named groups
    #[arg(long = "only", value_name = "GROUP", num_args = 1..)]
    pub only: Vec<String>,

    /// Load a custom YAML manifest instead of the built-in one
    #[arg(long, value_name = "PATH", env = "DEVUP_MANIFEST")]
    pub manifest: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::super::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_cli_parsing_check_with_manifest() {
        let cli =
            Cli::try_parse_from(["devup", "check", "--manifest", "team.yaml", "--only", "core"])
                .unwrap();
        match cli.command {
            Commands::Check(args) => {
                assert_eq!(args.manifest, Some(PathBuf::from("team.yaml")));
                assert_eq!(args.only, vec!["core"]);
            }
            _ => panic!("Expected Check command"),
        }
    }
}
