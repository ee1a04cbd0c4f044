//! Shell completions command

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::CompletionsArgs;
use crate::error::Result;

fn parse_shell(name: &str) -> Option<Shell> {
    match name.to_lowercase().as_str() {
        "bash" => Some(Shell::Bash),
        "elvish" => Some(Shell::Elvish),
        "fish" => Some(Shell::Fish),
        "powershell" | "pwsh" => Some(Shell::PowerShell),
        "zsh" => Some(Shell::Zsh),
        _ => None,
    }
}

/// Generate shell completions
pub fn run(args: CompletionsArgs) -> Result<()> {
    let Some(shell) = parse_shell(&args.shell) else {
        eprintln!("Unknown shell: {}", args.shell);
        eprintln!("Supported shells: bash, elvish, fish, powershell, zsh");
        std::process::exit(1);
    };

    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "devup", &mut std::io::stdout().lock());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shell_case_insensitive() {
        assert_eq!(parse_shell("Bash"), Some(Shell::Bash));
        assert_eq!(parse_shell("ZSH"), Some(Shell::Zsh));
    }

    #[test]
    fn test_parse_shell_pwsh_alias() {
        assert_eq!(parse_shell("pwsh"), Some(Shell::PowerShell));
        assert_eq!(parse_shell("powershell"), Some(Shell::PowerShell));
    }

    #[test]
    fn test_parse_shell_unknown() {
        assert_eq!(parse_shell("tcsh"), None);
    }

    #[test]
    fn test_completions_generate_fish() {
        let args = CompletionsArgs {
            shell: "fish".to_string(),
        };
        assert!(run(args).is_ok());
    }
}
