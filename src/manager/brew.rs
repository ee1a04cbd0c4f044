//! Homebrew backends: formulae and casks

use super::command::{run_checked, status_ok};
use super::ManagerBackend;
use crate::error::Result;
use crate::manifest::{InstallTarget, ManagerKind};

pub struct BrewManager;

impl ManagerBackend for BrewManager {
    fn kind(&self) -> ManagerKind {
        ManagerKind::Brew
    }

    fn check_present(&self, target: &InstallTarget) -> bool {
        status_ok("brew", &["list", "--versions", &target.name])
    }

    fn install(&self, target: &InstallTarget) -> Result<()> {
        run_checked("brew", &["install", &target.name])
    }

    fn remediation(&self, target: &InstallTarget) -> String {
        format!("brew install {}", target.name)
    }
}

pub struct BrewCaskManager;

impl ManagerBackend for BrewCaskManager {
    fn kind(&self) -> ManagerKind {
        ManagerKind::BrewCask
    }

    fn check_present(&self, target: &InstallTarget) -> bool {
        status_ok("brew", &["list", "--cask", "--versions", &target.name])
    }

    fn install(&self, target: &InstallTarget) -> Result<()> {
        run_checked("brew", &["install", "--cask", &target.name])
    }

    fn remediation(&self, target: &InstallTarget) -> String {
        format!("brew install --cask {}", target.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remediation_commands() {
        let formula = InstallTarget::new("ripgrep", ManagerKind::Brew);
        assert_eq!(BrewManager.remediation(&formula), "brew install ripgrep");

        let cask = InstallTarget::new("wezterm", ManagerKind::BrewCask);
        assert_eq!(
            BrewCaskManager.remediation(&cask),
            "brew install --cask wezterm"
        );
    }

    #[test]
    fn test_check_present_without_brew() {
        // On hosts without Homebrew the query must answer false, not error
        let target = InstallTarget::new("devup-no-such-formula", ManagerKind::Brew);
        assert!(!BrewManager.check_present(&target));
    }
}
