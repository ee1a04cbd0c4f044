//! cargo install backend for Rust command-line tools

use super::command::run_checked;
use super::ManagerBackend;
use crate::error::Result;
use crate::manifest::{InstallTarget, ManagerKind};

pub struct CargoManager;

impl ManagerBackend for CargoManager {
    fn kind(&self) -> ManagerKind {
        ManagerKind::Cargo
    }

    fn check_present(&self, target: &InstallTarget) -> bool {
        // The target is satisfied when its binary is reachable, regardless of
        // whether cargo or the system package manager put it there
        which::which(target.bin_name()).is_ok()
    }

    fn install(&self, target: &InstallTarget) -> Result<()> {
        let mut args = vec!["install"];
        if let Some(version) = target.metadata.version.as_deref() {
            args.push("--version");
            args.push(version);
        }
        args.push(&target.name);
        run_checked("cargo", &args)
    }

    fn remediation(&self, target: &InstallTarget) -> String {
        match target.metadata.version.as_deref() {
            Some(version) => format!("cargo install --version {} {}", version, target.name),
            None => format!("cargo install {}", target.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_present_uses_bin_name() {
        // "cargo" itself is on PATH wherever the test suite builds
        let mut target = InstallTarget::new("some-crate", ManagerKind::Cargo);
        target.metadata.bin = Some("cargo".to_string());
        assert!(CargoManager.check_present(&target));
    }

    #[test]
    fn test_check_present_absent_binary() {
        let target = InstallTarget::new("devup-no-such-tool", ManagerKind::Cargo);
        assert!(!CargoManager.check_present(&target));
    }

    #[test]
    fn test_remediation_with_version_pin() {
        let mut target = InstallTarget::new("du-dust", ManagerKind::Cargo);
        assert_eq!(CargoManager.remediation(&target), "cargo install du-dust");

        target.metadata.version = Some("1.1.1".to_string());
        assert_eq!(
            CargoManager.remediation(&target),
            "cargo install --version 1.1.1 du-dust"
        );
    }
}
