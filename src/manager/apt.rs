//! apt backend (Debian-family Linux and WSL)

use super::command::{run_checked, status_ok};
use super::ManagerBackend;
use crate::error::Result;
use crate::manifest::{InstallTarget, ManagerKind};

pub struct AptManager;

impl ManagerBackend for AptManager {
    fn kind(&self) -> ManagerKind {
        ManagerKind::Apt
    }

    fn check_present(&self, target: &InstallTarget) -> bool {
        // dpkg exits non-zero for unknown or not-installed packages
        status_ok("dpkg", &["-s", &target.name])
    }

    fn install(&self, target: &InstallTarget) -> Result<()> {
        run_checked("sudo", &["apt-get", "install", "-y", &target.name])
    }

    fn remediation(&self, target: &InstallTarget) -> String {
        format!("sudo apt-get install -y {}", target.name)
    }
}
