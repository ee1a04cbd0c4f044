//! PowerShell Gallery module backend (Windows)

use super::command::{run_checked, stdout_nonempty};
use super::ManagerBackend;
use crate::error::Result;
use crate::manifest::{InstallTarget, ManagerKind};

pub struct GalleryManager;

impl ManagerBackend for GalleryManager {
    fn kind(&self) -> ManagerKind {
        ManagerKind::GalleryModule
    }

    fn check_present(&self, target: &InstallTarget) -> bool {
        // Get-Module exits 0 with empty output on a miss, so presence is
        // judged by non-empty stdout
        stdout_nonempty(
            "powershell",
            &[
                "-NoProfile",
                "-NonInteractive",
                "-Command",
                &format!("Get-Module -ListAvailable -Name {}", target.name),
            ],
        )
    }

    fn install(&self, target: &InstallTarget) -> Result<()> {
        run_checked(
            "powershell",
            &[
                "-NoProfile",
                "-NonInteractive",
                "-Command",
                &format!(
                    "Install-Module -Name {} -Scope CurrentUser -Force",
                    target.name
                ),
            ],
        )
    }

    fn remediation(&self, target: &InstallTarget) -> String {
        format!("Install-Module -Name {} -Scope CurrentUser -Force", target.name)
    }
}
