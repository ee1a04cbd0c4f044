//! Baseline package-manager bootstrap
//!
//! Runs once before the manifest walk. A broken baseline manager is the one
//! per-run condition that cannot be recovered target-by-target, so failure
//! here is fatal.

use std::path::Path;

use crate::error::{DevupError, Result};
use crate::manager::command::run_checked;
use crate::platform::{Platform, PlatformProfile};

const BREW_INSTALL: &str =
    "curl -fsSL https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh | NONINTERACTIVE=1 bash";

/// Ensure the profile's baseline package manager is usable
pub fn ensure_package_manager(profile: &PlatformProfile) -> Result<()> {
    match profile.platform {
        Platform::LinuxNative | Platform::LinuxCompat => require_on_path("apt-get"),
        Platform::MacOs => ensure_brew(),
        Platform::WindowsNative => require_on_path("powershell"),
        Platform::Unknown => Err(DevupError::UnsupportedPlatform {
            os: std::env::consts::OS.to_string(),
        }),
    }
}

fn require_on_path(binary: &str) -> Result<()> {
    if which::which(binary).is_ok() {
        return Ok(());
    }
    Err(DevupError::BootstrapFailed {
        manager: binary.to_string(),
        reason: "not found on PATH".to_string(),
    })
}

fn ensure_brew() -> Result<()> {
    if which::which("brew").is_ok() {
        return Ok(());
    }

    run_checked("bash", &["-c", BREW_INSTALL]).map_err(|e| DevupError::BootstrapFailed {
        manager: "brew".to_string(),
        reason: e.to_string(),
    })?;

    // The installer does not touch the current process environment; make the
    // fresh brew visible to the rest of this run
    for dir in ["/opt/homebrew/bin", "/usr/local/bin"] {
        let path = Path::new(dir);
        if path.join("brew").exists() {
            prepend_search_path(path);
        }
    }

    if which::which("brew").is_ok() {
        Ok(())
    } else {
        Err(DevupError::BootstrapFailed {
            manager: "brew".to_string(),
            reason: "installed but not found on PATH".to_string(),
        })
    }
}

/// Prepend a directory to this process's PATH so targets installed earlier in
/// the run are visible to later ones
pub fn prepend_search_path(dir: &Path) {
    let current = std::env::var_os("PATH").unwrap_or_default();
    let mut parts: Vec<_> = std::env::split_paths(&current).collect();
    if parts.first().map(|p| p.as_path()) == Some(dir) {
        return;
    }
    parts.retain(|p| p != dir);
    parts.insert(0, dir.to_path_buf());
    if let Ok(joined) = std::env::join_paths(parts) {
        // The process is single-threaded; nothing reads PATH concurrently
        unsafe {
            std::env::set_var("PATH", joined);
        }
    }
}
