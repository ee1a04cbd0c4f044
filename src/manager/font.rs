//! Font backend: clone a font repository and place matching files into the
//! platform font directory
//!
//! A font target names a git URL and a file glob (`MesloLGS*.ttf`). Presence
//! is judged by the glob matching anything already in the font directory.

use std::path::{Path, PathBuf};

use wax::{CandidatePath, Glob, Pattern};

use super::command::status_ok;
use super::git_clone::shallow_clone;
use super::ManagerBackend;
use crate::error::{DevupError, Result};
use crate::manifest::{InstallTarget, ManagerKind};
use crate::platform::Platform;

pub struct FontManager {
    platform: Platform,
}

impl FontManager {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    fn font_dir(&self) -> Option<PathBuf> {
        if let Some(dir) = dirs::font_dir() {
            return Some(dir);
        }
        // Windows has no font dir in the dirs crate; per-user fonts live
        // under LocalAppData
        dirs::data_local_dir().map(|d| d.join("Microsoft").join("Windows").join("Fonts"))
    }

    fn register(&self, installed: &[PathBuf]) {
        match self.platform {
            // Rebuild the fontconfig cache so terminals see the new family
            // without a re-login. WSL fonts are also picked up by the
            // Windows host from the Linux font dir when interop is enabled,
            // so the same path covers both Linux variants. A missing
            // fc-cache is tolerated: the cache rebuilds itself on next login.
            Platform::LinuxNative | Platform::LinuxCompat => {
                let _ = status_ok("fc-cache", &["-f"]);
            }
            // Per-user font files under LocalAppData are invisible to
            // applications until a registry value in the user hive points at
            // them. Registration failures are tolerated like fc-cache: the
            // files are in place and the entry can be added by hand.
            Platform::WindowsNative => {
                for path in installed {
                    let _ = status_ok(
                        "powershell",
                        &[
                            "-NoProfile",
                            "-NonInteractive",
                            "-Command",
                            &registry_add_command(path),
                        ],
                    );
                }
            }
            // macOS picks up ~/Library/Fonts without registration
            _ => {}
        }
    }
}

/// Registry value name for a font file, e.g. `MesloLGS NF Regular (TrueType)`
fn registry_entry_name(file_name: &str) -> String {
    let (stem, kind) = match file_name.rsplit_once('.') {
        Some((stem, ext)) if ext.eq_ignore_ascii_case("otf") => (stem, "OpenType"),
        Some((stem, _)) => (stem, "TrueType"),
        None => (file_name, "TrueType"),
    };
    format!("{stem} ({kind})")
}

/// PowerShell command registering one per-user font file in the user hive
fn registry_add_command(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    format!(
        "New-ItemProperty -Path 'HKCU:\\Software\\Microsoft\\Windows NT\\CurrentVersion\\Fonts' \
         -Name '{}' -Value '{}' -PropertyType String -Force",
        registry_entry_name(&file_name),
        path.display()
    )
}

fn glob_matches(pattern: &str, file_name: &str) -> bool {
    Glob::new(pattern)
        .map(|glob| glob.is_match(CandidatePath::from(Path::new(file_name))))
        .unwrap_or(false)
}

fn any_match_under(dir: &Path, pattern: &str) -> bool {
    walkdir::WalkDir::new(dir)
        .max_depth(2)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .any(|entry| glob_matches(pattern, &entry.file_name().to_string_lossy()))
}

impl ManagerBackend for FontManager {
    fn kind(&self) -> ManagerKind {
        ManagerKind::Font
    }

    fn check_present(&self, target: &InstallTarget) -> bool {
        let Some(pattern) = target.metadata.pattern.as_deref() else {
            return false;
        };
        let Some(font_dir) = self.font_dir() else {
            return false;
        };
        font_dir.is_dir() && any_match_under(&font_dir, pattern)
    }

    fn install(&self, target: &InstallTarget) -> Result<()> {
        let url = target
            .metadata
            .url
            .as_deref()
            .ok_or_else(|| missing_field(target, "source URL"))?;
        let pattern = target
            .metadata
            .pattern
            .as_deref()
            .ok_or_else(|| missing_field(target, "file pattern"))?;
        let font_dir = self.font_dir().ok_or(DevupError::HomeDirNotFound)?;

        let staging = tempfile::tempdir().map_err(|e| DevupError::IoError {
            message: format!("Failed to create staging directory: {e}"),
        })?;
        shallow_clone(url, &staging.path().join("repo"))?;

        std::fs::create_dir_all(&font_dir).map_err(|e| DevupError::FileWriteFailed {
            path: font_dir.display().to_string(),
            reason: e.to_string(),
        })?;

        let mut copied = Vec::new();
        for entry in walkdir::WalkDir::new(staging.path())
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|entry| entry.file_type().is_file())
        {
            let name = entry.file_name().to_string_lossy().to_string();
            if !glob_matches(pattern, &name) {
                continue;
            }
            let dest = font_dir.join(&name);
            std::fs::copy(entry.path(), &dest).map_err(|e| DevupError::FileWriteFailed {
                path: dest.display().to_string(),
                reason: e.to_string(),
            })?;
            copied.push(dest);
        }

        if copied.is_empty() {
            return Err(DevupError::CommandFailed {
                command: format!("font install {}", target.name),
                reason: format!("no files matching '{pattern}' in {url}"),
            });
        }

        self.register(&copied);
        Ok(())
    }

    fn remediation(&self, target: &InstallTarget) -> String {
        match target.metadata.url.as_deref() {
            Some(url) => format!("git clone --depth 1 {url} && copy the font files by hand"),
            None => format!("install font {} manually", target.name),
        }
    }
}

fn missing_field(target: &InstallTarget, what: &str) -> DevupError {
    DevupError::CommandFailed {
        command: format!("font install {}", target.name),
        reason: format!("target has no {what}"),
    }
}
