//! Shell profile writing with backup-before-overwrite
//!
//! The profile embeds the oh-my-zsh plugin list (only plugins actually on
//! disk after the run) and PATH lines for the version-manager homes. The
//! previous profile is copied aside before overwrite, named by a short
//! content hash; there is no automated rollback, the backup exists for manual
//! recovery. Writing the same content twice is a no-op.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{DevupError, Result};
use crate::hash::{short_hash, short_hash_file};
use crate::manager::git_clone::expand_dest;
use crate::manifest::{ManagerKind, ManifestSet};
use crate::platform::Platform;

/// What the profile write did
#[derive(Debug)]
pub struct ProfileOutcome {
    pub path: PathBuf,
    /// Where the previous profile was copied, when one existed and differed
    pub backup: Option<PathBuf>,
    /// True when the existing profile already had this content
    pub unchanged: bool,
}

/// Path of the profile file devup manages on this platform
pub fn profile_path(platform: Platform) -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(DevupError::HomeDirNotFound)?;
    let path = match platform {
        Platform::WindowsNative => home
            .join("Documents")
            .join("PowerShell")
            .join("Microsoft.PowerShell_profile.ps1"),
        _ => home.join(".zshrc"),
    };
    Ok(path)
}

/// oh-my-zsh plugin names whose clone directory exists on disk
///
/// Scans the manifest set for git-clone targets destined for the oh-my-zsh
/// custom plugin directory; a declined or failed target simply is not on disk
/// and drops out of the list.
pub fn installed_zsh_plugins(set: &ManifestSet) -> Vec<String> {
    let mut plugins = Vec::new();
    for manifest in &set.manifests {
        for target in &manifest.targets {
            if target.manager != ManagerKind::GitClone {
                continue;
            }
            let Some(dest) = target.metadata.dest.as_deref() else {
                continue;
            };
            if !dest.contains("custom/plugins") {
                continue;
            }
            if expand_dest(dest).map(|p| p.is_dir()).unwrap_or(false) {
                plugins.push(target.name.clone());
            }
        }
    }
    plugins
}

/// Render the zsh profile content
pub fn render_zsh(plugins: &[String]) -> String {
    let mut plugin_list = vec!["git".to_string()];
    plugin_list.extend(plugins.iter().cloned());

    format!(
        r#"# Managed by devup. Edits are preserved in a .bak file on the next run.
export ZSH="$HOME/.oh-my-zsh"
ZSH_THEME="powerlevel10k/powerlevel10k"

plugins=({plugins})

[ -f "$ZSH/oh-my-zsh.sh" ] && source "$ZSH/oh-my-zsh.sh"

export EDITOR=nvim

# Version managers
export NVM_DIR="$HOME/.nvm"
[ -s "$NVM_DIR/nvm.sh" ] && \. "$NVM_DIR/nvm.sh"
export PYENV_ROOT="$HOME/.pyenv"
[ -d "$PYENV_ROOT/bin" ] && export PATH="$PYENV_ROOT/bin:$PATH"

# Cargo tools
[ -d "$HOME/.cargo/bin" ] && export PATH="$HOME/.cargo/bin:$PATH"
"#,
        plugins = plugin_list.join(" ")
    )
}

/// Render the PowerShell profile content
pub fn render_powershell() -> String {
    r#"# Managed by devup. Edits are preserved in a .bak file on the next run.
Import-Module posh-git -ErrorAction SilentlyContinue
Import-Module Terminal-Icons -ErrorAction SilentlyContinue
Set-PSReadLineOption -PredictionSource History -ErrorAction SilentlyContinue

$env:EDITOR = "nvim"
"#
    .to_string()
}

/// Write `content` to `path`, backing up any differing existing file
pub fn write_with_backup(path: &Path, content: &str) -> Result<ProfileOutcome> {
    if path.exists() {
        let existing_hash = short_hash_file(path)?;
        if existing_hash == short_hash(content.as_bytes()) {
            return Ok(ProfileOutcome {
                path: path.to_path_buf(),
                backup: None,
                unchanged: true,
            });
        }

        let backup = backup_path(path, &existing_hash);
        std::fs::copy(path, &backup).map_err(|e| DevupError::ProfileWriteFailed {
            path: backup.display().to_string(),
            reason: e.to_string(),
        })?;
        write_atomic(path, content)?;
        return Ok(ProfileOutcome {
            path: path.to_path_buf(),
            backup: Some(backup),
            unchanged: false,
        });
    }

    write_atomic(path, content)?;
    Ok(ProfileOutcome {
        path: path.to_path_buf(),
        backup: None,
        unchanged: false,
    })
}

/// Render and write the profile for this platform
pub fn write_profile(platform: Platform, set: &ManifestSet) -> Result<ProfileOutcome> {
    let path = profile_path(platform)?;
    let content = match platform {
        Platform::WindowsNative => render_powershell(),
        _ => render_zsh(&installed_zsh_plugins(set)),
    };
    write_with_backup(&path, &content)
}

fn backup_path(path: &Path, hash: &str) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "profile".to_string());
    path.with_file_name(format!("{name}.bak.{hash}"))
}

fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let parent = path.parent().ok_or_else(|| DevupError::ProfileWriteFailed {
        path: path.display().to_string(),
        reason: "path has no parent directory".to_string(),
    })?;
    std::fs::create_dir_all(parent).map_err(|e| DevupError::ProfileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let mut temp =
        tempfile::NamedTempFile::new_in(parent).map_err(|e| DevupError::ProfileWriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
    temp.write_all(content.as_bytes())
        .map_err(|e| DevupError::ProfileWriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
    temp.persist(path).map_err(|e| DevupError::ProfileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(())
}
