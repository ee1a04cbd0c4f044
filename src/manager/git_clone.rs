//! Backend for tools installed by cloning a git repository
//!
//! Covers shell frameworks (oh-my-zsh and its plugins) and version managers
//! (nvm, pyenv): anything whose "install" is a clone into a well-known
//! directory.

use std::path::{Path, PathBuf};

use git2::{FetchOptions, build::RepoBuilder};

use super::ManagerBackend;
use crate::error::{DevupError, Result};
use crate::manifest::{InstallTarget, ManagerKind};

pub struct GitCloneManager;

impl ManagerBackend for GitCloneManager {
    fn kind(&self) -> ManagerKind {
        ManagerKind::GitClone
    }

    fn check_present(&self, target: &InstallTarget) -> bool {
        if let Some(dest) = target.metadata.dest.as_deref() {
            if let Ok(path) = expand_dest(dest) {
                if path.is_dir() {
                    return true;
                }
            }
        }
        // Some cloned tools also ship a launcher that may already be on PATH
        target.metadata.bin.as_deref().is_some_and(|bin| which::which(bin).is_ok())
    }

    fn install(&self, target: &InstallTarget) -> Result<()> {
        let url = target
            .metadata
            .url
            .as_deref()
            .ok_or_else(|| DevupError::GitCloneFailed {
                url: target.name.clone(),
                reason: "target has no source URL".to_string(),
            })?;
        let dest = target
            .metadata
            .dest
            .as_deref()
            .ok_or_else(|| DevupError::GitCloneFailed {
                url: url.to_string(),
                reason: "target has no destination directory".to_string(),
            })?;

        let dest = expand_dest(dest)?;
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent).map_err(|e| DevupError::GitCloneFailed {
                url: url.to_string(),
                reason: format!("Failed to create parent directory: {e}"),
            })?;
        }

        shallow_clone(url, &dest)
    }

    fn remediation(&self, target: &InstallTarget) -> String {
        match (target.metadata.url.as_deref(), target.metadata.dest.as_deref()) {
            (Some(url), Some(dest)) => format!("git clone --depth 1 {url} {dest}"),
            (Some(url), None) => format!("git clone --depth 1 {url}"),
            _ => format!("install {} manually", target.name),
        }
    }
}

/// Shallow-clone `url` into `target`
///
/// Authentication is delegated to git's native credential system; manifest
/// URLs are public HTTPS in practice.
pub(crate) fn shallow_clone(url: &str, target: &Path) -> Result<()> {
    let mut fetch_options = FetchOptions::new();
    fetch_options.depth(1);

    let mut builder = RepoBuilder::new();
    builder.fetch_options(fetch_options);

    builder
        .clone(url, target)
        .map(|_| ())
        .map_err(|e| DevupError::GitCloneFailed {
            url: url.to_string(),
            reason: e.message().to_string(),
        })
}

/// Expand a leading `~` in a manifest destination to the home directory
///
/// Only the current user's home is expandable; `~user` forms are rejected so
/// they never silently resolve to a relative directory literally named `~user`.
pub(crate) fn expand_dest(dest: &str) -> Result<PathBuf> {
    if dest == "~" {
        return dirs::home_dir().ok_or(DevupError::HomeDirNotFound);
    }
    if let Some(rest) = dest.strip_prefix("~/") {
        let home = dirs::home_dir().ok_or(DevupError::HomeDirNotFound)?;
        return Ok(home.join(rest));
    }
    if dest.starts_with('~') {
        return Err(DevupError::IoError {
            message: format!("Unsupported destination '{dest}': only '~' and '~/' expand"),
        });
    }
    Ok(PathBuf::from(dest))
}
