//! Manifest model: what should be present on the host
//!
//! A manifest set is an ordered list of sub-manifests; each sub-manifest is an
//! ordered list of install targets. Order is significant for display and for
//! the few explicit cross-manifest dependencies (e.g. cargo tools come after
//! the toolchain that provides cargo) but no target depends on another
//! target's completion.

pub mod builtin;
pub mod loader;

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DevupError, Result};

/// Which external installer handles a target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ManagerKind {
    Apt,
    Brew,
    BrewCask,
    Cargo,
    GalleryModule,
    Font,
    GitClone,
}

impl ManagerKind {
    /// Short label used in listings and error messages
    pub fn label(&self) -> &'static str {
        match self {
            ManagerKind::Apt => "apt",
            ManagerKind::Brew => "brew",
            ManagerKind::BrewCask => "brew-cask",
            ManagerKind::Cargo => "cargo",
            ManagerKind::GalleryModule => "gallery-module",
            ManagerKind::Font => "font",
            ManagerKind::GitClone => "git-clone",
        }
    }
}

impl fmt::Display for ManagerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Manager-specific metadata, opaque to the orchestrator
///
/// Backends pick out the fields they understand: `bin` names the executable a
/// cargo or git-clone target puts on PATH, `dest` the clone directory
/// (leading `~/` expands to the home directory), `pattern` the font-file glob.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dest: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

/// One unit of installation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallTarget {
    pub name: String,
    pub manager: ManagerKind,
    #[serde(flatten)]
    pub metadata: TargetMetadata,
}

impl InstallTarget {
    pub fn new(name: &str, manager: ManagerKind) -> Self {
        Self {
            name: name.to_string(),
            manager,
            metadata: TargetMetadata::default(),
        }
    }

    /// Executable to look for on PATH; defaults to the target name
    pub fn bin_name(&self) -> &str {
        self.metadata.bin.as_deref().unwrap_or(&self.name)
    }
}

/// A logically grouped, optionally user-gated subset of the manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Machine name, used with `--only`
    pub name: String,
    /// Human-readable heading shown during the run
    pub title: String,
    /// Optional sub-manifests are gated by a yes/no confirmation
    #[serde(default)]
    pub optional: bool,
    pub targets: Vec<InstallTarget>,
}

/// The ordered manifests for one platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestSet {
    pub manifests: Vec<Manifest>,
}

impl ManifestSet {
    /// Validate the uniqueness invariant: a target name may appear at most
    /// once per manager across the whole set.
    pub fn validate(&self) -> Result<()> {
        let mut seen: HashSet<(ManagerKind, &str)> = HashSet::new();
        for manifest in &self.manifests {
            for target in &manifest.targets {
                if !seen.insert((target.manager, target.name.as_str())) {
                    return Err(DevupError::DuplicateTarget {
                        name: target.name.clone(),
                        manager: target.manager.label().to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Restrict the set to the named sub-manifests, preserving order
    ///
    /// An empty `only` list keeps everything. Unknown names are an error so a
    /// typo never silently runs nothing.
    pub fn restrict(mut self, only: &[String]) -> Result<Self> {
        if only.is_empty() {
            return Ok(self);
        }
        for name in only {
            if !self.manifests.iter().any(|m| &m.name == name) {
                return Err(DevupError::UnknownSubManifest { name: name.clone() });
            }
        }
        self.manifests.retain(|m| only.contains(&m.name));
        Ok(self)
    }

    pub fn target_count(&self) -> usize {
        self.manifests.iter().map(|m| m.targets.len()).sum()
    }
}
