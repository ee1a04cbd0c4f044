//! Manager backends: one narrow adapter per external installer
//!
//! The retry and reporting logic never parses manager-specific output; each
//! backend exposes exactly a side-effect-free presence check, an install that
//! follows the manager's own exit-status contract, and the remediation
//! command an operator can run by hand.

pub mod apt;
pub mod brew;
pub mod cargo;
pub mod command;
pub mod font;
pub mod gallery;
pub mod git_clone;

use crate::error::Result;
use crate::manifest::{InstallTarget, ManagerKind};
use crate::platform::Platform;

pub use apt::AptManager;
pub use brew::{BrewCaskManager, BrewManager};
pub use cargo::CargoManager;
pub use font::FontManager;
pub use gallery::GalleryManager;
pub use git_clone::GitCloneManager;

/// Capability interface for one external installer
pub trait ManagerBackend {
    fn kind(&self) -> ManagerKind;

    /// Does the host already satisfy this target?
    ///
    /// Must not have side effects. A failing query, including the manager
    /// binary itself being absent, answers `false`, never an error; the
    /// installer then attempts the install instead.
    fn check_present(&self, target: &InstallTarget) -> bool;

    /// One install attempt, success judged by the manager's exit status
    fn install(&self, target: &InstallTarget) -> Result<()>;

    /// The command line an operator can run to install this target manually
    fn remediation(&self, target: &InstallTarget) -> String;
}

/// Lookup from a target's manager kind to its backend
pub trait BackendRegistry {
    fn backend(&self, kind: ManagerKind) -> &dyn ManagerBackend;
}

/// The real backends for the current host
pub struct HostBackends {
    apt: AptManager,
    brew: BrewManager,
    cask: BrewCaskManager,
    cargo: CargoManager,
    gallery: GalleryManager,
    font: FontManager,
    git: GitCloneManager,
}

impl HostBackends {
    pub fn new(platform: Platform) -> Self {
        Self {
            apt: AptManager,
            brew: BrewManager,
            cask: BrewCaskManager,
            cargo: CargoManager,
            gallery: GalleryManager,
            font: FontManager::new(platform),
            git: GitCloneManager,
        }
    }
}

impl BackendRegistry for HostBackends {
    fn backend(&self, kind: ManagerKind) -> &dyn ManagerBackend {
        match kind {
            ManagerKind::Apt => &self.apt,
            ManagerKind::Brew => &self.brew,
            ManagerKind::BrewCask => &self.cask,
            ManagerKind::Cargo => &self.cargo,
            ManagerKind::GalleryModule => &self.gallery,
            ManagerKind::Font => &self.font,
            ManagerKind::GitClone => &self.git,
        }
    }
}
