//! Host platform model and per-platform profile selection

pub mod detection;

use std::fmt;

use crate::error::{DevupError, Result};
use crate::manifest::{ManagerKind, ManifestSet, builtin::builtin_set};

pub use detection::detect;

/// The host variants devup knows how to bootstrap
///
/// `LinuxCompat` is Linux running under a Windows compatibility layer (WSL);
/// it uses the Linux manifests but matters for font registration, which the
/// Windows host side handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    WindowsNative,
    LinuxNative,
    LinuxCompat,
    MacOs,
    Unknown,
}

impl Platform {
    pub fn is_supported(&self) -> bool {
        !matches!(self, Platform::Unknown)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::WindowsNative => "Windows",
            Platform::LinuxNative => "Linux",
            Platform::LinuxCompat => "Linux (WSL)",
            Platform::MacOs => "macOS",
            Platform::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Everything the orchestrator needs to know about the host, selected once
///
/// Parameterizing the orchestrator over this profile is what keeps the
/// Linux/macOS/Windows code paths from duplicating the same control shape.
#[derive(Debug, Clone)]
pub struct PlatformProfile {
    pub platform: Platform,
    /// The baseline package manager the bootstrap step must guarantee
    pub package_manager: ManagerKind,
    pub manifests: ManifestSet,
}

/// Build the profile for a platform, using `manifests` when a custom set was
/// loaded and the built-in set otherwise
pub fn profile_for(platform: Platform, manifests: Option<ManifestSet>) -> Result<PlatformProfile> {
    let package_manager = match platform {
        Platform::LinuxNative | Platform::LinuxCompat => ManagerKind::Apt,
        Platform::MacOs => ManagerKind::Brew,
        Platform::WindowsNative => ManagerKind::GalleryModule,
        Platform::Unknown => {
            return Err(DevupError::UnsupportedPlatform {
                os: std::env::consts::OS.to_string(),
            });
        }
    };

    let manifests = match manifests {
        Some(set) => set,
        None => builtin_set(platform),
    };

    Ok(PlatformProfile {
        platform,
        package_manager,
        manifests,
    })
}
