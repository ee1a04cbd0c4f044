//! Shared helpers for command implementations

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::manifest::loader::load_manifest_set;
use crate::platform::{self, Platform, PlatformProfile};

/// Build the platform profile, honoring a custom manifest file and a
/// `--only` restriction
pub fn resolve_profile(
    platform: Platform,
    manifest_file: Option<&Path>,
    only: &[String],
) -> Result<PlatformProfile> {
    let custom = match manifest_file {
        Some(path) => Some(load_manifest_set(path)?),
        None => None,
    };

    let mut profile = platform::profile_for(platform, custom)?;
    profile.manifests = profile.manifests.restrict(only)?;
    Ok(profile)
}

/// Manifest file path from an optional CLI argument
pub fn manifest_arg(path: &Option<PathBuf>) -> Option<&Path> {
    path.as_deref()
}
