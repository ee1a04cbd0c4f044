//! Loading custom manifest sets from YAML files

use std::path::Path;

use crate::error::{DevupError, Result};
use crate::manifest::ManifestSet;

/// Load and validate a manifest set from a YAML file
///
/// The file replaces the built-in set entirely; it is not merged.
pub fn load_manifest_set(path: &Path) -> Result<ManifestSet> {
    if !path.exists() {
        return Err(DevupError::ManifestNotFound {
            path: path.display().to_string(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| DevupError::FileReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let set: ManifestSet =
        serde_yaml::from_str(&content).map_err(|e| DevupError::ManifestParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    set.validate()?;
    Ok(set)
}
