//! Error types and handling for devup
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Only a handful of conditions abort a run: an unsupported host platform, a
//! failed package-manager bootstrap, and manifest load/validation problems.
//! Per-target install failures are converted to `Failed` results at the
//! retrying-installer boundary and never surface here.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for devup operations
#[derive(Error, Diagnostic, Debug)]
pub enum DevupError {
    // Platform errors
    #[error("Unsupported platform: {os}")]
    #[diagnostic(
        code(devup::platform::unsupported),
        help("devup supports Linux, WSL, macOS and Windows hosts")
    )]
    UnsupportedPlatform { os: String },

    // Bootstrap errors
    #[error("Failed to bootstrap {manager}: {reason}")]
    #[diagnostic(
        code(devup::bootstrap::failed),
        help("The baseline package manager must be working before any target can be installed")
    )]
    BootstrapFailed { manager: String, reason: String },

    // Manifest errors
    #[error("Manifest file not found: {path}")]
    #[diagnostic(code(devup::manifest::not_found))]
    ManifestNotFound { path: String },

    #[error("Failed to parse manifest '{path}': {reason}")]
    #[diagnostic(
        code(devup::manifest::parse_failed),
        help("Manifest files are YAML with a top-level 'manifests' list")
    )]
    ManifestParseFailed { path: String, reason: String },

    #[error("Duplicate target '{name}' for manager {manager}")]
    #[diagnostic(
        code(devup::manifest::duplicate_target),
        help("Target names must be unique within a manager's manifest set")
    )]
    DuplicateTarget { name: String, manager: String },

    #[error("Unknown sub-manifest: {name}")]
    #[diagnostic(
        code(devup::manifest::unknown_sub_manifest),
        help("Run 'devup list' to see the sub-manifest names for this platform")
    )]
    UnknownSubManifest { name: String },

    // External command errors
    #[error("Command failed: {command}: {reason}")]
    #[diagnostic(code(devup::command::failed))]
    CommandFailed { command: String, reason: String },

    // Git errors
    #[error("Failed to clone repository: {url}: {reason}")]
    #[diagnostic(
        code(devup::git::clone_failed),
        help("Check that URL is correct and the host is reachable")
    )]
    GitCloneFailed { url: String, reason: String },

    // Profile errors
    #[error("Home directory could not be determined")]
    #[diagnostic(code(devup::profile::no_home))]
    HomeDirNotFound,

    #[error("Failed to write profile '{path}': {reason}")]
    #[diagnostic(code(devup::profile::write_failed))]
    ProfileWriteFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to read file '{path}': {reason}")]
    #[diagnostic(code(devup::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file '{path}': {reason}")]
    #[diagnostic(code(devup::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(devup::io::error))]
    IoError { message: String },
}

/// Result type alias for devup operations
pub type Result<T> = std::result::Result<T, DevupError>;
