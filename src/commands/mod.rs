//! Command implementations
//!
//! Each submodule provides a `run` entry point for one CLI command.

pub mod check;
pub mod completions;
pub mod helpers;
pub mod install;
pub mod list;
pub mod version;
