//! Yes/no gating for optional sub-manifests

use inquire::{Confirm, InquireError};

use crate::error::{DevupError, Result};

/// Seam for the optional-manifest confirmation step
///
/// The terminal implementation prompts; tests script their answers.
pub trait Confirmer {
    fn confirm(&mut self, title: &str) -> Result<bool>;
}

/// Interactive prompt; accepts y/yes/n/no case-insensitively and re-prompts
/// on anything else. Without a terminal the optional manifest is declined
/// rather than hanging the run.
pub struct TerminalConfirmer;

impl Confirmer for TerminalConfirmer {
    fn confirm(&mut self, title: &str) -> Result<bool> {
        match Confirm::new(&format!("Install {title}?"))
            .with_default(false)
            .with_help_message("y/yes to install, n/no to skip")
            .prompt()
        {
            Ok(answer) => Ok(answer),
            Err(InquireError::NotTTY) => Ok(false),
            Err(InquireError::OperationCanceled) => Ok(false),
            Err(e) => Err(DevupError::IoError {
                message: format!("Failed to read confirmation: {e}"),
            }),
        }
    }
}
