//! Retrying installer: bounded retries over an idempotent install
//!
//! Per target: `NotChecked -> Skipped | (Attempting -> Installed | Failed)`.
//! Presence short-circuits to `Skipped` without invoking the manager; any
//! manager success is `Installed`; exhausting every attempt is `Failed`. All
//! manager errors are converted here, so nothing below this boundary
//! propagates as a fault. Calling again after `Failed` is safe and may
//! succeed once connectivity or permissions are fixed.

use std::time::Duration;

use crate::manager::ManagerBackend;
use crate::manifest::{InstallTarget, ManagerKind};
use crate::summary::InstallResult;

/// Retry bounds for one manager
///
/// The constants are policy, not requirements: the defaults preserve the
/// long-observed values (cask and gallery installs got 2 attempts, everything
/// else 3, with a 2 second pause) but both knobs are CLI-overridable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff: Duration,
}

impl RetryPolicy {
    pub const DEFAULT_BACKOFF: Duration = Duration::from_secs(2);

    pub fn for_manager(kind: ManagerKind) -> Self {
        let max_attempts = match kind {
            ManagerKind::BrewCask | ManagerKind::GalleryModule => 2,
            _ => 3,
        };
        Self {
            max_attempts,
            backoff: Self::DEFAULT_BACKOFF,
        }
    }
}

/// CLI overrides applied on top of the per-manager defaults
#[derive(Debug, Clone, Copy, Default)]
pub struct PolicyOverrides {
    pub max_attempts: Option<u32>,
    pub backoff: Option<Duration>,
}

impl PolicyOverrides {
    pub fn resolve(&self, kind: ManagerKind) -> RetryPolicy {
        let defaults = RetryPolicy::for_manager(kind);
        RetryPolicy {
            max_attempts: self.max_attempts.unwrap_or(defaults.max_attempts).max(1),
            backoff: self.backoff.unwrap_or(defaults.backoff),
        }
    }
}

/// Outcome of driving one target through the state machine
#[derive(Debug)]
pub struct TargetOutcome {
    pub result: InstallResult,
    /// Rendered reason of the last failed attempt, for the per-failure log line
    pub failure: Option<String>,
}

pub struct RetryingInstaller {
    overrides: PolicyOverrides,
    sleeper: Box<dyn Fn(Duration)>,
}

impl RetryingInstaller {
    pub fn new(overrides: PolicyOverrides) -> Self {
        Self::with_sleeper(overrides, Box::new(std::thread::sleep))
    }

    /// Inject the backoff sleep, so tests run without waiting
    pub fn with_sleeper(overrides: PolicyOverrides, sleeper: Box<dyn Fn(Duration)>) -> Self {
        Self { overrides, sleeper }
    }

    pub fn run(&self, backend: &dyn ManagerBackend, target: &InstallTarget) -> TargetOutcome {
        if backend.check_present(target) {
            return TargetOutcome {
                result: InstallResult::skipped(&target.name),
                failure: None,
            };
        }

        let policy = self.overrides.resolve(target.manager);
        let mut last_failure = None;

        for attempt in 1..=policy.max_attempts {
            match backend.install(target) {
                Ok(()) => {
                    return TargetOutcome {
                        result: InstallResult::installed(&target.name, attempt),
                        failure: None,
                    };
                }
                Err(e) => {
                    last_failure = Some(e.to_string());
                    if attempt < policy.max_attempts {
                        (self.sleeper)(policy.backoff);
                    }
                }
            }
        }

        TargetOutcome {
            result: InstallResult::failed(&target.name, policy.max_attempts),
            failure: last_failure,
        }
    }
}
