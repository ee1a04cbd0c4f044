//! Run-scoped result accumulation
//!
//! One `InstallResult` is produced per target per run and folded into a
//! `RunSummary`. The summary is an explicit value returned by the
//! orchestrator, never ambient state, so the reporter stays a pure function
//! of one argument.

/// Terminal outcome of attempting one install target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallStatus {
    /// The manager reported success on some attempt
    Installed,
    /// Already present on the host (or its sub-manifest was declined)
    Skipped,
    /// Every attempt exhausted without success
    Failed,
}

/// Outcome of one target, immutable after creation
#[derive(Debug, Clone)]
pub struct InstallResult {
    /// Target name, unique within its manager's manifest
    pub target: String,
    pub status: InstallStatus,
    /// Number of manager invocations made (0 for skips)
    pub attempts: u32,
}

impl InstallResult {
    pub fn skipped(target: &str) -> Self {
        Self {
            target: target.to_string(),
            status: InstallStatus::Skipped,
            attempts: 0,
        }
    }

    pub fn installed(target: &str, attempts: u32) -> Self {
        Self {
            target: target.to_string(),
            status: InstallStatus::Installed,
            attempts,
        }
    }

    pub fn failed(target: &str, attempts: u32) -> Self {
        Self {
            target: target.to_string(),
            status: InstallStatus::Failed,
            attempts,
        }
    }
}

/// A failed target together with the command an operator can run by hand
#[derive(Debug, Clone)]
pub struct FailedTarget {
    pub name: String,
    pub remediation: String,
}

/// Aggregate of all results for one invocation
///
/// Buckets preserve manifest order. Created empty at run start, appended to
/// as each target resolves, rendered once at run end, then discarded.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub installed: Vec<String>,
    pub skipped: Vec<String>,
    pub failed: Vec<FailedTarget>,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one result into the summary
    ///
    /// `remediation` is consulted only for failed results.
    pub fn record(&mut self, result: &InstallResult, remediation: Option<String>) {
        match result.status {
            InstallStatus::Installed => self.installed.push(result.target.clone()),
            InstallStatus::Skipped => self.skipped.push(result.target.clone()),
            InstallStatus::Failed => self.failed.push(FailedTarget {
                name: result.target.clone(),
                remediation: remediation.unwrap_or_default(),
            }),
        }
    }

    pub fn total(&self) -> usize {
        self.installed.len() + self.skipped.len() + self.failed.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_preserves_manifest_order() {
        let mut summary = RunSummary::new();
        summary.record(&InstallResult::installed("git", 1), None);
        summary.record(&InstallResult::installed("curl", 2), None);
        summary.record(&InstallResult::skipped("zsh"), None);

        assert_eq!(summary.installed, vec!["git", "curl"]);
        assert_eq!(summary.skipped, vec!["zsh"]);
        assert_eq!(summary.total(), 3);
    }

    #[test]
    fn test_record_failed_keeps_remediation() {
        let mut summary = RunSummary::new();
        summary.record(
            &InstallResult::failed("ripgrep", 3),
            Some("sudo apt-get install -y ripgrep".to_string()),
        );

        assert!(summary.has_failures());
        assert_eq!(summary.failed[0].name, "ripgrep");
        assert_eq!(summary.failed[0].remediation, "sudo apt-get install -y ripgrep");
    }

    #[test]
    fn test_constructors_set_attempts() {
        assert_eq!(InstallResult::skipped("a").attempts, 0);
        assert_eq!(InstallResult::installed("a", 2).attempts, 2);
        assert_eq!(InstallResult::failed("a", 3).attempts, 3);
    }
}
