//! Orchestrator: drives the manifest walk for one platform profile
//!
//! Sub-manifests run in their declared dependency order; within each, targets
//! run in manifest order. A failed target never blocks later targets.
//! Execution is single-threaded and blocking throughout: several managers are
//! not safe for concurrent mutation, and sequential output stays readable.

pub mod bootstrap;
pub mod confirm;

use console::Style;

use crate::error::Result;
use crate::installer::{PolicyOverrides, RetryingInstaller, TargetOutcome};
use crate::manager::BackendRegistry;
use crate::manifest::{InstallTarget, Manifest, ManagerKind};
use crate::platform::PlatformProfile;
use crate::profile;
use crate::progress::ProgressDisplay;
use crate::summary::{InstallStatus, RunSummary};

pub use confirm::{Confirmer, TerminalConfirmer};

/// Knobs for one orchestration run
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    /// Accept every optional sub-manifest without prompting
    pub assume_yes: bool,
    /// Decline every optional sub-manifest without prompting
    pub skip_optional: bool,
    pub overrides: PolicyOverrides,
    /// Run the baseline package-manager bootstrap before the walk
    pub bootstrap: bool,
    /// Write the shell profile after the walk
    pub write_profile: bool,
    pub show_progress: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            assume_yes: false,
            skip_optional: false,
            overrides: PolicyOverrides::default(),
            bootstrap: true,
            write_profile: true,
            show_progress: true,
        }
    }
}

pub struct Orchestrator<'a> {
    profile: &'a PlatformProfile,
    registry: &'a dyn BackendRegistry,
    installer: RetryingInstaller,
    options: RunOptions,
}

impl<'a> Orchestrator<'a> {
    pub fn new(
        profile: &'a PlatformProfile,
        registry: &'a dyn BackendRegistry,
        options: RunOptions,
    ) -> Self {
        Self {
            profile,
            registry,
            installer: RetryingInstaller::new(options.overrides),
            options,
        }
    }

    #[cfg(test)]
    fn with_installer(
        profile: &'a PlatformProfile,
        registry: &'a dyn BackendRegistry,
        options: RunOptions,
        installer: RetryingInstaller,
    ) -> Self {
        Self {
            profile,
            registry,
            installer,
            options,
        }
    }

    /// Execute the run and return its summary
    ///
    /// The summary is returned even when targets failed; the only errors are
    /// the fatal conditions (bootstrap failure, confirmation I/O).
    pub fn run(&self, confirmer: &mut dyn Confirmer) -> Result<RunSummary> {
        let mut summary = RunSummary::new();

        if self.options.bootstrap {
            bootstrap::ensure_package_manager(self.profile)?;
        }

        let total = self.profile.manifests.target_count();
        let progress = self
            .options
            .show_progress
            .then(|| ProgressDisplay::new(total as u64));
        let mut processed = 0usize;

        for manifest in &self.profile.manifests.manifests {
            self.log(
                progress.as_ref(),
                &format!("{}", Style::new().bold().apply_to(&manifest.title)),
            );

            let accepted = match self.accept_manifest(manifest, confirmer) {
                Ok(accepted) => accepted,
                Err(e) => {
                    if let Some(pb) = progress.as_ref() {
                        pb.abandon();
                    }
                    return Err(e);
                }
            };
            if !accepted {
                self.decline_manifest(manifest, &mut summary, progress.as_ref(), &mut processed);
                continue;
            }

            for target in &manifest.targets {
                processed += 1;
                if let Some(pb) = progress.as_ref() {
                    pb.update_target(&target.name, processed, total);
                }

                let backend = self.registry.backend(target.manager);
                let outcome = self.installer.run(backend, target);
                self.log_outcome(progress.as_ref(), target, &outcome);

                if outcome.result.status == InstallStatus::Installed {
                    expose_installed_tool(target);
                }

                let remediation = (outcome.result.status == InstallStatus::Failed)
                    .then(|| backend.remediation(target));
                summary.record(&outcome.result, remediation);

                if let Some(pb) = progress.as_ref() {
                    pb.inc_target();
                }
            }
        }

        if let Some(pb) = progress.as_ref() {
            pb.finish();
        }

        if self.options.write_profile {
            self.write_profile();
        }

        Ok(summary)
    }

    fn accept_manifest(
        &self,
        manifest: &Manifest,
        confirmer: &mut dyn Confirmer,
    ) -> Result<bool> {
        if !manifest.optional {
            return Ok(true);
        }
        if self.options.skip_optional {
            return Ok(false);
        }
        if self.options.assume_yes {
            return Ok(true);
        }
        confirmer.confirm(&manifest.title)
    }

    /// Declining records every target as skipped with zero attempts and zero
    /// manager invocations; presence is not even checked.
    fn decline_manifest(
        &self,
        manifest: &Manifest,
        summary: &mut RunSummary,
        progress: Option<&ProgressDisplay>,
        processed: &mut usize,
    ) {
        self.log(
            progress,
            &format!(
                "  {} {}",
                Style::new().yellow().apply_to("-"),
                Style::new().dim().apply_to("declined, skipping")
            ),
        );
        for target in &manifest.targets {
            *processed += 1;
            summary.record(&crate::summary::InstallResult::skipped(&target.name), None);
            if let Some(pb) = progress {
                pb.inc_target();
            }
        }
    }

    fn write_profile(&self) {
        match profile::write_profile(self.profile.platform, &self.profile.manifests) {
            Ok(outcome) => {
                if outcome.unchanged {
                    return;
                }
                let shown = dunce::simplified(&outcome.path).display().to_string();
                match outcome.backup {
                    Some(backup) => println!(
                        "Wrote {} (previous saved as {})",
                        shown,
                        dunce::simplified(&backup).display()
                    ),
                    None => println!("Wrote {shown}"),
                }
            }
            // Reported, not fatal: the installs above already happened and
            // the run's exit-code contract stays 0
            Err(e) => eprintln!("Warning: {e}"),
        }
    }

    fn log(&self, progress: Option<&ProgressDisplay>, line: &str) {
        match progress {
            Some(pb) => pb.log(line),
            None => println!("{line}"),
        }
    }

    fn log_outcome(
        &self,
        progress: Option<&ProgressDisplay>,
        target: &InstallTarget,
        outcome: &TargetOutcome,
    ) {
        let line = match outcome.result.status {
            InstallStatus::Installed => format!(
                "  {} {}",
                Style::new().green().apply_to("+"),
                target.name
            ),
            InstallStatus::Skipped => format!(
                "  {} {} {}",
                Style::new().yellow().apply_to("-"),
                target.name,
                Style::new().dim().apply_to("(already present)")
            ),
            InstallStatus::Failed => format!(
                "  {} {} {}",
                Style::new().red().apply_to("x"),
                target.name,
                Style::new()
                    .dim()
                    .apply_to(outcome.failure.as_deref().unwrap_or("install failed"))
            ),
        };
        self.log(progress, &line);
    }
}

/// Make a freshly cloned tool visible to later targets in the same run
fn expose_installed_tool(target: &InstallTarget) {
    if target.manager != ManagerKind::GitClone {
        return;
    }
    let Some(dest) = target.metadata.dest.as_deref() else {
        return;
    };
    let Ok(dest) = crate::manager::git_clone::expand_dest(dest) else {
        return;
    };
    let bin = dest.join("bin");
    if bin.is_dir() {
        bootstrap::prepend_search_path(&bin);
    } else {
        bootstrap::prepend_search_path(&dest);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DevupError, Result};
    use crate::installer::RetryingInstaller;
    use crate::manager::ManagerBackend;
    use crate::manifest::{InstallTarget, Manifest, ManifestSet};
    use crate::platform::Platform;
    use std::cell::{Cell, RefCell};
    use std::collections::HashSet;
    use std::rc::Rc;

    /// Shared fake host state: the set of present target names
    type HostState = Rc<RefCell<HashSet<String>>>;

    /// One fake backend serves every manager kind; installs mutate the host
    /// state so a second run observes the first run's side effects.
    struct FakeBackend {
        state: HostState,
        /// Targets whose installs always fail
        broken: HashSet<String>,
        invocations: Cell<u32>,
    }

    impl ManagerBackend for FakeBackend {
        fn kind(&self) -> ManagerKind {
            ManagerKind::Apt
        }

        fn check_present(&self, target: &InstallTarget) -> bool {
            self.state.borrow().contains(&target.name)
        }

        fn install(&self, target: &InstallTarget) -> Result<()> {
            self.invocations.set(self.invocations.get() + 1);
            if self.broken.contains(&target.name) {
                return Err(DevupError::CommandFailed {
                    command: format!("install {}", target.name),
                    reason: "broken".to_string(),
                });
            }
            self.state.borrow_mut().insert(target.name.clone());
            Ok(())
        }

        fn remediation(&self, target: &InstallTarget) -> String {
            format!("manually install {}", target.name)
        }
    }

    struct FakeRegistry {
        backend: FakeBackend,
    }

    impl BackendRegistry for FakeRegistry {
        fn backend(&self, _kind: ManagerKind) -> &dyn ManagerBackend {
            &self.backend
        }
    }

    struct ScriptedConfirmer {
        answers: Vec<bool>,
        prompts: Vec<String>,
    }

    impl Confirmer for ScriptedConfirmer {
        fn confirm(&mut self, title: &str) -> Result<bool> {
            self.prompts.push(title.to_string());
            Ok(if self.answers.is_empty() {
                false
            } else {
                self.answers.remove(0)
            })
        }
    }

    fn registry(present: &[&str], broken: &[&str]) -> (FakeRegistry, HostState) {
        let state: HostState = Rc::new(RefCell::new(
            present.iter().map(|s| s.to_string()).collect(),
        ));
        let registry = FakeRegistry {
            backend: FakeBackend {
                state: Rc::clone(&state),
                broken: broken.iter().map(|s| s.to_string()).collect(),
                invocations: Cell::new(0),
            },
        };
        (registry, state)
    }

    fn test_profile(manifests: Vec<Manifest>) -> PlatformProfile {
        PlatformProfile {
            platform: Platform::LinuxNative,
            package_manager: ManagerKind::Apt,
            manifests: ManifestSet { manifests },
        }
    }

    fn manifest(name: &str, optional: bool, targets: &[&str]) -> Manifest {
        Manifest {
            name: name.to_string(),
            title: name.to_string(),
            optional,
            targets: targets
                .iter()
                .map(|t| InstallTarget::new(t, ManagerKind::Apt))
                .collect(),
        }
    }

    fn quiet_options() -> RunOptions {
        RunOptions {
            bootstrap: false,
            write_profile: false,
            show_progress: false,
            ..RunOptions::default()
        }
    }

    fn orchestrator<'a>(
        profile: &'a PlatformProfile,
        registry: &'a FakeRegistry,
        options: RunOptions,
    ) -> Orchestrator<'a> {
        // No real sleeping between retry attempts
        let installer =
            RetryingInstaller::with_sleeper(options.overrides, Box::new(|_| {}));
        Orchestrator::with_installer(profile, registry, options, installer)
    }

    #[test]
    fn test_failed_target_never_blocks_later_targets() {
        let profile = test_profile(vec![manifest("core", false, &["a", "broken", "b"])]);
        let (registry, _) = registry(&[], &["broken"]);
        let mut confirmer = ScriptedConfirmer {
            answers: vec![],
            prompts: vec![],
        };

        let summary = orchestrator(&profile, &registry, quiet_options())
            .run(&mut confirmer)
            .unwrap();

        assert_eq!(summary.installed, vec!["a", "b"]);
        assert_eq!(summary.failed.len(), 1);
        assert_eq!(summary.failed[0].name, "broken");
        assert_eq!(summary.failed[0].remediation, "manually install broken");
    }

    #[test]
    fn test_declined_optional_manifest_all_skipped_zero_invocations() {
        let profile = test_profile(vec![
            manifest("core", false, &["a"]),
            manifest("extras", true, &["x", "y"]),
        ]);
        let (registry, _) = registry(&["a"], &[]);
        let mut confirmer = ScriptedConfirmer {
            answers: vec![false],
            prompts: vec![],
        };

        let summary = orchestrator(&profile, &registry, quiet_options())
            .run(&mut confirmer)
            .unwrap();

        assert_eq!(summary.skipped, vec!["a", "x", "y"]);
        assert_eq!(confirmer.prompts, vec!["extras"]);
        // "a" was present, "x"/"y" declined: the manager was never invoked
        assert_eq!(registry.backend.invocations.get(), 0);
    }

    #[test]
    fn test_accepted_optional_manifest_installs() {
        let profile = test_profile(vec![manifest("extras", true, &["x"])]);
        let (registry, _) = registry(&[], &[]);
        let mut confirmer = ScriptedConfirmer {
            answers: vec![true],
            prompts: vec![],
        };

        let summary = orchestrator(&profile, &registry, quiet_options())
            .run(&mut confirmer)
            .unwrap();

        assert_eq!(summary.installed, vec!["x"]);
    }

    #[test]
    fn test_assume_yes_skips_prompt() {
        let profile = test_profile(vec![manifest("extras", true, &["x"])]);
        let (registry, _) = registry(&[], &[]);
        let mut confirmer = ScriptedConfirmer {
            answers: vec![],
            prompts: vec![],
        };
        let options = RunOptions {
            assume_yes: true,
            ..quiet_options()
        };

        let summary = orchestrator(&profile, &registry, options)
            .run(&mut confirmer)
            .unwrap();

        assert!(confirmer.prompts.is_empty());
        assert_eq!(summary.installed, vec!["x"]);
    }

    #[test]
    fn test_skip_optional_declines_without_prompt() {
        let profile = test_profile(vec![manifest("extras", true, &["x"])]);
        let (registry, _) = registry(&[], &[]);
        let mut confirmer = ScriptedConfirmer {
            answers: vec![],
            prompts: vec![],
        };
        let options = RunOptions {
            skip_optional: true,
            ..quiet_options()
        };

        let summary = orchestrator(&profile, &registry, options)
            .run(&mut confirmer)
            .unwrap();

        assert!(confirmer.prompts.is_empty());
        assert_eq!(summary.skipped, vec!["x"]);
    }

    #[test]
    fn test_second_run_is_idempotent() {
        let profile = test_profile(vec![
            manifest("core", false, &["a", "b"]),
            manifest("extras", true, &["x"]),
        ]);
        let (registry, state) = registry(&[], &[]);

        let mut confirmer = ScriptedConfirmer {
            answers: vec![true, true],
            prompts: vec![],
        };
        let first = orchestrator(&profile, &registry, quiet_options())
            .run(&mut confirmer)
            .unwrap();
        assert_eq!(first.installed, vec!["a", "b", "x"]);
        assert_eq!(state.borrow().len(), 3);

        let second = orchestrator(&profile, &registry, quiet_options())
            .run(&mut confirmer)
            .unwrap();
        assert!(second.installed.is_empty());
        assert_eq!(second.skipped, vec!["a", "b", "x"]);
        assert!(second.failed.is_empty());
    }

    #[test]
    fn test_summary_preserves_manifest_order_across_manifests() {
        let profile = test_profile(vec![
            manifest("one", false, &["b"]),
            manifest("two", false, &["a"]),
        ]);
        let (registry, _) = registry(&[], &[]);
        let mut confirmer = ScriptedConfirmer {
            answers: vec![],
            prompts: vec![],
        };

        let summary = orchestrator(&profile, &registry, quiet_options())
            .run(&mut confirmer)
            .unwrap();

        // Manifest order, not alphabetical
        assert_eq!(summary.installed, vec!["b", "a"]);
    }
}
