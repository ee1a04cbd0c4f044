//! Install command implementation

use std::time::Duration;

use console::Style;

use crate::cli::InstallArgs;
use crate::error::{DevupError, Result};
use crate::installer::PolicyOverrides;
use crate::manager::HostBackends;
use crate::orchestrator::{Orchestrator, RunOptions, TerminalConfirmer};
use crate::platform;
use crate::report;
use crate::summary::RunSummary;

use super::helpers::{manifest_arg, resolve_profile};

/// Run the install command
pub fn run(verbose: bool, args: InstallArgs) -> Result<()> {
    let platform = platform::detect();
    let profile = resolve_profile(platform, manifest_arg(&args.manifest), &args.only)?;

    println!(
        "{} {} ({} targets)",
        Style::new().bold().apply_to("Bootstrapping"),
        profile.platform,
        profile.manifests.target_count()
    );
    if verbose {
        println!("Baseline package manager: {}", profile.package_manager);
    }

    let options = RunOptions {
        assume_yes: args.yes,
        skip_optional: args.skip_optional,
        overrides: PolicyOverrides {
            max_attempts: args.retries,
            backoff: args.backoff_secs.map(Duration::from_secs),
        },
        write_profile: !args.no_profile,
        ..RunOptions::default()
    };

    let backends = HostBackends::new(profile.platform);
    let orchestrator = Orchestrator::new(&profile, &backends, options);

    match orchestrator.run(&mut TerminalConfirmer) {
        Ok(summary) => {
            print!("{}", report::render(&summary));
            // Per-target failures are reported, not fatal
            Ok(())
        }
        Err(e @ DevupError::BootstrapFailed { .. }) => {
            // The walk never started; show the (empty) summary before aborting
            print!("{}", report::render(&RunSummary::new()));
            Err(e)
        }
        Err(e) => Err(e),
    }
}
