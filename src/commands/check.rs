//! Check command implementation: presence checks only, zero installs

use console::Style;

use crate::cli::CheckArgs;
use crate::error::Result;
use crate::manager::{BackendRegistry, HostBackends};
use crate::platform;

use super::helpers::{manifest_arg, resolve_profile};

/// Run the check command
pub fn run(verbose: bool, args: CheckArgs) -> Result<()> {
    let platform = platform::detect();
    let profile = resolve_profile(platform, manifest_arg(&args.manifest), &args.only)?;
    let backends = HostBackends::new(profile.platform);

    let mut present = Vec::new();
    let mut missing = Vec::new();

    for manifest in &profile.manifests.manifests {
        for target in &manifest.targets {
            let backend = backends.backend(target.manager);
            if backend.check_present(target) {
                present.push((target.name.clone(), target.manager));
            } else {
                missing.push((target.name.clone(), backend.remediation(target)));
            }
        }
    }

    println!(
        "  {} ({})",
        Style::new().green().bold().apply_to("Present"),
        present.len()
    );
    for (name, manager) in &present {
        if verbose {
            println!(
                "    {name}  {}",
                Style::new().dim().apply_to(format!("[{}]", manager.label()))
            );
        } else {
            println!("    {name}");
        }
    }

    println!(
        "  {} ({})",
        Style::new().yellow().bold().apply_to("Missing"),
        missing.len()
    );
    for (name, remediation) in &missing {
        println!("    {name}  {}", Style::new().dim().apply_to(remediation));
    }

    Ok(())
}
