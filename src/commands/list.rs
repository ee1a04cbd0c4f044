//! List command implementation

use console::Style;

use crate::cli::ListArgs;
use crate::error::Result;
use crate::platform;

use super::helpers::{manifest_arg, resolve_profile};

/// Run the list command
pub fn run(verbose: bool, args: ListArgs) -> Result<()> {
    let platform = platform::detect();
    let profile = resolve_profile(platform, manifest_arg(&args.manifest), &[])?;

    println!(
        "{} manifest for {}",
        Style::new().bold().apply_to("devup"),
        profile.platform
    );

    for manifest in &profile.manifests.manifests {
        let marker = if manifest.optional { " (optional)" } else { "" };
        println!(
            "\n  {} [{}]{}",
            Style::new().bold().yellow().apply_to(&manifest.title),
            manifest.name,
            Style::new().dim().apply_to(marker)
        );
        for target in &manifest.targets {
            let description = target
                .metadata
                .description
                .as_deref()
                .unwrap_or("");
            println!(
                "    {:<28} {:<14} {}",
                target.name,
                Style::new().cyan().apply_to(target.manager.label()),
                Style::new().dim().apply_to(description)
            );
            if verbose {
                if let Some(url) = target.metadata.url.as_deref() {
                    let dest = target.metadata.dest.as_deref().unwrap_or("");
                    println!(
                        "      {}",
                        Style::new().dim().apply_to(format!("{url} {dest}").trim_end())
                    );
                }
            }
        }
    }

    Ok(())
}
