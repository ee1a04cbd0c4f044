//! Run summary rendering
//!
//! A pure function from `RunSummary` to text: three labeled groups with
//! counts and member names, plus one remediation command per failed target.

use console::Style;

use crate::summary::RunSummary;

/// Render the end-of-run summary
pub fn render(summary: &RunSummary) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "\n{} ({} targets)\n",
        Style::new().bold().apply_to("Run summary"),
        summary.total()
    ));

    render_group(
        &mut out,
        &Style::new().green().bold(),
        "Installed",
        summary.installed.iter().map(String::as_str),
        summary.installed.len(),
    );
    render_group(
        &mut out,
        &Style::new().yellow().bold(),
        "Skipped",
        summary.skipped.iter().map(String::as_str),
        summary.skipped.len(),
    );
    render_group(
        &mut out,
        &Style::new().red().bold(),
        "Failed",
        summary.failed.iter().map(|f| f.name.as_str()),
        summary.failed.len(),
    );

    if summary.has_failures() {
        out.push_str(&format!(
            "\n{}\n",
            Style::new().bold().apply_to("To retry by hand:")
        ));
        for failed in &summary.failed {
            out.push_str(&format!(
                "  {}\n",
                Style::new().dim().apply_to(&failed.remediation)
            ));
        }
    }

    out
}

fn render_group<'a>(
    out: &mut String,
    style: &Style,
    label: &str,
    names: impl Iterator<Item = &'a str>,
    count: usize,
) {
    out.push_str(&format!("  {} ({})\n", style.apply_to(label), count));
    for name in names {
        out.push_str(&format!("    {name}\n"));
    }
}
