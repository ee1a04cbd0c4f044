//! Shared subprocess plumbing for manager backends
//!
//! Installs block until the subprocess exits; there is deliberately no
//! timeout, matching the sequential execution model. Output is captured, not
//! inherited, so it never fights the progress bar.

use std::process::{Command, Stdio};

use crate::error::{DevupError, Result};

/// Run a command for a presence query: true only on a zero exit status.
/// Spawn failures (manager binary absent) answer false.
pub fn status_ok(program: &str, args: &[&str]) -> bool {
    Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

/// Run a command for a presence query: true on zero exit status with
/// non-blank stdout. Used for managers that exit 0 even on a miss.
pub fn stdout_nonempty(program: &str, args: &[&str]) -> bool {
    Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .map(|out| out.status.success() && !String::from_utf8_lossy(&out.stdout).trim().is_empty())
        .unwrap_or(false)
}

/// Run an install command, requiring success
///
/// On failure the error carries the rendered command line and the tail of
/// stderr so the per-failure log line is actionable.
pub fn run_checked(program: &str, args: &[&str]) -> Result<()> {
    let rendered = render(program, args);

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| DevupError::CommandFailed {
            command: rendered.clone(),
            reason: e.to_string(),
        })?;

    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    let reason = stderr
        .lines()
        .rev()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("exited with non-zero status")
        .trim()
        .to_string();

    Err(DevupError::CommandFailed {
        command: rendered,
        reason,
    })
}

fn render(program: &str, args: &[&str]) -> String {
    let mut rendered = program.to_string();
    for arg in args {
        rendered.push(' ');
        rendered.push_str(arg);
    }
    rendered
}
