//! Version command implementation

use crate::error::Result;
use crate::platform;

/// Run version command
pub fn run() -> Result<()> {
    println!("devup {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Host platform: {}", platform::detect());
    println!("  Minimum Rust: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!(
        "  Profile: {}",
        if cfg!(debug_assertions) {
            "debug"
        } else {
            "release"
        }
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_runs() {
        assert!(run().is_ok());
    }
}
