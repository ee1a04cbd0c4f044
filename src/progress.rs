//! Progress bar display for manifest runs

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display across the manifest walk
pub struct ProgressDisplay {
    target_pb: ProgressBar,
}

impl ProgressDisplay {
    /// Create a new progress display with total target count
    pub fn new(total_targets: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let target_pb = ProgressBar::new(total_targets);
        target_pb.set_style(style);

        Self { target_pb }
    }

    /// Update to show current target being processed
    pub fn update_target(&self, target_name: &str, current: usize, total: usize) {
        let msg = format!("({}/{}) {}", current, total, target_name);
        self.target_pb.set_message(msg);
    }

    /// Increment target progress
    pub fn inc_target(&self) {
        self.target_pb.inc(1);
    }

    /// Print a line above the bar without tearing it
    ///
    /// A hidden bar (stdout is not a terminal) swallows `println`, so plain
    /// printing takes over there.
    pub fn log(&self, line: &str) {
        if self.target_pb.is_hidden() {
            println!("{line}");
        } else {
            self.target_pb.println(line);
        }
    }

    /// Finish the bar at run end
    pub fn finish(&self) {
        self.target_pb.finish_and_clear();
    }

    /// Abandon on fatal error
    pub fn abandon(&self) {
        self.target_pb.abandon();
    }
}
