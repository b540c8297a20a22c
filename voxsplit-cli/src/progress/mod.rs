//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for multi-item runs
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize a progress bar over `total` items named `unit`
    ///
    /// A single item gets no bar.
    pub fn init(&mut self, total: u64, unit: &str) {
        if self.quiet || total < 2 {
            return;
        }

        let template = format!("[{{elapsed_precise}}] {{bar:40.cyan/blue}} {{pos}}/{{len}} {unit} {{msg}}");
        let style = ProgressStyle::default_bar()
            .template(&template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-");

        let pb = ProgressBar::new(total);
        pb.set_style(style);
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Update progress for a completed item
    pub fn item_completed(&self, name: &str) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Processed: {name}"));
            pb.inc(1);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message("Complete");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_has_no_bar() {
        let mut reporter = ProgressReporter::new(true);
        reporter.init(10, "files");
        assert!(reporter.progress_bar.is_none());
        reporter.item_completed("a.txt");
        reporter.finish();
    }

    #[test]
    fn test_single_item_has_no_bar() {
        let mut reporter = ProgressReporter::new(false);
        reporter.init(1, "files");
        assert!(reporter.progress_bar.is_none());
    }

    #[test]
    fn test_bar_counts_items() {
        let mut reporter = ProgressReporter::new(false);
        reporter.init(3, "segments");
        reporter.item_completed("one.wav");
        reporter.item_completed("two.wav");
        assert_eq!(reporter.progress_bar.as_ref().map(|pb| pb.position()), Some(2));
        reporter.finish();
    }
}
