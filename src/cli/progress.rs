//! Progress output for the download walk
//!
//! Non-verbose runs get a single spinner line that tracks the file being
//! written; verbose runs print one line per event instead. Either way the
//! walker only sees the `WalkObserver` trait.

use indicatif::{ProgressBar, ProgressStyle};

use crate::app::WalkObserver;

/// Terminal renderer for traversal events
pub struct ProgressReporter {
    spinner: Option<ProgressBar>,
    verbose: bool,
}

impl ProgressReporter {
    /// Creates a reporter; verbose mode prints lines, otherwise a spinner
    pub fn new(verbose: bool) -> Self {
        let spinner = if verbose {
            None
        } else {
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg}")
                    .expect("spinner template is valid"),
            );
            spinner.enable_steady_tick(std::time::Duration::from_millis(120));
            Some(spinner)
        };
        Self { spinner, verbose }
    }

    /// Clear the spinner once the walk is done
    pub fn finish(&self) {
        if let Some(spinner) = &self.spinner {
            spinner.finish_and_clear();
        }
    }
}

impl WalkObserver for ProgressReporter {
    fn on_directory(&self, remote_path: &str) {
        if self.verbose {
            println!("Entering directory: {}", remote_path);
        } else if let Some(spinner) = &self.spinner {
            spinner.set_message(format!("Listing {}", remote_path));
        }
    }

    fn on_file(&self, remote_path: &str) {
        if self.verbose {
            println!("Writing file: {}", remote_path);
        } else if let Some(spinner) = &self.spinner {
            spinner.set_message(format!("Downloading {}", remote_path));
        }
    }

    fn on_skip(&self, remote_path: &str) {
        if self.verbose {
            println!("Omitting: {}", remote_path);
        }
    }

    fn on_failure(&self, remote_path: &str, error: &str) {
        if let Some(spinner) = &self.spinner {
            spinner.println(format!("Failed: {} ({})", remote_path, error));
        } else {
            eprintln!("Failed: {} ({})", remote_path, error);
        }
    }
}
