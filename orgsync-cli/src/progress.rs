//! Terminal progress for the grant loop.

use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use orgsync_core::{GrantOutcome, ProgressEvent, ProgressSink, SyncResult};

/// [`ProgressSink`] backed by an indicatif bar on stderr.
///
/// Per-member lines go to stdout with the bar suspended, so they survive when
/// stderr is not a terminal and the bar is hidden.
pub struct BarProgress {
    bar: ProgressBar,
    verbose: u8,
}

impl BarProgress {
    pub fn new(verbose: u8) -> Self {
        Self {
            bar: ProgressBar::hidden(),
            verbose,
        }
    }

    /// Stop rendering after a fatal error, leaving the bar where it stopped.
    pub fn abandon(&self) {
        self.bar.abandon();
    }

    fn say(&self, line: String) {
        self.bar.suspend(|| println!("{line}"));
    }
}

impl ProgressSink for BarProgress {
    fn start(&mut self, total: usize) {
        self.bar = create_progress_bar(total as u64);
    }

    fn record(&mut self, event: &ProgressEvent<'_>) {
        if self.verbose >= 2 {
            self.say(format!(
                "{} -> HTTP {} {}",
                event.login, event.response.status, event.response.body
            ));
        }
        if self.verbose >= 1 {
            match event.outcome {
                GrantOutcome::Added => {
                    self.say(format!("{} Added {}", "✓".green(), event.login));
                }
                GrantOutcome::Failed { status } => {
                    self.say(format!(
                        "{} Failed to add {} (HTTP {status})",
                        "✗".red(),
                        event.login
                    ));
                }
            }
        }
        self.bar.set_message(event.login.to_string());
        self.bar.inc(1);
    }

    fn finish(&mut self, _result: &SyncResult) {
        self.bar.finish_and_clear();
    }
}

fn create_progress_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.green/dim}] {pos}/{len} {msg}")
        .map(|style| style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏").progress_chars("█▓░"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(style);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
