use std::io::IsTerminal;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar for the classification pass.
///
/// Draws on stderr, and only when stderr is a terminal and quiet mode is off.
pub struct ScanProgress {
    progress_bar: ProgressBar,
}

impl ScanProgress {
    #[must_use]
    pub fn new(total: u64, quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(total, quiet, is_tty)
    }

    fn new_with_visibility(total: u64, quiet: bool, is_tty: bool) -> Self {
        let progress_bar = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            Self::create_visible_progress_bar(total)
        };
        Self { progress_bar }
    }

    fn create_visible_progress_bar(total: u64) -> ProgressBar {
        let pb = ProgressBar::new(total);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} Counting [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%)")
        {
            pb.set_style(style.progress_chars("█▓░"));
        }
        pb
    }

    pub fn inc(&self) {
        self.progress_bar.inc(1);
    }

    /// Run `f` with the bar hidden so log lines do not interleave with it.
    pub fn suspend<R>(&self, f: impl FnOnce() -> R) -> R {
        self.progress_bar.suspend(f)
    }

    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }

    #[cfg(test)]
    fn position(&self) -> u64 {
        self.progress_bar.position()
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
