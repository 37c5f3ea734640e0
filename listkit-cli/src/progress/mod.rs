//! Progress display while input files are read

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::Path;

const TEMPLATE: &str = "{bar:30.cyan/blue} {pos}/{len} files, {msg}";

/// Tracks how many files and items have been read so far
///
/// The bar is only drawn for more than one input file; a single file or
/// standard input reads too quickly to be worth it.
pub struct ReadProgress {
    bar: ProgressBar,
    items: usize,
}

impl ReadProgress {
    /// Progress for reading `files` input files
    pub fn new(files: usize, quiet: bool) -> Self {
        let bar = if quiet || files < 2 {
            ProgressBar::with_draw_target(Some(files as u64), ProgressDrawTarget::hidden())
        } else {
            ProgressBar::new(files as u64)
        };

        if let Ok(style) = ProgressStyle::with_template(TEMPLATE) {
            bar.set_style(style.progress_chars("=> "));
        }
        bar.set_message("0 items");

        Self { bar, items: 0 }
    }

    /// Record a file that yielded `count` items
    pub fn file_read(&mut self, path: &Path, count: usize) {
        self.items += count;
        log::debug!("{}: {} item(s)", path.display(), count);
        self.bar.set_message(format!("{} items", self.items));
        self.bar.inc(1);
    }

    /// Items read so far across all files
    pub fn items(&self) -> usize {
        self.items
    }

    /// Clear the bar and return the total item count
    pub fn finish(self) -> usize {
        self.bar.finish_and_clear();
        self.items
    }
}
