//! Console progress rendering for image loading.

use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};

use spritegrid::{Dimensions, LoadProgress};

/// Renders per-image load progress as an indicatif bar on stderr.
pub struct ConsoleProgress {
    bar: ProgressBar,
}

impl ConsoleProgress {
    /// Create a progress bar sized for `total` source images.
    pub fn new(total: u64) -> Self {
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::with_template("[{pos}/{len}] {msg}")
                .expect("progress template is valid"),
        );
        Self { bar }
    }

    /// Clear the bar once loading is done.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl LoadProgress for ConsoleProgress {
    fn started(&self, path: &Path) {
        self.bar.set_message(format!("Loading: {}", path.display()));
    }

    fn loaded(&self, path: &Path, size: Dimensions) {
        self.bar
            .set_message(format!("Loaded: {} ({})", path.display(), size));
        self.bar.inc(1);
    }
}
