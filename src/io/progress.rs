//! Progress display for tile render passes

use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_MIN_TILES};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static RENDER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] {{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Optional progress bar over the tiles of one render pass
///
/// Small passes and quiet runs get no bar; every method is then a no-op.
#[derive(Debug, Default)]
pub struct RenderProgress {
    bar: Option<ProgressBar>,
}

impl RenderProgress {
    /// Create a bar for `tile_count` tiles if enabled and the pass is large enough
    pub fn new(tile_count: usize, label: &str, enabled: bool) -> Self {
        if !enabled || tile_count < PROGRESS_MIN_TILES {
            return Self::hidden();
        }
        let bar = ProgressBar::new(tile_count as u64);
        bar.set_style(RENDER_STYLE.clone());
        bar.set_message(label.to_string());
        Self { bar: Some(bar) }
    }

    /// A progress tracker that displays nothing
    pub const fn hidden() -> Self {
        Self { bar: None }
    }

    /// Whether a bar is shown
    pub const fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    /// Record one finished tile
    pub fn tick(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
