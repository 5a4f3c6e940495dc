//! Progress bars for batch work
//!
//! Bars draw on stderr only when it is attended; otherwise they are hidden
//! and every call is a no-op.

use super::styling::StyleManager;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

const UNICODE_TEMPLATE: &str = "{spinner:.green} {msg} [{wide_bar:.cyan/blue}] {pos}/{len} ({eta})";
const ASCII_TEMPLATE: &str = "{spinner} {msg} [{wide_bar}] {pos}/{len} ({eta})";

pub struct ProgressDisplay<'a> {
    styling: &'a StyleManager,
    visible: bool,
}

impl<'a> ProgressDisplay<'a> {
    pub(crate) fn new(styling: &'a StyleManager, visible: bool) -> Self {
        Self { styling, visible }
    }

    /// Progress bar for `total` known steps
    pub fn bar(&self, total: u64, message: &str) -> ProgressTracker {
        let target = if self.visible {
            ProgressDrawTarget::stderr()
        } else {
            ProgressDrawTarget::hidden()
        };
        let bar = ProgressBar::with_draw_target(Some(total), target);

        let style = if self.styling.unicode_enabled() {
            ProgressStyle::with_template(UNICODE_TEMPLATE).map(|style| {
                style
                    .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
                    .progress_chars("█▉▊▋▌▍▎▏  ")
            })
        } else {
            ProgressStyle::with_template(ASCII_TEMPLATE).map(|style| {
                style
                    .tick_strings(&["-", "\\", "|", "/"])
                    .progress_chars("##-")
            })
        };

        bar.set_style(style.unwrap_or_else(|_| ProgressStyle::default_bar()));
        bar.set_message(message.to_string());
        if self.visible {
            bar.enable_steady_tick(Duration::from_millis(100));
        }

        ProgressTracker {
            bar,
            styling: self.styling.clone(),
        }
    }
}

/// Handle to one bar; clones share the bar and may move across tasks
#[derive(Clone)]
pub struct ProgressTracker {
    bar: ProgressBar,
    styling: StyleManager,
}

impl ProgressTracker {
    pub fn inc(&self) {
        self.bar.inc(1);
    }

    pub fn set_message(&self, message: &str) {
        self.bar.set_message(message.to_string());
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }

    pub fn finish(&self, message: &str) {
        self.bar
            .finish_with_message(self.styling.format_success(message));
    }

    pub fn abandon(&self, message: &str) {
        self.bar.abandon_with_message(self.styling.format_error(message));
    }

    pub fn finish_clear(&self) {
        self.bar.finish_and_clear();
    }

    pub fn is_finished(&self) -> bool {
        self.bar.is_finished()
    }
}

#[cfg(test)]
mod tests {
    include!("progress.test.rs");
}
