//! Terminal display
//!
//! User-facing output kept apart from logging: styled status lines on stdout
//! and progress bars on stderr. Log lines go through `tracing`.

pub mod progress;
pub mod styling;

pub use progress::{ProgressDisplay, ProgressTracker};
pub use styling::StyleManager;

/// Styling and progress for one command run
#[derive(Debug, Clone)]
pub struct Display {
    styling: StyleManager,
    interactive: bool,
}

impl Display {
    /// `color` decides styling; progress bars only draw on an interactive stderr
    pub fn new(color: bool) -> Self {
        Self {
            styling: StyleManager::new(color),
            interactive: console::Term::stderr().features().is_attended(),
        }
    }

    /// Plain styling and hidden progress
    pub fn plain() -> Self {
        Self {
            styling: StyleManager::new(false),
            interactive: false,
        }
    }

    pub fn styling(&self) -> &StyleManager {
        &self.styling
    }

    pub fn progress(&self) -> ProgressDisplay<'_> {
        ProgressDisplay::new(&self.styling, self.interactive)
    }
}
