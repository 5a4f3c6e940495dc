//! Semantic text styling
//!
//! Wraps `console::Style` so callers ask for intent (success, error, subtle)
//! instead of colors. With color disabled every method returns plain text.

use console::Style;

#[derive(Debug, Clone)]
pub struct StyleManager {
    color: bool,
    unicode: bool,
    success: Style,
    error: Style,
    warning: Style,
    info: Style,
    emphasis: Style,
    subtle: Style,
}

impl StyleManager {
    pub fn new(color: bool) -> Self {
        Self {
            color,
            unicode: console::Term::stdout().features().wants_emoji(),
            success: Style::new().green().force_styling(color),
            error: Style::new().red().force_styling(color),
            warning: Style::new().yellow().force_styling(color),
            info: Style::new().cyan().force_styling(color),
            emphasis: Style::new().bold().force_styling(color),
            subtle: Style::new().dim().force_styling(color),
        }
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    pub fn unicode_enabled(&self) -> bool {
        self.unicode
    }

    pub fn style_success(&self, text: &str) -> String {
        self.success.apply_to(text).to_string()
    }

    pub fn style_error(&self, text: &str) -> String {
        self.error.apply_to(text).to_string()
    }

    pub fn style_warning(&self, text: &str) -> String {
        self.warning.apply_to(text).to_string()
    }

    pub fn style_info(&self, text: &str) -> String {
        self.info.apply_to(text).to_string()
    }

    pub fn style_emphasis(&self, text: &str) -> String {
        self.emphasis.apply_to(text).to_string()
    }

    pub fn style_subtle(&self, text: &str) -> String {
        self.subtle.apply_to(text).to_string()
    }

    fn symbol(&self, unicode: &'static str, ascii: &'static str) -> &'static str {
        if self.unicode { unicode } else { ascii }
    }

    /// Format success message with symbol and styling
    pub fn format_success(&self, message: &str) -> String {
        format!("{} {}", self.style_success(self.symbol("✓", "+")), message)
    }

    /// Format error message with symbol and styling
    pub fn format_error(&self, message: &str) -> String {
        format!("{} {}", self.style_error(self.symbol("✗", "x")), message)
    }

    /// Format warning message with symbol and styling
    pub fn format_warning(&self, message: &str) -> String {
        format!("{} {}", self.style_warning(self.symbol("⚠", "!")), message)
    }

    /// `label: value` with a muted label
    pub fn format_field(&self, label: &str, value: &str) -> String {
        format!("{} {}", self.style_subtle(&format!("{}:", label)), value)
    }
}

#[cfg(test)]
mod tests {
    include!("styling.test.rs");
}
