//! Visual theme and styling.

use console::Style;

/// Report theme.
///
/// Styles only change colour and weight; the text is the same in every
/// theme so plain output can be compared byte for byte.
#[derive(Debug, Clone)]
pub struct DoctorTheme {
    /// Style for success lines (green).
    pub success: Style,
    /// Style for warning lines (orange).
    pub warning: Style,
    /// Style for failure lines (red bold).
    pub error: Style,
    /// Style for section titles and banner text (bold).
    pub header: Style,
    /// Style for separator rules (dim).
    pub border: Style,
}

impl Default for DoctorTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl DoctorTheme {
    /// Create the coloured theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            header: Style::new().bold(),
            border: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
            border: Style::new(),
        }
    }

    /// Pick a theme for stdout, honouring `--no-color`, `NO_COLOR` and
    /// whether stdout is a terminal.
    pub fn for_stdout(no_color: bool) -> Self {
        if no_color || std::env::var_os("NO_COLOR").is_some() {
            console::set_colors_enabled(false);
            return Self::plain();
        }
        if console::colors_enabled() {
            Self::new()
        } else {
            Self::plain()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_leaves_text_untouched() {
        let theme = DoctorTheme::plain();
        assert_eq!(theme.success.apply_to("ok").to_string(), "ok");
        assert_eq!(theme.border.apply_to("----").to_string(), "----");
    }

    #[test]
    fn forced_colors_add_escape_codes() {
        let theme = DoctorTheme::new();
        let styled = theme.error.force_styling(true).apply_to("bad").to_string();
        assert!(styled.contains("\u{1b}["));
        assert!(styled.contains("bad"));
    }

    #[test]
    fn default_is_coloured_theme() {
        let theme = DoctorTheme::default();
        let styled = theme.success.force_styling(true).apply_to("x").to_string();
        assert_ne!(styled, "x");
    }

    #[test]
    fn no_color_flag_selects_plain() {
        let theme = DoctorTheme::for_stdout(true);
        assert_eq!(theme.header.apply_to("title").to_string(), "title");
    }
}
