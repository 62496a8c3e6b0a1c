//! Status vocabulary for report lines.

use super::theme::DoctorTheme;

/// Outcome attached to a report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Nothing suspicious found, or a feature was detected.
    Success,
    /// Possible problem, or a feature is missing.
    Warning,
    /// Pattern known to cause bugs.
    Failed,
}

impl StatusKind {
    /// Emoji prefix.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✅",
            Self::Warning => "⚠️",
            Self::Failed => "❌",
        }
    }

    /// Icon + message, without styling.
    pub fn format_plain(self, msg: &str) -> String {
        format!("{} {}", self.icon(), msg)
    }

    /// Icon + message, styled with the theme colour for this status.
    pub fn format(self, theme: &DoctorTheme, msg: &str) -> String {
        let style = match self {
            Self::Success => &theme.success,
            Self::Warning => &theme.warning,
            Self::Failed => &theme.error,
        };
        style.apply_to(self.format_plain(msg)).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_returns_emoji() {
        assert_eq!(StatusKind::Success.icon(), "✅");
        assert_eq!(StatusKind::Warning.icon(), "⚠️");
        assert_eq!(StatusKind::Failed.icon(), "❌");
    }

    #[test]
    fn format_plain_joins_icon_and_message() {
        assert_eq!(
            StatusKind::Success.format_plain("Vite detected"),
            "✅ Vite detected"
        );
    }

    #[test]
    fn format_with_plain_theme_matches_format_plain() {
        let theme = DoctorTheme::plain();
        assert_eq!(
            StatusKind::Warning.format(&theme, "Unknown build tool"),
            StatusKind::Warning.format_plain("Unknown build tool")
        );
    }
}
