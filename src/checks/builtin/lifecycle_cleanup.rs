//! Timers and listeners without cleanup.
//!
//! The check is per file: one cleanup call anywhere in a file clears every
//! registration in it, whether or not they belong together.

use crate::checks::grep::{file_list, GrepQuery};
use crate::checks::{Check, CheckContext, CheckId};
use crate::shell::quote;
use crate::ui::Section;

/// Calls that need matching teardown.
pub const LEAK_PRONE_PATTERN: &str = r"addEventListener\|setInterval\|setTimeout";

/// Any of these in a file counts as cleanup.
pub const CLEANUP_PATTERN: &str =
    r"onUnmounted\|removeEventListener\|clearInterval\|clearTimeout";

/// Lists files that register listeners or timers but never clean up.
pub struct LifecycleCleanupCheck;

impl LifecycleCleanupCheck {
    /// Files with a leak-prone call, filtered in the same shell to those
    /// without any cleanup marker. Paths never leave the shell between the
    /// two greps, so names that are not valid UTF-8 are read back byte for byte.
    pub fn suspects_command() -> String {
        format!(
            "{} | while IFS= read -r f; do grep -q {} \"$f\" 2>/dev/null || printf '%s\\n' \"$f\"; done",
            GrepQuery::new(LEAK_PRONE_PATTERN).files_only().to_command(),
            quote(CLEANUP_PATTERN)
        )
    }
}

impl Check for LifecycleCleanupCheck {
    fn id(&self) -> CheckId {
        CheckId::new("lifecycle-cleanup")
    }

    fn icon(&self) -> &'static str {
        "🧹"
    }

    fn title(&self) -> &'static str {
        "Lifecycle Cleanup Check:"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Section {
        let suspects = file_list(&ctx.run(&Self::suspects_command()));

        tracing::debug!(count = suspects.len(), "cleanup suspects");

        if suspects.is_empty() {
            return self.section().success("No obvious cleanup issues found");
        }

        let mut section = self
            .section()
            .warning("Files with event listeners but no cleanup:");
        for file in &suspects {
            section = section.text(file);
        }
        section
    }
}
