//! `v-for` without `:key`.

use crate::checks::grep::{findings, GrepQuery, MAX_FINDINGS};
use crate::checks::{Check, CheckContext, CheckId};
use crate::ui::Section;

/// List-rendering directive.
pub const V_FOR_PATTERN: &str = "v-for";

/// Key binding; any line containing it is considered keyed.
pub const KEY_PATTERN: &str = ":key";

/// Flags `v-for` lines that carry no `:key` on the same line.
pub struct VForKeysCheck;

impl Check for VForKeysCheck {
    fn id(&self) -> CheckId {
        CheckId::new("v-for-keys")
    }

    fn icon(&self) -> &'static str {
        "🔑"
    }

    fn title(&self) -> &'static str {
        "v-for Key Check:"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Section {
        let query = GrepQuery::new(V_FOR_PATTERN)
            .excluding(KEY_PATTERN)
            .limit(MAX_FINDINGS);
        let unkeyed = findings(&ctx.run(&query.to_command()), false);

        if unkeyed.is_empty() {
            return self.section().success("All v-for have keys");
        }

        let mut section = self.section().failure("v-for without :key found:");
        for finding in &unkeyed {
            section = section.text(finding.to_string());
        }
        section
    }
}
