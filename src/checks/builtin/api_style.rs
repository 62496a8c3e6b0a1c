//! Composition vs Options API census.

use crate::checks::grep::{parse_count, GrepQuery};
use crate::checks::{Check, CheckContext, CheckId};
use crate::ui::Section;

/// Marker of a `<script setup>` single-file component.
pub const SCRIPT_SETUP_PATTERN: &str = "<script setup";

/// Marker of an Options API component.
pub const OPTIONS_API_PATTERN: &str = "export default {";

/// Counts files using each API style. No pass/fail judgement.
pub struct ApiStyleCheck;

impl ApiStyleCheck {
    fn count_files(ctx: &CheckContext<'_>, pattern: &str) -> usize {
        let query = GrepQuery::new(pattern).files_only().count();
        parse_count(&ctx.run(&query.to_command()))
    }
}

impl Check for ApiStyleCheck {
    fn id(&self) -> CheckId {
        CheckId::new("api-style")
    }

    fn icon(&self) -> &'static str {
        "🔧"
    }

    fn title(&self) -> &'static str {
        "Composition API Usage:"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Section {
        let setup = Self::count_files(ctx, SCRIPT_SETUP_PATTERN);
        let options = Self::count_files(ctx, OPTIONS_API_PATTERN);

        self.section()
            .text(format!("  <script setup>: {} files", setup))
            .text(format!("  Options API: {} files", options))
    }
}
