//! Installed Vue version.

use crate::checks::{Check, CheckContext, CheckId};
use crate::detection::vue_dependency;
use crate::ui::Section;

/// Prints the `vue@` line from `npm list`, verbatim.
pub struct VueVersionCheck;

impl Check for VueVersionCheck {
    fn id(&self) -> CheckId {
        CheckId::new("vue-version")
    }

    fn icon(&self) -> &'static str {
        "📦"
    }

    fn title(&self) -> &'static str {
        "Vue Version:"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Section {
        match vue_dependency(ctx.shell, ctx.project_root) {
            Some(output) => self.section().text(output),
            None => self.section().text("Vue not found in dependencies"),
        }
    }
}
