//! State management libraries.

use crate::checks::{Check, CheckContext, CheckId};
use crate::detection::state_management;
use crate::ui::Section;

/// Prints Pinia/Vuex lines from `npm list`, or a warning when neither is
/// installed.
pub struct StateManagementCheck;

impl Check for StateManagementCheck {
    fn id(&self) -> CheckId {
        CheckId::new("state-management")
    }

    fn icon(&self) -> &'static str {
        "📊"
    }

    fn title(&self) -> &'static str {
        "State Management:"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Section {
        match state_management(ctx.shell, ctx.project_root) {
            Some(output) => self.section().text(output),
            None => self
                .section()
                .warning("No state management detected (Pinia or Vuex)"),
        }
    }
}
