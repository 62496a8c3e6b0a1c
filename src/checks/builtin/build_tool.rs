//! Build tool detection.

use crate::checks::{Check, CheckContext, CheckId};
use crate::detection::BuildTool;
use crate::ui::Section;

/// Reports the first build tool whose config file is present.
pub struct BuildToolCheck;

impl Check for BuildToolCheck {
    fn id(&self) -> CheckId {
        CheckId::new("build-tool")
    }

    fn icon(&self) -> &'static str {
        "🛠️"
    }

    fn title(&self) -> &'static str {
        "Build Tool:"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Section {
        match BuildTool::detect(ctx.project_root) {
            Some(tool) => self.section().success(format!("{} detected", tool)),
            None => self.section().warning("Unknown build tool"),
        }
    }
}
