//! Browser globals that break server-side rendering.

use crate::checks::grep::{findings, GrepQuery, MAX_FINDINGS};
use crate::checks::{Check, CheckContext, CheckId};
use crate::ui::Section;

/// References to browser-only globals.
pub const BROWSER_GLOBAL_PATTERN: &str = r"window\.\|document\.";

/// Lines mentioning a client-only guard are skipped.
pub const CLIENT_GUARD_PATTERN: &str = r"onMounted\|ClientOnly";

/// Flags `window.`/`document.` use outside a client-only guard.
pub struct SsrCheck;

impl Check for SsrCheck {
    fn id(&self) -> CheckId {
        CheckId::new("ssr")
    }

    fn icon(&self) -> &'static str {
        "🌐"
    }

    fn title(&self) -> &'static str {
        "SSR Compatibility Check:"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Section {
        let query = GrepQuery::new(BROWSER_GLOBAL_PATTERN)
            .line_numbers()
            .excluding(CLIENT_GUARD_PATTERN)
            .limit(MAX_FINDINGS);
        let hazards = findings(&ctx.run(&query.to_command()), true);

        if hazards.is_empty() {
            return self.section().success("No obvious SSR issues found");
        }

        let mut section = self
            .section()
            .warning("Potential SSR issues (window/document outside onMounted):");
        for finding in &hazards {
            section = section.text(finding.to_string());
        }
        section
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::grep::Finding;
    use crate::checks::test_support::project;
    use crate::shell::{MockShell, SystemShell};
    use crate::ui::StatusKind;
    use std::path::Path;

    #[test]
    fn success_when_command_fails() {
        let shell = MockShell::new();
        let section = SsrCheck.run(&CheckContext::new(Path::new("."), &shell));

        assert_eq!(section.body(), vec!["✅ No obvious SSR issues found"]);
    }

    #[cfg(unix)]
    #[test]
    fn reports_unguarded_globals_with_line_numbers() {
        let temp = project(&[(
            "src/Page.vue",
            "<script setup>\nconst w = window.innerWidth\nonMounted(() => document.title = 'x')\nconst el = document.body\n</script>\n",
        )]);

        let section = SsrCheck.run(&CheckContext::new(temp.path(), &SystemShell));

        assert_eq!(
            section.statuses(StatusKind::Warning),
            vec!["Potential SSR issues (window/document outside onMounted):"]
        );
        let lines: Vec<Finding> = section
            .texts()
            .iter()
            .map(|t| Finding::parse(t, true))
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].line, Some(2));
        assert_eq!(lines[1].line, Some(4));
        assert!(lines.iter().all(|f| f.path == "src/Page.vue"));
    }

    #[cfg(unix)]
    #[test]
    fn client_only_lines_are_skipped() {
        let temp = project(&[(
            "src/Widget.vue",
            "<ClientOnly><Map :w=\"window.innerWidth\" /></ClientOnly>\n",
        )]);

        let section = SsrCheck.run(&CheckContext::new(temp.path(), &SystemShell));

        assert_eq!(section.body(), vec!["✅ No obvious SSR issues found"]);
    }

    #[cfg(unix)]
    #[test]
    fn caps_at_five_real_matches() {
        let body: String = (0..12).map(|i| format!("const v{i} = window.x{i}\n")).collect();
        let temp = project(&[("src/Many.vue", body.as_str())]);

        let section = SsrCheck.run(&CheckContext::new(temp.path(), &SystemShell));

        assert_eq!(section.texts().len(), MAX_FINDINGS);
        assert_eq!(section.lines.len(), MAX_FINDINGS + 1);
    }
}
