//! Reactivity hazards: destructured `reactive()` and mutated props.
//!
//! Unlike the other scanners this one prints nothing when clean.

use crate::checks::grep::{findings, GrepQuery, MAX_FINDINGS};
use crate::checks::{Check, CheckContext, CheckId};
use crate::ui::Section;

/// Destructuring a `reactive()` value loses reactivity; `toRefs` keeps it.
pub const REACTIVE_DESTRUCTURE_PATTERN: &str = "const.*{.*}.*=.*reactive";

/// Assigning into `props.<name>`.
pub const PROP_MUTATION_PATTERN: &str = r"props\.\w\+\s*=";

/// Flags reactive destructuring and direct prop mutation.
pub struct ReactivityCheck;

impl Check for ReactivityCheck {
    fn id(&self) -> CheckId {
        CheckId::new("reactivity")
    }

    fn icon(&self) -> &'static str {
        "⚠️"
    }

    fn title(&self) -> &'static str {
        "Potential Reactivity Issues:"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Section {
        let mut section = self.section();

        let destructured = GrepQuery::new(REACTIVE_DESTRUCTURE_PATTERN).limit(MAX_FINDINGS);
        let matches = findings(&ctx.run(&destructured.to_command()), false);
        if !matches.is_empty() {
            section = section.failure("Reactive destructuring (use toRefs):");
            for finding in &matches {
                section = section.text(finding.to_string());
            }
        }

        let mutated = GrepQuery::new(PROP_MUTATION_PATTERN).limit(MAX_FINDINGS);
        let matches = findings(&ctx.run(&mutated.to_command()), false);
        if !matches.is_empty() {
            section = section.failure("Direct prop mutation detected:");
            for finding in &matches {
                section = section.text(finding.to_string());
            }
        }

        section
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::test_support::project;
    use crate::shell::{MockShell, SystemShell};
    use crate::ui::StatusKind;
    use std::path::Path;

    #[test]
    fn clean_project_prints_nothing() {
        let shell = MockShell::new();
        let section = ReactivityCheck.run(&CheckContext::new(Path::new("."), &shell));

        assert!(section.lines.is_empty());
        assert_eq!(shell.commands().len(), 2);
    }

    #[test]
    fn caps_each_sub_check_at_five() {
        let many: String = (1..=9)
            .map(|i| format!("src/S{i}.vue:const {{ a }} = reactive(s)\n"))
            .collect();
        let shell = MockShell::new().respond("reactive", &many);

        let section = ReactivityCheck.run(&CheckContext::new(Path::new("."), &shell));

        assert_eq!(section.texts().len(), MAX_FINDINGS);
        assert!(!section.body().iter().any(|l| l.contains("more")));
    }

    #[test]
    fn caps_prop_mutations_at_five() {
        let many: String = (1..=8)
            .map(|i| format!("src/P{i}.vue:  props.value{i} = {i}\n"))
            .collect();
        let shell = MockShell::new().respond("props", &many);

        let section = ReactivityCheck.run(&CheckContext::new(Path::new("."), &shell));

        assert_eq!(
            section.statuses(StatusKind::Failed),
            vec!["Direct prop mutation detected:"]
        );
        let texts = section.texts();
        assert_eq!(texts.len(), MAX_FINDINGS);
        assert_eq!(texts[0], "src/P1.vue:  props.value1 = 1");
        assert_eq!(texts[4], "src/P5.vue:  props.value5 = 5");
        assert!(!section.body().iter().any(|l| l.contains("more")));
    }

    #[cfg(unix)]
    #[test]
    fn finds_destructuring_and_prop_mutation() {
        let temp = project(&[
            (
                "src/Counter.vue",
                "<script setup>\nconst { count } = reactive(state)\n</script>\n",
            ),
            (
                "src/Editor.vue",
                "<script setup>\nfunction save() {\n  props.title = 'x'\n}\n</script>\n",
            ),
            (
                "src/Safe.vue",
                "<script setup>\nconst { count } = toRefs(reactive(state))\nconst title = props.title\n</script>\n",
            ),
        ]);

        let section = ReactivityCheck.run(&CheckContext::new(temp.path(), &SystemShell));

        assert_eq!(
            section.statuses(StatusKind::Failed),
            vec![
                "Reactive destructuring (use toRefs):",
                "Direct prop mutation detected:"
            ]
        );
        let texts = section.texts();
        assert!(texts.iter().any(|l| l.starts_with("src/Counter.vue:")));
        assert!(texts.iter().any(|l| l.starts_with("src/Editor.vue:")));
        // `toRefs(reactive(...))` still matches the textual pattern.
        assert!(texts.iter().any(|l| l.starts_with("src/Safe.vue:const { count }")));
        assert!(!texts.iter().any(|l| l.contains("const title = props.title")));
    }

    #[cfg(unix)]
    #[test]
    fn only_prop_mutation_prints_only_its_header() {
        let temp = project(&[("src/A.vue", "props.open= false\n")]);

        let section = ReactivityCheck.run(&CheckContext::new(temp.path(), &SystemShell));

        assert_eq!(
            section.statuses(StatusKind::Failed),
            vec!["Direct prop mutation detected:"]
        );
    }
}
