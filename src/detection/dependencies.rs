//! Dependency queries through `npm list`.
//!
//! Output is passed through verbatim; nothing here parses versions.

use std::path::Path;

use crate::shell::Shell;

/// Packages reported by the state management check.
pub const STATE_PACKAGES: [&str; 2] = ["pinia", "vuex"];

/// `npm list` for the top-level `vue` dependency, filtered to `vue@` lines.
pub fn vue_version_command() -> String {
    npm_list_command(&["vue"], "grep vue@")
}

/// `npm list` for Pinia and Vuex, filtered to lines naming either.
pub fn state_management_command() -> String {
    npm_list_command(
        &STATE_PACKAGES,
        &format!("grep -E '({})'", STATE_PACKAGES.join("|")),
    )
}

/// Matching `npm list` lines for `vue`, if any.
pub fn vue_dependency(shell: &dyn Shell, project_root: &Path) -> Option<String> {
    non_empty(shell.run(&vue_version_command(), project_root))
}

/// Matching `npm list` lines for Pinia or Vuex, if any.
pub fn state_management(shell: &dyn Shell, project_root: &Path) -> Option<String> {
    non_empty(shell.run(&state_management_command(), project_root))
}

fn npm_list_command(packages: &[&str], filter: &str) -> String {
    format!(
        "npm list {} --depth=0 2>/dev/null | {}",
        packages.join(" "),
        filter
    )
}

fn non_empty(output: String) -> Option<String> {
    let trimmed = output.trim_end();
    if trimmed.trim().is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::MockShell;

    #[test]
    fn vue_version_command_text() {
        assert_eq!(
            vue_version_command(),
            "npm list vue --depth=0 2>/dev/null | grep vue@"
        );
    }

    #[test]
    fn state_management_command_text() {
        assert_eq!(
            state_management_command(),
            "npm list pinia vuex --depth=0 2>/dev/null | grep -E '(pinia|vuex)'"
        );
    }

    #[test]
    fn vue_dependency_passes_output_through() {
        let shell = MockShell::new().respond("npm list vue", "└── vue@3.4.21\n\n");

        let found = vue_dependency(&shell, Path::new("."));

        assert_eq!(found.as_deref(), Some("└── vue@3.4.21"));
    }

    #[test]
    fn vue_dependency_absent_when_query_fails() {
        let shell = MockShell::new();
        assert!(vue_dependency(&shell, Path::new(".")).is_none());
    }

    #[test]
    fn whitespace_only_output_counts_as_absent() {
        let shell = MockShell::new().respond("pinia", "  \n\t\n");
        assert!(state_management(&shell, Path::new(".")).is_none());
    }

    #[test]
    fn state_management_keeps_both_lines() {
        let shell = MockShell::new().respond("pinia", "├── pinia@2.1.7\n└── vuex@4.1.0\n");

        let found = state_management(&shell, Path::new(".")).unwrap();

        assert_eq!(found.lines().count(), 2);
    }
}
