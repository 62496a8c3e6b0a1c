//! Check definitions.
//!
//! - [`Check`] - The trait every diagnostic check implements
//! - [`CheckId`] - Stable identifier for a check
//! - [`CheckContext`] - What a check may look at

use std::path::Path;

use crate::shell::Shell;
use crate::ui::Section;

/// Unique identifier for a check.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CheckId(pub String);

impl CheckId {
    /// Create a new check ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for CheckId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Inputs shared by all checks for one run.
pub struct CheckContext<'a> {
    /// Directory being inspected. Commands run with this as cwd.
    pub project_root: &'a Path,

    /// Command runner.
    pub shell: &'a dyn Shell,
}

impl<'a> CheckContext<'a> {
    /// Create a context.
    pub fn new(project_root: &'a Path, shell: &'a dyn Shell) -> Self {
        Self {
            project_root,
            shell,
        }
    }

    /// Run a command line in the project root.
    pub fn run(&self, command: &str) -> String {
        self.shell.run(command, self.project_root)
    }
}

/// A diagnostic check.
///
/// Checks are independent and read-only. They never fail: when the
/// underlying command produces nothing, the check reports its negative
/// result.
pub trait Check {
    /// Unique identifier for this check.
    fn id(&self) -> CheckId;

    /// Section icon.
    fn icon(&self) -> &'static str;

    /// Section title, including the trailing colon.
    fn title(&self) -> &'static str;

    /// Inspect the project and describe what was found.
    fn run(&self, ctx: &CheckContext<'_>) -> Section;

    /// An empty section carrying this check's icon and title.
    fn section(&self) -> Section {
        Section::new(self.icon(), self.title())
    }
}
