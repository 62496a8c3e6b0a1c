//! Scripted shell for testing.
//!
//! `MockShell` implements [`Shell`] without spawning processes. Responses
//! are matched by substring against the command line; the first matching
//! rule wins and unmatched commands produce empty output, which is what a
//! failing command looks like to the checks.
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use vue_doctor::shell::{MockShell, Shell};
//!
//! let shell = MockShell::new().respond("npm list vue", "└── vue@3.4.21\n");
//!
//! assert_eq!(shell.run("npm list vue --depth=0", Path::new(".")), "└── vue@3.4.21\n");
//! assert_eq!(shell.run("grep -r v-for", Path::new(".")), "");
//! assert_eq!(shell.commands().len(), 2);
//! ```

use std::cell::RefCell;
use std::path::Path;

use super::runner::Shell;

/// Shell double that replays canned output.
#[derive(Debug, Default)]
pub struct MockShell {
    responses: Vec<(String, String)>,
    commands: RefCell<Vec<String>>,
}

impl MockShell {
    /// Create a shell that answers every command with empty output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a response for commands containing `needle`.
    pub fn respond(mut self, needle: &str, output: &str) -> Self {
        self.responses.push((needle.to_string(), output.to_string()));
        self
    }

    /// Every command line run so far, in order.
    pub fn commands(&self) -> Vec<String> {
        self.commands.borrow().clone()
    }
}

impl Shell for MockShell {
    fn run(&self, command: &str, _cwd: &Path) -> String {
        self.commands.borrow_mut().push(command.to_string());
        self.responses
            .iter()
            .find(|(needle, _)| command.contains(needle.as_str()))
            .map(|(_, output)| output.clone())
            .unwrap_or_default()
    }
}
