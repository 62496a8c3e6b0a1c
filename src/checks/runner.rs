//! Sequential execution of all checks into a report.

use std::convert::Infallible;
use std::io::Write;
use std::path::Path;

use super::check::CheckContext;
use super::registry::CheckRegistry;
use crate::error::{DoctorError, Result};
use crate::shell::{Shell, SystemShell};
use crate::ui::{Report, Section};

/// Runs every registered check, one after another, and prints the report.
pub struct DiagnosticRunner<S: Shell = SystemShell> {
    registry: CheckRegistry,
    shell: S,
}

impl DiagnosticRunner<SystemShell> {
    /// Built-in checks against real processes.
    pub fn system() -> Self {
        Self::new(SystemShell)
    }
}

impl<S: Shell> DiagnosticRunner<S> {
    /// Built-in checks using `shell` for commands.
    pub fn new(shell: S) -> Self {
        Self::with_registry(CheckRegistry::with_builtins(), shell)
    }

    /// Custom set of checks.
    pub fn with_registry(registry: CheckRegistry, shell: S) -> Self {
        Self { registry, shell }
    }

    /// The shell commands are run through.
    pub fn shell(&self) -> &S {
        &self.shell
    }

    /// Run every check and collect the sections without printing.
    pub fn sections(&self, project_root: &Path) -> Vec<Section> {
        let mut sections = Vec::with_capacity(self.registry.len());
        let Ok(()) = self.each_section(project_root, |section| {
            sections.push(section);
            Ok::<(), Infallible>(())
        });
        sections
    }

    /// Print the banner, each section as soon as its check finishes, and
    /// the closing banner.
    pub fn run<W: Write>(&self, project_root: &Path, report: &mut Report<W>) -> Result<()> {
        if !project_root.is_dir() {
            let err = DoctorError::ProjectNotFound {
                path: project_root.to_path_buf(),
            };
            tracing::warn!("{}; checks will report nothing found", err);
        }

        report.banner()?;
        self.each_section(project_root, |section| report.section(&section))?;
        report.footer()?;

        Ok(())
    }

    /// Run the checks in registry order, handing each section to `emit`
    /// before starting the next check. Stops at the first `emit` error.
    fn each_section<E>(
        &self,
        project_root: &Path,
        mut emit: impl FnMut(Section) -> std::result::Result<(), E>,
    ) -> std::result::Result<(), E> {
        let ctx = CheckContext::new(project_root, &self.shell);
        for check in self.registry.iter() {
            tracing::debug!(check = %check.id(), "running check");
            emit(check.run(&ctx))?;
        }
        Ok(())
    }
}
