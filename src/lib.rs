//! vue-doctor - Read-only diagnostic report for Vue.js projects.
//!
//! vue-doctor inspects a project directory with `npm list` and `grep`,
//! and prints what it finds: the installed Vue version, build tool, state
//! management, API style, and a handful of bug-prone patterns.
//!
//! # Modules
//!
//! - [`checks`] - The eight checks, their registry and the runner
//! - [`cli`] - Command-line interface and argument parsing
//! - [`detection`] - Build tool and dependency detection
//! - [`error`] - Error types and result aliases
//! - [`shell`] - Shell command execution
//! - [`ui`] - Report formatting and terminal styling
//!
//! # Example
//!
//! ```
//! use vue_doctor::checks::DiagnosticRunner;
//! use vue_doctor::shell::MockShell;
//! use vue_doctor::ui::{DoctorTheme, Report};
//!
//! let project = std::env::temp_dir();
//! let runner = DiagnosticRunner::new(MockShell::new());
//! let mut report = Report::new(Vec::new(), DoctorTheme::plain());
//! runner.run(&project, &mut report).unwrap();
//!
//! let text = String::from_utf8(report.into_inner()).unwrap();
//! assert!(text.contains("Vue not found in dependencies"));
//! assert!(text.contains("Diagnostic Complete"));
//! ```

pub mod checks;
pub mod cli;
pub mod detection;
pub mod error;
pub mod shell;
pub mod ui;

pub use error::{DoctorError, Result};
