//! Diagnostic checks.
//!
//! Each check runs one or more external commands against the project root
//! and turns their text into a report [`Section`](crate::ui::Section).
//!
//! # Architecture
//!
//! - [`check`] - The [`Check`] trait and its context
//! - [`builtin`] - The eight built-in checks
//! - [`grep`] - `grep` command lines and output parsing
//! - [`registry`] - Ordered set of checks
//! - [`runner`] - Sequential execution into a report

pub mod builtin;
pub mod check;
pub mod grep;
pub mod registry;
pub mod runner;

pub use check::{Check, CheckContext, CheckId};
pub use grep::{Finding, GrepQuery, MAX_FINDINGS};
pub use registry::CheckRegistry;
pub use runner::DiagnosticRunner;
