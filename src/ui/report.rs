//! Report sections and the writer that prints them.
//!
//! A check produces a [`Section`]; a [`Report`] renders sections between an
//! opening and a closing banner. Layout:
//!
//! ```text
//! ==================================================
//! 🔍 Vue.js Project Diagnostic Report
//! ==================================================
//!
//! 📦 Vue Version:
//! ----------------------------------------
//! Vue not found in dependencies
//! ...
//!
//! ==================================================
//! ✅ Diagnostic Complete
//! ==================================================
//! ```

use std::io::{self, Write};

use super::icons::StatusKind;
use super::theme::DoctorTheme;

/// Width of the banner rule.
pub const BANNER_WIDTH: usize = 50;

/// Width of the rule under each section title.
pub const SECTION_RULE_WIDTH: usize = 40;

const REPORT_TITLE: &str = "🔍 Vue.js Project Diagnostic Report";
const COMPLETE_TITLE: &str = "✅ Diagnostic Complete";

/// One body line of a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionLine {
    /// Verbatim text (command output, counts).
    Text(String),
    /// Message prefixed with a status icon.
    Status(StatusKind, String),
}

/// The rendered result of one check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub icon: &'static str,
    pub title: &'static str,
    pub lines: Vec<SectionLine>,
}

impl Section {
    /// Create an empty section.
    pub fn new(icon: &'static str, title: &'static str) -> Self {
        Self {
            icon,
            title,
            lines: Vec::new(),
        }
    }

    /// Append verbatim text. Multi-line text becomes several lines.
    pub fn text(mut self, text: impl AsRef<str>) -> Self {
        self.lines.extend(
            text.as_ref()
                .lines()
                .map(|line| SectionLine::Text(line.to_string())),
        );
        self
    }

    /// Append a status line.
    pub fn status(mut self, kind: StatusKind, msg: impl Into<String>) -> Self {
        self.lines.push(SectionLine::Status(kind, msg.into()));
        self
    }

    /// Append a success line.
    pub fn success(self, msg: impl Into<String>) -> Self {
        self.status(StatusKind::Success, msg)
    }

    /// Append a warning line.
    pub fn warning(self, msg: impl Into<String>) -> Self {
        self.status(StatusKind::Warning, msg)
    }

    /// Append a failure line.
    pub fn failure(self, msg: impl Into<String>) -> Self {
        self.status(StatusKind::Failed, msg)
    }

    /// Status lines of a given kind.
    pub fn statuses(&self, kind: StatusKind) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|line| match line {
                SectionLine::Status(k, msg) if *k == kind => Some(msg.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Verbatim text lines.
    pub fn texts(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|line| match line {
                SectionLine::Text(text) => Some(text.as_str()),
                SectionLine::Status(..) => None,
            })
            .collect()
    }

    /// Plain rendering of the body, one entry per line.
    pub fn body(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| match line {
                SectionLine::Text(text) => text.clone(),
                SectionLine::Status(kind, msg) => kind.format_plain(msg),
            })
            .collect()
    }
}

/// Writes the report to any [`Write`] sink.
pub struct Report<W: Write> {
    out: W,
    theme: DoctorTheme,
}

impl<W: Write> Report<W> {
    /// Create a report writer.
    pub fn new(out: W, theme: DoctorTheme) -> Self {
        Self { out, theme }
    }

    /// Print the opening banner.
    pub fn banner(&mut self) -> io::Result<()> {
        self.banner_block(REPORT_TITLE)
    }

    /// Print one section.
    pub fn section(&mut self, section: &Section) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "{}",
            self.theme
                .header
                .apply_to(format!("{} {}", section.icon, section.title))
        )?;
        writeln!(
            self.out,
            "{}",
            self.theme.border.apply_to("-".repeat(SECTION_RULE_WIDTH))
        )?;

        for line in &section.lines {
            match line {
                SectionLine::Text(text) => writeln!(self.out, "{}", text)?,
                SectionLine::Status(kind, msg) => {
                    writeln!(self.out, "{}", kind.format(&self.theme, msg))?
                }
            }
        }

        Ok(())
    }

    /// Print the closing banner.
    pub fn footer(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.banner_block(COMPLETE_TITLE)?;
        self.out.flush()
    }

    /// Consume the report and return the sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn banner_block(&mut self, title: &str) -> io::Result<()> {
        let rule = self.theme.border.apply_to("=".repeat(BANNER_WIDTH));
        writeln!(self.out, "{}", rule)?;
        writeln!(self.out, "{}", self.theme.header.apply_to(title))?;
        writeln!(self.out, "{}", rule)
    }
}
