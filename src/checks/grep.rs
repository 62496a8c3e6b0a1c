//! Building `grep` command lines and reading their output.
//!
//! Patterns are POSIX basic regular expressions with GNU `\|` alternation,
//! passed to `grep` untouched. Matching is heuristic by design: a pattern
//! sees raw text, not parsed templates.

use std::fmt;

use crate::shell::quote;

/// Scanners report at most this many matches. Extra matches are dropped
/// without a remainder count.
pub const MAX_FINDINGS: usize = 5;

/// Single-file components scanned by every source check.
pub const SOURCE_GLOB: &str = "*.vue";

/// Directory scanned, relative to the project root.
pub const SOURCE_DIR: &str = "src/";

/// A recursive `grep` over the sources, optionally piped through exclusion and limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrepQuery {
    pattern: String,
    files_only: bool,
    line_numbers: bool,
    exclude: Option<String>,
    limit: Option<usize>,
    count: bool,
}

impl GrepQuery {
    /// Search `src/**/*.vue` for `pattern`.
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            files_only: false,
            line_numbers: false,
            exclude: None,
            limit: None,
            count: false,
        }
    }

    /// Print matching file names rather than lines (`-l`).
    pub fn files_only(mut self) -> Self {
        self.files_only = true;
        self
    }

    /// Prefix matches with line numbers (`-n`).
    pub fn line_numbers(mut self) -> Self {
        self.line_numbers = true;
        self
    }

    /// Drop matched lines that also match `pattern` (`| grep -v`).
    pub fn excluding(mut self, pattern: &str) -> Self {
        self.exclude = Some(pattern.to_string());
        self
    }

    /// Keep the first `n` lines (`| head -n`).
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Count output lines (`| wc -l`).
    pub fn count(mut self) -> Self {
        self.count = true;
        self
    }

    /// Render the shell command line.
    pub fn to_command(&self) -> String {
        let mut flags = String::from("r");
        if self.line_numbers {
            flags.push('n');
        }
        if self.files_only {
            flags.push('l');
        }

        let mut cmd = format!(
            "grep -{} {} --include={} {} 2>/dev/null",
            flags,
            quote(&self.pattern),
            quote(SOURCE_GLOB),
            SOURCE_DIR
        );

        if let Some(exclude) = &self.exclude {
            cmd.push_str(&format!(" | grep -v {}", quote(exclude)));
        }
        if let Some(n) = self.limit {
            cmd.push_str(&format!(" | head -{}", n));
        }
        if self.count {
            cmd.push_str(" | wc -l");
        }

        cmd
    }
}

impl fmt::Display for GrepQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_command())
    }
}

/// One line of `grep -r` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// File the match is in, as printed by grep.
    pub path: String,
    /// Line number, when the query used `-n`.
    pub line: Option<usize>,
    /// Matched source text.
    pub text: String,
}

impl Finding {
    /// Split a `path:text` or `path:line:text` grep line.
    pub fn parse(raw: &str, numbered: bool) -> Self {
        let (path, rest) = raw.split_once(':').unwrap_or((raw, ""));

        if numbered {
            if let Some((line, text)) = rest.split_once(':') {
                if let Ok(line) = line.parse() {
                    return Self {
                        path: path.to_string(),
                        line: Some(line),
                        text: text.to_string(),
                    };
                }
            }
        }

        Self {
            path: path.to_string(),
            line: None,
            text: rest.to_string(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}:{}", self.path, line, self.text),
            None => write!(f, "{}:{}", self.path, self.text),
        }
    }
}

/// Parse up to [`MAX_FINDINGS`] non-blank lines of grep output.
pub fn findings(output: &str, numbered: bool) -> Vec<Finding> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .take(MAX_FINDINGS)
        .map(|line| Finding::parse(line, numbered))
        .collect()
}

/// Non-blank lines of `grep -l` output.
pub fn file_list(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse `wc -l` output; anything unreadable counts as zero.
pub fn parse_count(output: &str) -> usize {
    output.trim().parse().unwrap_or(0)
}
