//! CLI argument definitions.
//!
//! The tool takes no required arguments: run it inside a Vue project.

use clap::Parser;
use std::path::PathBuf;

/// Diagnostic report for Vue.js projects.
#[derive(Debug, Parser)]
#[command(name = "vue-doctor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, env = "VUE_DOCTOR_PROJECT")]
    pub project: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// The directory to inspect: `--project`, else the current directory.
    pub fn project_root(&self) -> PathBuf {
        self.project
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_default())
    }
}
