//! vue-doctor CLI entry point.

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vue_doctor::checks::DiagnosticRunner;
use vue_doctor::cli::Cli;
use vue_doctor::ui::{DoctorTheme, Report};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN, keeping stdout and stderr quiet
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("vue_doctor=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vue_doctor=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let project_root = cli.project_root();
    tracing::debug!(project = %project_root.display(), "inspecting project");

    let theme = DoctorTheme::for_stdout(cli.no_color);
    let mut report = Report::new(io::stdout().lock(), theme);

    DiagnosticRunner::system()
        .run(&project_root, &mut report)
        .context("failed to write report")
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("vue-doctor starting with args: {:?}", cli);

    // Advisory tool: findings and output errors never change the exit code.
    if let Err(e) = run(&cli) {
        tracing::warn!("{:#}", e);
    }

    ExitCode::SUCCESS
}
