//! Command-line interface for vue-doctor.

pub mod args;

pub use args::Cli;
