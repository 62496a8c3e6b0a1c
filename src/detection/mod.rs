//! Project tooling detection.

pub mod build_tool;
pub mod dependencies;
pub mod file_detection;

pub use build_tool::BuildTool;
pub use dependencies::{state_management, vue_dependency};
pub use file_detection::{any_file_exists, file_exists};
