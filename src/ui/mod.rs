//! Terminal output: theme, status icons and the report writer.

pub mod icons;
pub mod report;
pub mod theme;

pub use icons::StatusKind;
pub use report::{Report, Section, SectionLine};
pub use theme::DoctorTheme;
