//! Build tool detection from config files in the project root.

use std::fmt;
use std::path::Path;

use super::file_detection::any_file_exists;

/// A Vue build tool recognised by its config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildTool {
    Nuxt,
    Vite,
    VueCli,
}

impl BuildTool {
    /// Detection order. Nuxt wraps Vite, so it must be checked first.
    pub const PRIORITY: [BuildTool; 3] = [BuildTool::Nuxt, BuildTool::Vite, BuildTool::VueCli];

    /// Config files that identify this tool.
    pub fn config_files(self) -> &'static [&'static str] {
        match self {
            Self::Nuxt => &["nuxt.config.js", "nuxt.config.ts"],
            Self::Vite => &["vite.config.js", "vite.config.ts"],
            Self::VueCli => &["vue.config.js"],
        }
    }

    /// Display name used in the report.
    pub fn label(self) -> &'static str {
        match self {
            Self::Nuxt => "Nuxt.js",
            Self::Vite => "Vite",
            Self::VueCli => "Vue CLI",
        }
    }

    /// First tool in [`BuildTool::PRIORITY`] whose config file exists.
    pub fn detect(project_root: &Path) -> Option<BuildTool> {
        Self::PRIORITY.into_iter().find(|tool| {
            let found = any_file_exists(project_root, tool.config_files());
            if let Some(ref file) = found {
                tracing::debug!(tool = tool.label(), file = %file, "build tool config found");
            }
            found.is_some()
        })
    }
}

impl fmt::Display for BuildTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn detects_nothing_in_empty_project() {
        let temp = TempDir::new().unwrap();
        assert_eq!(BuildTool::detect(temp.path()), None);
    }

    #[test]
    fn detects_each_config_file() {
        let cases = [
            ("nuxt.config.js", BuildTool::Nuxt),
            ("nuxt.config.ts", BuildTool::Nuxt),
            ("vite.config.js", BuildTool::Vite),
            ("vite.config.ts", BuildTool::Vite),
            ("vue.config.js", BuildTool::VueCli),
        ];

        for (file, expected) in cases {
            let temp = TempDir::new().unwrap();
            fs::write(temp.path().join(file), "").unwrap();
            assert_eq!(BuildTool::detect(temp.path()), Some(expected), "{file}");
        }
    }

    #[test]
    fn nuxt_wins_over_vite() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("vite.config.ts"), "").unwrap();
        fs::write(temp.path().join("nuxt.config.ts"), "").unwrap();

        assert_eq!(BuildTool::detect(temp.path()), Some(BuildTool::Nuxt));
    }

    #[test]
    fn vite_wins_over_vue_cli() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("vue.config.js"), "").unwrap();
        fs::write(temp.path().join("vite.config.js"), "").unwrap();

        assert_eq!(BuildTool::detect(temp.path()), Some(BuildTool::Vite));
    }

    #[test]
    fn vue_config_ts_is_not_recognised() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("vue.config.ts"), "").unwrap();

        assert_eq!(BuildTool::detect(temp.path()), None);
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(BuildTool::VueCli.to_string(), "Vue CLI");
    }
}
