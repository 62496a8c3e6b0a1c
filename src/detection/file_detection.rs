//! File-based detection.

use std::path::Path;

/// Check if a file exists relative to project root.
pub fn file_exists(project_root: &Path, file: &str) -> bool {
    project_root.join(file).exists()
}

/// Return the first of `files` that exists, in the order given.
pub fn any_file_exists(project_root: &Path, files: &[&str]) -> Option<String> {
    files
        .iter()
        .find(|f| file_exists(project_root, f))
        .map(|f| f.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn file_exists_helper() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("vue.config.js"), "").unwrap();

        assert!(file_exists(temp.path(), "vue.config.js"));
        assert!(!file_exists(temp.path(), "vite.config.js"));
    }

    #[test]
    fn any_file_exists_returns_first_in_list_order() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("nuxt.config.js"), "").unwrap();
        fs::write(temp.path().join("nuxt.config.ts"), "").unwrap();

        let found = any_file_exists(temp.path(), &["nuxt.config.ts", "nuxt.config.js"]);
        assert_eq!(found, Some("nuxt.config.ts".to_string()));
    }

    #[test]
    fn any_file_exists_none() {
        let temp = TempDir::new().unwrap();
        assert!(any_file_exists(temp.path(), &["vite.config.ts"]).is_none());
    }
}
