//! Path normalization utilities
//!
//! Ensures emitted paths use '/' as separator and are relative to root, and
//! resolves glob patterns against the root directory.

use std::path::Path;

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(normalize_path)
}

/// Resolve a glob pattern against a root directory
///
/// Absolute patterns pass through unchanged; relative patterns are joined
/// onto the root.
pub fn resolve_glob(root: &Path, pattern: &str) -> String {
    if Path::new(pattern).is_absolute() {
        pattern.to_string()
    } else {
        normalize_path(&root.join(pattern))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        let path = Path::new("src/main.rs");
        assert_eq!(normalize_path(path), "src/main.rs");
    }

    #[test]
    fn test_make_relative() {
        let root = Path::new("/project");
        let path = Path::new("/project/src/main.rs");
        assert_eq!(make_relative(path, root), Some("src/main.rs".to_string()));
    }

    #[test]
    fn test_make_relative_not_under_root() {
        let root = Path::new("/project");
        let path = Path::new("/other/file.rs");
        assert_eq!(make_relative(path, root), None);
    }

    #[test]
    fn test_resolve_glob_relative() {
        let root = Path::new("/project");
        assert_eq!(resolve_glob(root, "**/*.py"), "/project/**/*.py");
    }

    #[test]
    fn test_resolve_glob_absolute() {
        let root = Path::new("/project");
        assert_eq!(resolve_glob(root, "/data/*.log"), "/data/*.log");
    }
}
