//! Filesystem path helpers.
//!
//! - `normalize_path` - absolute form (canonicalize + fallback)
//! - `expand_path` - tilde expansion for user supplied directories
//! - `first_component` - top-level directory of a relative path

use std::path::{Component, Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Expand a leading `~` in a user supplied path.
pub fn expand_path(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
        None => path.to_path_buf(),
    }
}

/// First normal component of a relative path.
///
/// `src/pages` -> `src`, `./pages/` -> `pages`, `.` -> `None`
pub fn first_component(path: &Path) -> Option<&Path> {
    path.components().find_map(|c| match c {
        Component::Normal(name) => Some(Path::new(name)),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_relative() {
        let normalized = normalize_path(Path::new("relative/path/file.txt"));
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_expand_path_plain() {
        assert_eq!(expand_path(Path::new("src/pages")), PathBuf::from("src/pages"));
    }

    #[test]
    fn test_first_component() {
        assert_eq!(first_component(Path::new("src/pages")), Some(Path::new("src")));
        assert_eq!(first_component(Path::new("./pages/")), Some(Path::new("pages")));
        assert_eq!(first_component(Path::new(".")), None);
    }
}
