//! Page scanning (read-only, no side effects besides logging).

use std::path::{Path, PathBuf};

use jwalk::WalkDir;

/// Extension of page definition files.
pub const PAGE_EXT: &str = "html";

/// Find every page file under `root/page_dir`.
///
/// Returned paths are relative to `root`. Hidden files and directories are
/// skipped. Enumeration order is unspecified.
///
/// A missing page directory yields an empty list; the build then simply
/// has no entries.
///
/// ```text
/// src/pages/
/// ├── login/index.html      -> src/pages/login/index.html
/// ├── project/
/// │   ├── index.html        -> src/pages/project/index.html
/// │   ├── detail.html       -> src/pages/project/detail.html
/// │   └── detail.js         -> (skipped)
/// └── .draft/x.html         -> (skipped, hidden)
/// ```
pub fn scan_pages(root: &Path, page_dir: &Path) -> Vec<PathBuf> {
    let dir = root.join(page_dir);
    if !dir.is_dir() {
        crate::log!("warning"; "page directory '{}' not found, no pages will be built", dir.display());
        return vec![];
    }

    WalkDir::new(&dir)
        .skip_hidden(true)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                crate::debug!("scan"; "skipping unreadable entry: {}", err);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == PAGE_EXT))
        .map(|path| {
            path.strip_prefix(root)
                .map(Path::to_path_buf)
                .unwrap_or(path)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "<html></html>").unwrap();
    }

    #[test]
    fn test_scan_missing_dir() {
        let dir = TempDir::new().unwrap();
        assert!(scan_pages(dir.path(), Path::new("src/pages")).is_empty());
    }

    #[test]
    fn test_scan_finds_html_recursively() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "src/pages/login/index.html");
        touch(dir.path(), "src/pages/project/index.html");
        touch(dir.path(), "src/pages/project/detail.html");
        touch(dir.path(), "src/pages/project/detail.js");
        touch(dir.path(), "src/other/ignored.html");

        let mut pages = scan_pages(dir.path(), Path::new("src/pages"));
        pages.sort();

        assert_eq!(
            pages,
            vec![
                PathBuf::from("src/pages/login/index.html"),
                PathBuf::from("src/pages/project/detail.html"),
                PathBuf::from("src/pages/project/index.html"),
            ]
        );
    }

    #[test]
    fn test_scan_skips_hidden() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "pages/index.html");
        touch(dir.path(), "pages/.draft/index.html");
        touch(dir.path(), "pages/.hidden.html");

        let pages = scan_pages(dir.path(), Path::new("pages"));
        assert_eq!(pages, vec![PathBuf::from("pages/index.html")]);
    }

    #[test]
    fn test_scan_ignores_directories_named_html() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("pages/fake.html")).unwrap();
        touch(dir.path(), "pages/fake.html/index.html");

        let pages = scan_pages(dir.path(), Path::new("pages"));
        assert_eq!(pages, vec![PathBuf::from("pages/fake.html/index.html")]);
    }
}
