//! Page route - source to output path mapping.

use std::path::{Path, PathBuf};

use crate::utils::path::to_slash;

use super::ResolvedName;

/// Source -> output path mapping for one page.
///
/// # Example
///
/// ```text
/// Source: src/pages/project/detail.html   (nested mode)
///
/// PageRoute {
///     entry_name: project/detail/index
///     source:     src/pages/project/detail.html
///     script:     src/pages/project/detail.js
///     output:     project/detail/index
/// }
///
/// bundler writes    dist/src/pages/project/detail.html
/// relocated to      dist/project/detail/index.html
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRoute {
    /// Bundler input key.
    pub entry_name: String,
    /// Page file relative to the project root.
    pub source: PathBuf,
    /// Paired script, same stem as the page. Never checked for existence.
    pub script: PathBuf,
    /// Final location relative to the output root, without extension.
    pub output: String,
}

impl PageRoute {
    pub fn new(name: ResolvedName, source: PathBuf, script_ext: &str) -> Self {
        let script = source.with_extension(script_ext);
        Self {
            entry_name: name.entry_name,
            source,
            script,
            output: name.output,
        }
    }

    /// Source as a `/` separated string (bundler input and dev URL).
    pub fn source_str(&self) -> String {
        to_slash(&self.source)
    }

    /// Final file name relative to the output root.
    pub fn output_file(&self) -> String {
        format!("{}.html", self.output)
    }

    /// Where the bundler emits the page before relocation.
    pub fn emitted_path(&self, out_dir: &Path) -> PathBuf {
        out_dir.join(&self.source)
    }

    /// Where the page ends up after relocation.
    pub fn output_path(&self, out_dir: &Path) -> PathBuf {
        out_dir.join(self.output_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::NamingMode;

    fn route(mode: NamingMode, source: &str) -> PageRoute {
        let rel = Path::new(source).strip_prefix("src/pages").unwrap();
        PageRoute::new(mode.resolve(rel).unwrap(), source.into(), "js")
    }

    #[test]
    fn test_route_paths_nested() {
        let page = route(NamingMode::Nested, "src/pages/project/detail.html");
        assert_eq!(page.entry_name, "project/detail/index");
        assert_eq!(page.script, PathBuf::from("src/pages/project/detail.js"));
        assert_eq!(page.source_str(), "src/pages/project/detail.html");
        assert_eq!(
            page.emitted_path(Path::new("dist")),
            PathBuf::from("dist/src/pages/project/detail.html")
        );
        assert_eq!(
            page.output_path(Path::new("dist")),
            PathBuf::from("dist/project/detail/index.html")
        );
    }

    #[test]
    fn test_route_paths_flat() {
        let page = route(NamingMode::Flat, "src/pages/login/index.html");
        assert_eq!(page.output_file(), "login.html");
        assert_eq!(page.script, PathBuf::from("src/pages/login/index.js"));
    }

    #[test]
    fn test_route_custom_script_ext() {
        let page = PageRoute::new(
            NamingMode::Nested.resolve(Path::new("home/index.html")).unwrap(),
            "pages/home/index.html".into(),
            "ts",
        );
        assert_eq!(page.script, PathBuf::from("pages/home/index.ts"));
    }
}
