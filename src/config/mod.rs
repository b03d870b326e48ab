//! Plugin configuration, loaded from `mpa.toml` or built in code.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [cdn], [serve]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # config file discovery
//! └── mod.rs         # PluginConfig (this file)
//! ```
//!
//! # Example
//!
//! ```toml
//! page_dir = "src/pages"        # scanned recursively for *.html
//! assets_path = "./assets"      # output sub-root for static assets
//! mode = "nested"               # nested | flat
//! script_ext = "js"             # paired script extension
//!
//! [cdn]
//! default = "https://cdn.example.com"
//!
//! [serve]
//! port = 8080
//!
//! [[rewrites]]
//! from = "/legacy"
//! to = "/src/pages/home/index.html"
//! ```

pub mod section;
pub mod types;
mod util;

pub use section::{CdnConfig, ServeConfig};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
pub use util::find_config_file;

use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::page::NamingMode;
use crate::relocate::HtmlTransform;
use crate::rewrite::RewriteRule;
use crate::utils::path::{expand_path, normalize_path, to_slash, with_trailing_slash};

/// Default config file name.
pub const CONFIG_FILE: &str = "mpa.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration of the plugin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    /// Config file the values came from (empty when built in code)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root; page and output paths are relative to it
    #[serde(skip)]
    pub root: PathBuf,

    /// Directory scanned for page files.
    pub page_dir: PathBuf,

    /// Output sub-root for emitted assets, relative to the output dir.
    pub assets_path: String,

    /// Entry naming policy.
    pub mode: NamingMode,

    /// Extension of the script paired with every page.
    pub script_ext: String,

    /// Asset CDN origins.
    pub cdn: CdnConfig,

    /// Dev server defaults.
    pub serve: ServeConfig,

    /// Caller rewrite rules, tried before generated ones.
    pub rewrites: Vec<RewriteRule>,

    /// Html rewrite applied during relocation.
    #[serde(skip)]
    pub transform_html: HtmlTransform,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            page_dir: "src/pages".into(),
            assets_path: "./assets".into(),
            mode: NamingMode::default(),
            script_ext: "js".into(),
            cdn: CdnConfig::default(),
            serve: ServeConfig::default(),
            rewrites: Vec::new(),
            transform_html: HtmlTransform::identity(),
        }
    }
}

impl PluginConfig {
    /// Search upward from `start` for `mpa.toml` and load it.
    ///
    /// Falls back to defaults rooted at `start` when no file exists.
    pub fn discover(start: &Path) -> Result<Self, ConfigError> {
        match find_config_file(start, Path::new(CONFIG_FILE)) {
            Some(path) => Self::from_path(&path),
            None => {
                crate::debug!("config"; "no {} found, using defaults", CONFIG_FILE);
                let mut config = Self::default();
                config.finalize(start);
                Ok(config)
            }
        }
    }

    /// Parse configuration from a TOML string.
    ///
    /// Paths stay relative to the current directory.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let (mut config, ignored) = Self::parse_with_ignored(content)?;
        Self::print_unknown_fields_warning(&ignored, "<inline>");
        config.finalize(Path::new(""));
        Ok(config)
    }

    /// Load configuration from a file; its directory becomes the root.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;
        let display = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        Self::print_unknown_fields_warning(&ignored, &display);

        config.config_path = normalize_path(path);
        let root = config
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        config.finalize(&root);
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], source: &str) {
        if fields.is_empty() {
            return;
        }
        crate::log!("warning"; "unknown fields in {}, ignoring: {}", source, fields.join(", "));
    }

    /// Set the root and normalize `page_dir`.
    fn finalize(&mut self, root: &Path) {
        self.root = root.to_path_buf();
        self.page_dir = Self::clean_relative(&expand_path(&self.page_dir));
    }

    /// Drop `.` components so the path can be used as a strip prefix.
    fn clean_relative(path: &Path) -> PathBuf {
        path.components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect()
    }

    // ========================================================================
    // builder helpers
    // ========================================================================

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn with_page_dir(mut self, page_dir: impl Into<PathBuf>) -> Self {
        self.page_dir = Self::clean_relative(&expand_path(&page_dir.into()));
        self
    }

    pub fn with_mode(mut self, mode: NamingMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_cdn(mut self, cdn: CdnConfig) -> Self {
        self.cdn = cdn;
        self
    }

    pub fn with_rewrites(mut self, rewrites: Vec<RewriteRule>) -> Self {
        self.rewrites = rewrites;
        self
    }

    pub fn with_transform(mut self, transform: HtmlTransform) -> Self {
        self.transform_html = transform;
        self
    }

    // ========================================================================
    // accessors
    // ========================================================================

    /// Page directory with a trailing slash (`src/pages/`).
    pub fn page_dir_str(&self) -> String {
        with_trailing_slash(&to_slash(&self.page_dir))
    }

    /// Absolute (or root-joined) page directory.
    pub fn page_dir_path(&self) -> PathBuf {
        self.root.join(&self.page_dir)
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the configuration, collecting every problem at once.
    ///
    /// A missing page directory is only a warning: the build then has no
    /// entries.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        self.validate_page_dir(&mut diag);
        self.validate_rewrites(&mut diag);
        self.cdn.validate(&mut diag);

        if self.script_ext.trim_start_matches('.').is_empty() {
            diag.error(FieldPath::new("script_ext"), "script extension must not be empty");
        }

        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    fn validate_page_dir(&self, diag: &mut ConfigDiagnostics) {
        let field = FieldPath::new("page_dir");

        for comp in self.page_dir.components() {
            let reason = match comp {
                Component::ParentDir => Some("parent directory '..' not allowed"),
                Component::Prefix(_) | Component::RootDir => Some("absolute paths not allowed"),
                _ => None,
            };
            if let Some(reason) = reason {
                diag.error_with_hint(
                    field,
                    format!("path '{}': {reason}", self.page_dir.display()),
                    "use a directory relative to the project root, e.g. \"src/pages\"",
                );
                return;
            }
        }

        if self.page_dir.as_os_str().is_empty() {
            diag.error(field, "page directory must not be empty");
        } else if !self.page_dir_path().is_dir() {
            diag.warn(
                field,
                format!("'{}' does not exist, no pages will be built", self.page_dir.display()),
            );
        }
    }

    fn validate_rewrites(&self, diag: &mut ConfigDiagnostics) {
        for (i, rule) in self.rewrites.iter().enumerate() {
            if let Err(err) = regex::Regex::new(&rule.from) {
                diag.error(
                    FieldPath::new("rewrites"),
                    format!("[{i}] invalid pattern '{}': {err}", rule.from),
                );
            }
        }
    }
}

// ============================================================================
// Test Helpers
// ============================================================================

/// Parse config, panicking on unknown fields to catch typos in tests.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> PluginConfig {
    let (mut parsed, ignored) = PluginConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed.finalize(Path::new(""));
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.page_dir, PathBuf::from("src/pages"));
        assert_eq!(config.page_dir_str(), "src/pages/");
        assert_eq!(config.assets_path, "./assets");
        assert_eq!(config.mode, NamingMode::Nested);
        assert_eq!(config.script_ext, "js");
        assert!(config.rewrites.is_empty());
        assert!(config.transform_html.is_identity());
    }

    #[test]
    fn test_full_config() {
        let config = test_parse_config(
            r#"
page_dir = "./web/pages/"
assets_path = "static"
mode = "flat"
script_ext = "ts"

[cdn]
default = "https://cdn.example.com"

[[rewrites]]
from = "/legacy"
to = "/web/pages/home/index.html"
"#,
        );
        assert_eq!(config.page_dir, PathBuf::from("web/pages"));
        assert_eq!(config.page_dir_str(), "web/pages/");
        assert_eq!(config.mode, NamingMode::Flat);
        assert_eq!(config.script_ext, "ts");
        assert_eq!(config.cdn.default.as_deref(), Some("https://cdn.example.com"));
        assert_eq!(config.rewrites, vec![RewriteRule::new("/legacy", "/web/pages/home/index.html")]);
    }

    #[test]
    fn test_unknown_fields_are_reported() {
        let (_, ignored) = PluginConfig::parse_with_ignored("pagedir = \"x\"\n[cdn]\nfonts = \"y\"").unwrap();
        assert_eq!(ignored, vec!["pagedir".to_string(), "cdn.fonts".to_string()]);
    }

    #[test]
    fn test_from_path_sets_root() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "page_dir = \"pages\"").unwrap();

        let config = PluginConfig::from_path(&path).unwrap();
        assert_eq!(config.root, normalize_path(dir.path()));
        assert_eq!(config.page_dir_path(), normalize_path(dir.path()).join("pages"));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = PluginConfig::from_path(Path::new("/definitely/missing/mpa.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(..)));
    }

    #[test]
    fn test_discover_without_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = PluginConfig::discover(dir.path()).unwrap();
        assert_eq!(config.root, dir.path());
        assert_eq!(config.page_dir, PathBuf::from("src/pages"));
    }

    #[test]
    fn test_validate_rejects_unsafe_page_dir() {
        let config = PluginConfig::default().with_page_dir("../outside");
        let Err(ConfigError::Diagnostics(diag)) = config.validate() else {
            panic!("expected diagnostics");
        };
        assert_eq!(diag.errors()[0].field.as_str(), "page_dir");
    }

    #[test]
    fn test_validate_missing_page_dir_is_warning() {
        let dir = TempDir::new().unwrap();
        let config = PluginConfig::default().with_root(dir.path());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src/pages")).unwrap();
        let mut config = PluginConfig::default()
            .with_root(dir.path())
            .with_rewrites(vec![RewriteRule::new("/(bad", "/x")])
            .with_cdn(CdnConfig {
                image: Some("nope".into()),
                ..Default::default()
            });
        config.script_ext = String::new();

        let Err(ConfigError::Diagnostics(diag)) = config.validate() else {
            panic!("expected diagnostics");
        };
        assert_eq!(diag.len(), 3);
    }
}
