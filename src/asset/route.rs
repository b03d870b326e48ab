//! Output file name templates for emitted assets.
//!
//! The bundler receives these templates and substitutes `[name]` and
//! `[ext]` itself. The same rendering is exposed here for callers that
//! need to predict where a file will land.
//!
//! ```text
//! assets_path = "./assets"
//!
//! main.js        -> assets/js/[name].js
//! inter.woff2    -> assets/fonts/[name].[ext]
//! logo.png       -> assets/images/[name].[ext]
//! intro.mp4      -> assets/media/[name].[ext]
//! app.css        -> assets/[ext]/[name].[ext]
//! data.bin       -> assets/[ext]/[name].[ext]
//! ```

use std::path::Path;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::AssetCategory;

/// Default asset directory when `assets_path` is empty.
const DEFAULT_PREFIX: &str = "assets";

/// Category-aware file naming under one asset root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetNaming {
    prefix: String,
}

impl AssetNaming {
    /// Build from the configured `assets_path` (`./assets`, `static/`, ...).
    pub fn new(assets_path: &str) -> Self {
        let trimmed = assets_path
            .trim_start_matches("./")
            .trim_start_matches('/')
            .trim_end_matches('/');
        let prefix = if trimmed.is_empty() || trimmed == "." {
            DEFAULT_PREFIX.to_string()
        } else {
            trimmed.to_string()
        };
        Self { prefix }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Template for entry scripts.
    pub fn entry_template(&self) -> String {
        format!("{}/js/[name].js", self.prefix)
    }

    /// Template for shared chunks.
    pub fn chunk_template(&self) -> String {
        format!("{}/js/[name].js", self.prefix)
    }

    /// Template for a non-script asset of the given category.
    pub fn template_for(&self, category: AssetCategory) -> String {
        let dir = match category {
            AssetCategory::Font => "fonts",
            AssetCategory::Image => "images",
            AssetCategory::Media => "media",
            AssetCategory::Script | AssetCategory::Style | AssetCategory::Other => "[ext]",
        };
        format!("{}/{dir}/[name].[ext]", self.prefix)
    }

    /// Template chosen by classifying `file_name`.
    pub fn template_for_file(&self, file_name: &str) -> String {
        self.template_for(AssetCategory::from_filename(file_name))
    }

    /// Predict the emitted path of an asset.
    pub fn output_path(&self, file_name: &str) -> String {
        let path = Path::new(file_name);
        let name = path.file_stem().and_then(|s| s.to_str()).unwrap_or(file_name);
        let ext = path.extension().and_then(|s| s.to_str()).unwrap_or_default();
        render_template(&self.template_for_file(file_name), name, ext)
    }
}

impl Default for AssetNaming {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

/// Serialized as `{ "font": "...", "image": "...", ... }` for the host.
impl Serialize for AssetNaming {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(AssetCategory::ALL.len()))?;
        for category in AssetCategory::ALL {
            map.serialize_entry(category.as_str(), &self.template_for(category))?;
        }
        map.end()
    }
}

/// Substitute `[name]` and `[ext]` placeholders.
pub fn render_template(template: &str, name: &str, ext: &str) -> String {
    template.replace("[name]", name).replace("[ext]", ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_normalization() {
        assert_eq!(AssetNaming::new("./assets").prefix(), "assets");
        assert_eq!(AssetNaming::new("static/").prefix(), "static");
        assert_eq!(AssetNaming::new("").prefix(), "assets");
        assert_eq!(AssetNaming::new("./").prefix(), "assets");
    }

    #[test]
    fn test_templates_by_category() {
        let naming = AssetNaming::new("./assets");
        assert_eq!(naming.entry_template(), "assets/js/[name].js");
        assert_eq!(naming.template_for_file("inter.woff2"), "assets/fonts/[name].[ext]");
        assert_eq!(naming.template_for_file("logo.png"), "assets/images/[name].[ext]");
        assert_eq!(naming.template_for_file("intro.mp4"), "assets/media/[name].[ext]");
        assert_eq!(naming.template_for_file("app.css"), "assets/[ext]/[name].[ext]");
        assert_eq!(naming.template_for_file("data.bin"), "assets/[ext]/[name].[ext]");
    }

    #[test]
    fn test_output_path() {
        let naming = AssetNaming::new("static");
        assert_eq!(naming.output_path("logo.png"), "static/images/logo.png");
        assert_eq!(naming.output_path("app.css"), "static/css/app.css");
        assert_eq!(naming.output_path("inter.ttf"), "static/fonts/inter.ttf");
    }

    #[test]
    fn test_serialize_as_map() {
        let json = serde_json::to_value(AssetNaming::default()).unwrap();
        assert_eq!(json["image"], "assets/images/[name].[ext]");
        assert_eq!(json["other"], "assets/[ext]/[name].[ext]");
    }
}
