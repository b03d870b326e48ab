//! `[cdn]` section configuration.
//!
//! Per-category origins prefixed onto emitted asset URLs, with a global
//! fallback.
//!
//! # Example
//!
//! ```toml
//! [cdn]
//! default = "https://cdn.example.com"   # any category without an override
//! image = "https://img.example.com"     # font | image | media | script | style | other
//! ```

use serde::{Deserialize, Serialize};

use crate::asset::AssetCategory;
use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CdnConfig {
    /// Origin used when a category has no override.
    pub default: Option<String>,
    pub font: Option<String>,
    pub image: Option<String>,
    pub media: Option<String>,
    pub script: Option<String>,
    pub style: Option<String>,
    pub other: Option<String>,
}

impl CdnConfig {
    /// Per-category override only (no default fallback).
    pub fn override_for(&self, category: AssetCategory) -> Option<&str> {
        match category {
            AssetCategory::Font => self.font.as_deref(),
            AssetCategory::Image => self.image.as_deref(),
            AssetCategory::Media => self.media.as_deref(),
            AssetCategory::Script => self.script.as_deref(),
            AssetCategory::Style => self.style.as_deref(),
            AssetCategory::Other => self.other.as_deref(),
        }
    }

    fn field(category: Option<AssetCategory>) -> FieldPath {
        match category {
            None => FieldPath::new("cdn.default"),
            Some(AssetCategory::Font) => FieldPath::new("cdn.font"),
            Some(AssetCategory::Image) => FieldPath::new("cdn.image"),
            Some(AssetCategory::Media) => FieldPath::new("cdn.media"),
            Some(AssetCategory::Script) => FieldPath::new("cdn.script"),
            Some(AssetCategory::Style) => FieldPath::new("cdn.style"),
            Some(AssetCategory::Other) => FieldPath::new("cdn.other"),
        }
    }

    /// Every configured origin must be an absolute URL.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let entries = std::iter::once((None, self.default.as_deref())).chain(
            AssetCategory::ALL
                .into_iter()
                .map(|cat| (Some(cat), self.override_for(cat))),
        );

        for (category, origin) in entries {
            let Some(origin) = origin.filter(|o| !o.is_empty()) else {
                continue;
            };
            if let Err(err) = url::Url::parse(origin) {
                diag.error_with_hint(
                    Self::field(category),
                    format!("invalid origin '{origin}': {err}"),
                    "use an absolute URL such as https://cdn.example.com",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cdn_config_parse() {
        let config: CdnConfig = toml::from_str(
            r#"
default = "https://cdn.example.com"
font = "https://fonts.example.com"
"#,
        )
        .unwrap();
        assert_eq!(config.default.as_deref(), Some("https://cdn.example.com"));
        assert_eq!(
            config.override_for(AssetCategory::Font),
            Some("https://fonts.example.com")
        );
        assert_eq!(config.override_for(AssetCategory::Image), None);
    }

    #[test]
    fn test_cdn_config_validate() {
        let config = CdnConfig {
            default: Some("https://cdn.example.com".into()),
            image: Some("not a url".into()),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "cdn.image");
    }
}
