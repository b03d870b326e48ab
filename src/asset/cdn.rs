//! CDN origin lookup for emitted asset URLs.

use crate::config::CdnConfig;
use crate::utils::path::join_url;

use super::AssetCategory;

/// Ordered category → origin table with a trailing default.
///
/// Lookup walks the per-category overrides first and falls back to the
/// global default. With neither configured the asset stays local.
#[derive(Debug, Clone, Default)]
pub struct CdnTable {
    overrides: Vec<(AssetCategory, String)>,
    default: Option<String>,
}

impl CdnTable {
    pub fn from_config(config: &CdnConfig) -> Self {
        let overrides = AssetCategory::ALL
            .into_iter()
            .filter_map(|cat| {
                config
                    .override_for(cat)
                    .filter(|origin| !origin.is_empty())
                    .map(|origin| (cat, origin.to_string()))
            })
            .collect();
        let default = config.default.clone().filter(|origin| !origin.is_empty());
        Self { overrides, default }
    }

    /// Whether any origin is configured at all.
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty() && self.default.is_none()
    }

    /// Origin for a category, if any.
    pub fn origin_for(&self, category: AssetCategory) -> Option<&str> {
        self.overrides
            .iter()
            .find(|(cat, _)| *cat == category)
            .map(|(_, origin)| origin.as_str())
            .or(self.default.as_deref())
    }

    /// Final URL for an emitted file.
    ///
    /// `file` is the path relative to the output root, as the bundler
    /// reports it (`assets/images/logo.png`). Local files are returned
    /// unchanged.
    pub fn resolve(&self, file: &str) -> String {
        match self.origin_for(AssetCategory::from_filename(file)) {
            Some(origin) => join_url(origin, file),
            None => file.to_string(),
        }
    }
}
