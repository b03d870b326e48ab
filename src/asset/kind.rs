//! Asset category classification.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Category of an emitted static asset.
///
/// Every filename maps to exactly one category; [`AssetCategory::Other`]
/// is the catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetCategory {
    Font,
    Image,
    Media,
    Script,
    Style,
    Other,
}

impl AssetCategory {
    pub const ALL: [Self; 6] = [
        Self::Font,
        Self::Image,
        Self::Media,
        Self::Script,
        Self::Style,
        Self::Other,
    ];

    /// Classify a filename by its extension (case-insensitive).
    ///
    /// Only the final path segment is inspected, so `a.b/c` has no extension.
    pub fn from_filename(name: &str) -> Self {
        let ext = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        Self::from_extension(ext.as_deref())
    }

    /// Classify a bare extension (without the leading dot).
    pub fn from_extension(ext: Option<&str>) -> Self {
        match ext {
            Some("ttf" | "woff" | "woff2" | "otf") => Self::Font,
            Some("svg" | "png" | "jpg" | "jpeg" | "gif" | "webp" | "ico" | "heic" | "heif") => {
                Self::Image
            }
            Some("mp3" | "mp4" | "m3u8" | "flv" | "avi" | "mov" | "wmv" | "webm") => Self::Media,
            Some("js") => Self::Script,
            Some("css") => Self::Style,
            _ => Self::Other,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Font => "font",
            Self::Image => "image",
            Self::Media => "media",
            Self::Script => "script",
            Self::Style => "style",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_each_category() {
        assert_eq!(AssetCategory::from_filename("font.woff2"), AssetCategory::Font);
        assert_eq!(AssetCategory::from_filename("icon.svg"), AssetCategory::Image);
        assert_eq!(AssetCategory::from_filename("clip.webm"), AssetCategory::Media);
        assert_eq!(AssetCategory::from_filename("bundle.js"), AssetCategory::Script);
        assert_eq!(AssetCategory::from_filename("style.css"), AssetCategory::Style);
        assert_eq!(AssetCategory::from_filename("data.bin"), AssetCategory::Other);
    }

    #[test]
    fn test_classify_case_insensitive() {
        assert_eq!(AssetCategory::from_filename("PHOTO.JPG"), AssetCategory::Image);
        assert_eq!(AssetCategory::from_filename("Intro.MP4"), AssetCategory::Media);
    }

    #[test]
    fn test_classify_without_extension() {
        assert_eq!(AssetCategory::from_filename("LICENSE"), AssetCategory::Other);
        assert_eq!(AssetCategory::from_filename(""), AssetCategory::Other);
        assert_eq!(AssetCategory::from_filename(".woff"), AssetCategory::Other);
    }

    #[test]
    fn test_classify_uses_last_segment() {
        assert_eq!(
            AssetCategory::from_filename("assets/fonts.v2/inter.ttf"),
            AssetCategory::Font
        );
        assert_eq!(AssetCategory::from_filename("dir.png/readme"), AssetCategory::Other);
    }

    #[test]
    fn test_script_only_plain_js() {
        assert_eq!(AssetCategory::from_filename("app.mjs"), AssetCategory::Other);
        assert_eq!(AssetCategory::from_filename("app.js.map"), AssetCategory::Other);
    }
}
