//! Entry name resolution.
//!
//! Turns a page path (relative to the page directory) into the entry name
//! used as the bundler input key and the output path the page finally
//! lands at.
//!
//! ```text
//!                           nested                          flat
//! index.html                index        -> index           index           -> index
//! login/index.html          login        -> login/index     login           -> login
//! project/detail.html       project/detail/index            project_detail  -> project_detail
//!                                        -> project/detail/index
//! index/index.html          index        -> index/index     index           -> index
//! ```

use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

const INDEX: &str = "index";

/// Naming policy for entries and outputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamingMode {
    /// Every page becomes `<dir>/index.html`, giving extension-less URLs.
    #[default]
    #[serde(alias = "index", alias = "path")]
    Nested,
    /// Every page becomes a single `<a>_<b>.html` file at the output root.
    #[serde(alias = "html")]
    Flat,
}

/// Entry name and output location of one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedName {
    /// Bundler input key, unique per page.
    pub entry_name: String,
    /// Output path relative to the output root, without `.html`.
    pub output: String,
}

impl NamingMode {
    /// Resolve a page path relative to the page directory.
    ///
    /// Returns `None` for paths without any normal component, and for
    /// paths that are not valid UTF-8 (skipped with a warning).
    pub fn resolve(self, relative: &Path) -> Option<ResolvedName> {
        let stem = relative.with_extension("");
        let mut segments: Vec<&str> = Vec::new();
        for component in stem.components() {
            let Component::Normal(segment) = component else {
                continue;
            };
            let Some(segment) = segment.to_str() else {
                crate::log!("warning"; "skipping page with non UTF-8 path: {}", relative.display());
                return None;
            };
            segments.push(segment);
        }

        if segments.is_empty() {
            return None;
        }
        Some(self.resolve_segments(&segments))
    }

    /// Resolve pre-split path segments (extension already stripped).
    pub fn resolve_segments(self, segments: &[&str]) -> ResolvedName {
        match self {
            Self::Nested => resolve_nested(segments),
            Self::Flat => resolve_flat(segments),
        }
    }

    /// Extension-less URL path for an entry, if the mode produces one.
    ///
    /// `project/detail/index` -> `project/detail`, `login` -> `login`.
    /// The root page has no separate clean form.
    pub fn clean_url(self, entry_name: &str) -> Option<&str> {
        match self {
            Self::Flat => None,
            Self::Nested if entry_name == INDEX => None,
            Self::Nested => Some(entry_name.strip_suffix("/index").unwrap_or(entry_name)),
        }
    }
}

fn resolve_nested(segments: &[&str]) -> ResolvedName {
    let is_index = segments.last() == Some(&INDEX);

    let mut output: Vec<&str> = segments.to_vec();
    if !is_index {
        output.push(INDEX);
    }

    let entry_name = if is_index {
        let dirs = &segments[..segments.len() - 1];
        if dirs.is_empty() {
            INDEX.to_string()
        } else {
            dirs.join("/")
        }
    } else {
        output.join("/")
    };

    ResolvedName {
        entry_name,
        output: output.join("/"),
    }
}

fn resolve_flat(segments: &[&str]) -> ResolvedName {
    let trimmed = match segments.split_last() {
        Some((&INDEX, rest)) => rest,
        _ => segments,
    };

    let entry_name = if trimmed.is_empty() {
        INDEX.to_string()
    } else {
        trimmed.join("_")
    };

    // `index/index.html` collapses to a single root `index.html`
    let output = if segments == [INDEX, INDEX] {
        INDEX.to_string()
    } else {
        entry_name.clone()
    };

    ResolvedName { entry_name, output }
}
