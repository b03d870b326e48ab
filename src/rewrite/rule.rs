//! Dev server rewrite rules derived from the page registry.
//!
//! During development the bundler serves pages from their source location
//! (`/src/pages/login/index.html`) while production serves them from the
//! relocated one (`/login/index.html`, reachable as `/login`). The rules
//! generated here let the browser use production-shaped URLs in dev.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::page::PageRegistry;

/// One `{from, to}` pair for the history-fallback middleware.
///
/// `from` is a pattern matched anywhere in the request path, the way the
/// middleware treats string patterns; `to` replaces the whole path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteRule {
    pub from: String,
    pub to: String,
}

impl RewriteRule {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Order rule patterns so that no pattern is shadowed by a shorter one.
///
/// A pattern that extends another sorts first, then longer patterns
/// first, then lexicographic.
pub fn compare_entries(a: &str, b: &str) -> Ordering {
    if a == b {
        Ordering::Equal
    } else if a.starts_with(b) {
        Ordering::Less
    } else if b.starts_with(a) {
        Ordering::Greater
    } else {
        b.len().cmp(&a.len()).then_with(|| a.cmp(b))
    }
}

/// Append generated rules to `rewrites` and return them.
///
/// Caller supplied rules keep their position in front, so they are tried
/// first. Each page contributes `/{entry}.html`, plus the extension-less
/// `/{dir}` form in nested mode. Generated rules are ordered by pattern
/// as a whole, so a page's short extension-less rule never precedes a
/// sibling's longer one.
///
/// ```text
/// entries: login, project, project/detail/index
///
/// /project/detail/index.html -> /src/pages/project/detail.html
/// /project/detail            -> /src/pages/project/detail.html
/// /project.html              -> /src/pages/project/index.html
/// /login.html                -> /src/pages/login/index.html
/// /project                   -> /src/pages/project/index.html
/// /login                     -> /src/pages/login/index.html
/// ```
pub fn append_rewrites(mut rewrites: Vec<RewriteRule>, registry: &PageRegistry) -> Vec<RewriteRule> {
    let mode = registry.mode();
    let mut generated = Vec::with_capacity(registry.len() * 2);

    for page in registry.iter() {
        let name = page.entry_name.as_str();
        let to = format!("/{}", page.source_str());

        generated.push(RewriteRule::new(format!("/{name}.html"), to.clone()));
        if let Some(clean) = mode.clean_url(name) {
            generated.push(RewriteRule::new(format!("/{clean}"), to));
        }
    }

    generated.sort_by(|a, b| compare_entries(&a.from, &b.from));
    rewrites.extend(generated);
    rewrites
}
