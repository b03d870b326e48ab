//! Page registry: entry name → page route.
//!
//! Built once per plugin instance and shared read-only by the bundler
//! input map, the dev rewrite rules and the output relocator.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use super::{NamingMode, PageRoute, scan_pages};

/// Two pages resolved to the same entry name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub entry_name: String,
    /// Page that was overwritten.
    pub replaced: PathBuf,
    /// Page that won (registered later).
    pub kept: PathBuf,
}

#[derive(Debug, Clone, Default)]
pub struct PageRegistry {
    mode: NamingMode,
    pages: FxHashMap<String, PageRoute>,
    collisions: Vec<Collision>,
}

impl PageRegistry {
    pub fn new(mode: NamingMode) -> Self {
        Self {
            mode,
            pages: FxHashMap::default(),
            collisions: Vec::new(),
        }
    }

    /// Scan `root/page_dir` and register every page found.
    pub fn build(root: &Path, page_dir: &Path, mode: NamingMode, script_ext: &str) -> Self {
        let sources = scan_pages(root, page_dir);
        let registry = Self::from_sources(page_dir, sources, mode, script_ext);
        crate::debug!("scan"; "{} pages registered from {}", registry.len(), page_dir.display());
        registry
    }

    /// Register already discovered page files.
    ///
    /// `sources` are relative to the project root and must live under
    /// `page_dir`; anything else is skipped. Sources are sorted first so
    /// that collisions resolve the same way on every run.
    pub fn from_sources(
        page_dir: &Path,
        sources: impl IntoIterator<Item = PathBuf>,
        mode: NamingMode,
        script_ext: &str,
    ) -> Self {
        let mut sources: Vec<PathBuf> = sources.into_iter().collect();
        sources.sort();

        let mut registry = Self::new(mode);
        for source in sources {
            let Ok(relative) = source.strip_prefix(page_dir) else {
                crate::debug!("scan"; "{} is outside {}", source.display(), page_dir.display());
                continue;
            };
            let Some(name) = mode.resolve(relative) else {
                continue;
            };
            registry.insert(PageRoute::new(name, source, script_ext));
        }
        registry
    }

    /// Register a page. An existing page with the same entry name is
    /// replaced and returned; the collision is recorded and logged.
    pub fn insert(&mut self, route: PageRoute) -> Option<PageRoute> {
        let previous = self.pages.insert(route.entry_name.clone(), route);
        if let Some(prev) = &previous {
            let kept = &self.pages[&prev.entry_name];
            crate::log!(
                "warning";
                "pages '{}' and '{}' both resolve to entry '{}', keeping the latter",
                prev.source.display(),
                kept.source.display(),
                prev.entry_name
            );
            self.collisions.push(Collision {
                entry_name: prev.entry_name.clone(),
                replaced: prev.source.clone(),
                kept: kept.source.clone(),
            });
        }
        previous
    }

    pub fn mode(&self) -> NamingMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn get(&self, entry_name: &str) -> Option<&PageRoute> {
        self.pages.get(entry_name)
    }

    /// Pages in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &PageRoute> {
        self.pages.values()
    }

    pub fn entry_names(&self) -> impl Iterator<Item = &str> {
        self.pages.keys().map(String::as_str)
    }

    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }

    /// Bundler input map: entry name → page file.
    pub fn inputs(&self) -> BTreeMap<String, String> {
        self.pages
            .values()
            .map(|page| (page.entry_name.clone(), page.source_str()))
            .collect()
    }
}
