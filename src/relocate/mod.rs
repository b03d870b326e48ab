//! Post-build relocation of page files.
//!
//! The bundler emits each page at its source-mirroring location; this
//! pass moves it to the canonical output path and then deletes the
//! intermediate tree.
//!
//! ```text
//! dist/src/pages/login/index.html      -> dist/login/index.html
//! dist/src/pages/project/detail.html   -> dist/project/detail/index.html
//! dist/src/                            -> (removed)
//! ```
//!
//! Relocation runs in two parallel phases: every emitted page is read
//! first, then every final page is written. One page's output may be
//! another page's emitted file, so no write starts before all reads are
//! done. Removal of the intermediate tree waits until every page has been
//! written. Relocation is single-run: once the intermediate tree is gone
//! a second pass fails on its first read and leaves the relocated pages
//! untouched.

mod error;
mod transform;

pub use error::RelocateError;
pub use transform::HtmlTransform;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use rustc_hash::FxHashSet;

use crate::page::{PageRegistry, PageRoute};
use crate::utils::path::first_component;

/// Outcome of a relocation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelocationReport {
    /// Final page files relative to the output root, sorted.
    pub pages: Vec<String>,
    /// Intermediate directory that was removed, if it existed.
    pub removed: Option<PathBuf>,
}

/// Relocate every registered page under `out_dir`.
///
/// `page_dir` is the page directory relative to the project root; its
/// first component names the intermediate tree under `out_dir`.
pub fn relocate_pages(
    registry: &PageRegistry,
    out_dir: &Path,
    page_dir: &Path,
    transform: &HtmlTransform,
) -> Result<RelocationReport, RelocateError> {
    let pages: Vec<&PageRoute> = registry.iter().collect();

    let contents = pages
        .par_iter()
        .map(|page| read_emitted(page, out_dir))
        .collect::<Result<Vec<String>, RelocateError>>()?;

    let mut written = pages
        .par_iter()
        .zip(contents.par_iter())
        .map(|(page, content)| write_output(page, content, out_dir, transform))
        .collect::<Result<Vec<String>, RelocateError>>()?;
    written.sort();

    let removed = match first_component(page_dir) {
        Some(top) => remove_intermediate(&out_dir.join(top), &pages, out_dir)?,
        None => None,
    };

    crate::log!("mpa"; "pages: {}", written.join(", "));
    Ok(RelocationReport {
        pages: written,
        removed,
    })
}

fn read_emitted(page: &PageRoute, out_dir: &Path) -> Result<String, RelocateError> {
    let from = page.emitted_path(out_dir);
    fs::read_to_string(&from).map_err(|source| RelocateError::Read { path: from, source })
}

/// Transform and write one page. Returns its output file name.
fn write_output(
    page: &PageRoute,
    content: &str,
    out_dir: &Path,
    transform: &HtmlTransform,
) -> Result<String, RelocateError> {
    let to = page.output_path(out_dir);

    if let Some(dir) = to.parent() {
        fs::create_dir_all(dir).map_err(|source| RelocateError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    fs::write(&to, transform.apply(content)).map_err(|source| RelocateError::Write {
        path: to.clone(),
        source,
    })?;

    crate::debug!("mpa"; "{} -> {}", page.emitted_path(out_dir).display(), to.display());
    Ok(page.output_file())
}

/// Delete the intermediate tree.
///
/// When a relocated page itself lives inside that tree only the emitted
/// page files are deleted, and never one that is also some page's output.
fn remove_intermediate(
    dir: &Path,
    pages: &[&PageRoute],
    out_dir: &Path,
) -> Result<Option<PathBuf>, RelocateError> {
    let outputs: FxHashSet<PathBuf> = pages.iter().map(|page| page.output_path(out_dir)).collect();

    if outputs.iter().any(|output| output.starts_with(dir)) {
        crate::log!(
            "warning";
            "relocated pages live inside '{}', removing emitted page files only",
            dir.display()
        );
        for page in pages {
            let emitted = page.emitted_path(out_dir);
            if outputs.contains(&emitted) {
                continue;
            }
            ignore_missing(fs::remove_file(&emitted)).map_err(|source| RelocateError::Cleanup {
                path: emitted.clone(),
                source,
            })?;
        }
        return Ok(None);
    }

    match fs::remove_dir_all(dir) {
        Ok(()) => Ok(Some(dir.to_path_buf())),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(RelocateError::Cleanup {
            path: dir.to_path_buf(),
            source,
        }),
    }
}

fn ignore_missing(result: std::io::Result<()>) -> std::io::Result<()> {
    match result {
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
        other => other,
    }
}
