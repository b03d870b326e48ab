//! mpa-pages - multi-page application support for a bundler.
//!
//! Every `*.html` under the page directory becomes one bundler entry:
//!
//! ```text
//! src/pages/login/index.html      entry `login`                -> dist/login/index.html
//! src/pages/project/detail.html   entry `project/detail/index` -> dist/project/detail/index.html
//! ```
//!
//! The [`MpaPlugin`] wires four pieces into the host lifecycle:
//!
//! - [`page`] - scan the page directory and name entries
//! - [`rewrite`] - dev server history fallback rules
//! - [`relocate`] - move emitted pages to their final location
//! - [`asset`] - asset output naming and CDN routing
//!
//! ```no_run
//! use mpa_pages::{BundlerConfig, MpaPlugin, PluginConfig};
//!
//! # fn main() -> anyhow::Result<()> {
//! let plugin = MpaPlugin::try_new(PluginConfig::discover(std::path::Path::new("."))?)?;
//!
//! let mut host = BundlerConfig::default();
//! let build = plugin.config(&mut host);
//! // ... host runs the build ...
//! plugin.close_bundle(&build)?;
//! # Ok(())
//! # }
//! ```

pub mod asset;
pub mod bundler;
pub mod config;
pub mod logger;
pub mod page;
pub mod plugin;
pub mod relocate;
pub mod rewrite;
pub mod utils;

pub use bundler::{BundlerConfig, ResolvedBuild};
pub use config::PluginConfig;
pub use page::{NamingMode, PageRegistry, PageRoute};
pub use plugin::MpaPlugin;
pub use relocate::{HtmlTransform, RelocateError, RelocationReport};
pub use rewrite::{HistoryFallback, RewriteRule};
