//! Bundler plugin glue.
//!
//! Lifecycle, driven by the host:
//!
//! ```text
//! MpaPlugin::new      scan pages once, build the registry
//!   ├── config        fill unset build/server options, keep out_dir
//!   ├── serve         history fallback from the rewrite list
//!   └── close_bundle  relocate emitted pages, drop the intermediate tree
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::asset::{AssetNaming, CdnTable};
use crate::bundler::{AssetFileNames, BundlerConfig, ResolvedBuild, ServerOptions};
use crate::config::PluginConfig;
use crate::logger::{debug_env_enabled, set_verbose};
use crate::page::PageRegistry;
use crate::relocate::{RelocationReport, relocate_pages};
use crate::rewrite::{HistoryFallback, RewriteRule, append_rewrites};
use crate::utils::path::with_trailing_slash;

/// Output directory used when the host has none.
pub const DEFAULT_OUT_DIR: &str = "dist/";

/// The multi-page plugin.
#[derive(Debug)]
pub struct MpaPlugin {
    config: PluginConfig,
    /// Built once, shared read-only by every hook.
    registry: Arc<PageRegistry>,
    naming: AssetNaming,
    cdn: CdnTable,
}

impl MpaPlugin {
    pub const NAME: &'static str = "mpa-pages";

    pub fn new(config: PluginConfig) -> Self {
        if debug_env_enabled() {
            set_verbose(true);
        }

        let registry = PageRegistry::build(
            &config.root,
            &config.page_dir,
            config.mode,
            &config.script_ext,
        );
        crate::debug!("mpa"; "{} entries in {}", registry.len(), config.page_dir_str());

        Self {
            naming: AssetNaming::new(&config.assets_path),
            cdn: CdnTable::from_config(&config.cdn),
            registry: Arc::new(registry),
            config,
        }
    }

    /// Validate, then build.
    pub fn try_new(config: PluginConfig) -> Result<Self> {
        config.validate().context("invalid plugin configuration")?;
        Ok(Self::new(config))
    }

    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    /// Hook ordering for the host: after its own plugins.
    pub fn enforce(&self) -> &'static str {
        "post"
    }

    pub fn config_ref(&self) -> &PluginConfig {
        &self.config
    }

    pub fn registry(&self) -> Arc<PageRegistry> {
        Arc::clone(&self.registry)
    }

    /// Config hook: fill unset host options and remember the output dir.
    ///
    /// Values the host already set are never overwritten.
    pub fn config(&self, host: &mut BundlerConfig) -> ResolvedBuild {
        let build = &mut host.build;

        let out_dir = with_trailing_slash(build.out_dir.as_deref().unwrap_or(DEFAULT_OUT_DIR));
        build.out_dir = Some(out_dir.clone());

        for (name, source) in self.registry.inputs() {
            build.input.entry(name).or_insert(source);
        }

        let output = &mut build.output;
        output
            .entry_file_names
            .get_or_insert_with(|| self.naming.entry_template());
        output
            .chunk_file_names
            .get_or_insert_with(|| self.naming.chunk_template());
        output
            .asset_file_names
            .get_or_insert_with(|| AssetFileNames::ByCategory(self.naming.clone()));

        host.server
            .get_or_insert_with(|| ServerOptions::from(&self.config.serve));

        ResolvedBuild {
            out_dir: self.config.root.join(out_dir),
        }
    }

    /// Rewrite list for the dev server: caller rules, then generated ones.
    pub fn rewrites(&self) -> Vec<RewriteRule> {
        append_rewrites(self.config.rewrites.clone(), &self.registry)
    }

    /// Dev server hook. Verbose when `DEBUG` is set.
    pub fn configure_server(&self) -> Result<HistoryFallback> {
        let fallback = HistoryFallback::new(self.rewrites(), debug_env_enabled())
            .context("failed to compile rewrite rules")?;
        crate::log!("serve"; "history fallback with {} rules", fallback.rewrites.len());
        Ok(fallback)
    }

    /// Public URL of a built asset, routed through the CDN table.
    pub fn render_built_url(&self, file_name: &str) -> String {
        self.cdn.resolve(file_name)
    }

    /// Close-bundle hook: move pages into place and clean up.
    pub fn close_bundle(&self, build: &ResolvedBuild) -> Result<RelocationReport> {
        relocate_pages(
            &self.registry,
            &build.out_dir,
            &self.config.page_dir,
            &self.config.transform_html,
        )
        .with_context(|| format!("failed to relocate pages in `{}`", build.out_dir.display()))
    }

    /// Output dir the host would use for `out_dir`, without running the hook.
    pub fn out_dir_for(&self, out_dir: Option<&str>) -> PathBuf {
        self.config
            .root
            .join(with_trailing_slash(out_dir.unwrap_or(DEFAULT_OUT_DIR)))
    }
}
