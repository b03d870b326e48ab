//! Host bundler configuration model.
//!
//! The plugin only ever fills fields the host left unset, so every
//! field here is optional or defaults to empty. The struct serializes to
//! the camelCase JSON shape bundlers accept as a config override.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::asset::AssetNaming;
use crate::config::ServeConfig;

/// Configuration the host bundler resolves before building.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BundlerConfig {
    pub build: BuildOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerOptions>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildOptions {
    /// Output directory, always with a trailing slash once resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<String>,

    /// Entry name -> page source path.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub input: BTreeMap<String, String>,

    pub output: OutputOptions,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OutputOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_file_names: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk_file_names: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_file_names: Option<AssetFileNames>,
}

/// Asset naming: one fixed template, or one per asset category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetFileNames {
    Template(String),
    ByCategory(AssetNaming),
}

impl AssetFileNames {
    /// Output template for an emitted asset file name.
    pub fn template_for(&self, file_name: &str) -> String {
        match self {
            Self::Template(template) => template.clone(),
            Self::ByCategory(naming) => naming.template_for_file(file_name),
        }
    }
}

impl Serialize for AssetFileNames {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Template(template) => serializer.serialize_str(template),
            Self::ByCategory(naming) => naming.serialize(serializer),
        }
    }
}

// Hosts only hand us plain string templates.
impl<'de> Deserialize<'de> for AssetFileNames {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::Template)
    }
}

/// Dev server options as the host sees them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerOptions {
    pub port: u16,
    pub strict_port: bool,
    pub hmr: bool,
}

impl From<&ServeConfig> for ServerOptions {
    fn from(serve: &ServeConfig) -> Self {
        Self {
            port: serve.port,
            strict_port: serve.strict_port,
            hmr: serve.hmr,
        }
    }
}

/// Build settings the plugin needs after the config hook ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBuild {
    /// Output directory on disk.
    pub out_dir: PathBuf,
}

impl BundlerConfig {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
