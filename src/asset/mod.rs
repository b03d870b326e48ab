//! Asset classification, output naming and CDN URLs.

mod cdn;
mod kind;
mod route;

pub use cdn::CdnTable;
pub use kind::AssetCategory;
pub use route::{AssetNaming, render_template};
