//! Configuration sections.
//!
//! | Section   | Purpose                                   |
//! |-----------|-------------------------------------------|
//! | `[cdn]`   | Per-category asset origins                |
//! | `[serve]` | Dev server defaults (port, hmr)           |

mod cdn;
mod serve;

pub use cdn::CdnConfig;
pub use serve::ServeConfig;
