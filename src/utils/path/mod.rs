//! Path and URL utilities.
//!
//! Pure functions for path manipulation. No side effects.
//!
//! - [`fs`]: Filesystem path normalization (`normalize_path`, `expand_path`)
//! - [`route`]: Slash-separated helpers (`to_slash`, `with_trailing_slash`, `join_url`)

pub mod fs;
pub mod route;

pub use fs::{expand_path, first_component, normalize_path};
pub use route::{join_url, to_slash, with_trailing_slash};
