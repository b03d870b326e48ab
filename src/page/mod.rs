//! Page discovery and path mapping.
//!
//! ```text
//! scan_pages ──> NamingMode::resolve ──> PageRegistry
//!   (files)        (entry + output)       (entry → PageRoute)
//! ```

mod name;
mod registry;
mod route;
mod scan;

pub use name::{NamingMode, ResolvedName};
pub use registry::{Collision, PageRegistry};
pub use route::PageRoute;
pub use scan::{PAGE_EXT, scan_pages};
