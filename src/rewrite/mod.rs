//! Dev server URL rewriting.

mod fallback;
mod rule;

pub use fallback::{FallbackOutcome, HTML_ACCEPT_HEADERS, HistoryFallback, PatternError};
pub use rule::{RewriteRule, append_rewrites, compare_entries};
