//! History API fallback for the dev server.
//!
//! Mirrors how single-page-app fallback middleware treats a request:
//!
//! 1. only `GET`/`HEAD` requests are considered
//! 2. the `Accept` header must include an html type
//! 3. the first rewrite rule whose pattern matches the path wins
//! 4. a path whose last segment has a dot is left alone
//! 5. everything else is served the index page

use regex::Regex;
use serde::Serialize;

use super::RewriteRule;

/// Accept header values that mark a navigation request.
pub const HTML_ACCEPT_HEADERS: [&str; 2] = ["text/html", "application/xhtml+xml"];

/// Fallback target when no rule matches.
const DEFAULT_INDEX: &str = "/index.html";

#[derive(Debug, thiserror::Error)]
#[error("invalid rewrite pattern `{from}`")]
pub struct PatternError {
    pub from: String,
    #[source]
    pub source: regex::Error,
}

/// What the middleware does with a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackOutcome {
    /// Not a navigation request, or a file request; served untouched.
    Passthrough,
    /// Rewritten by a rule.
    Rewrite(String),
    /// Served the default index page.
    Index(String),
}

#[derive(Debug, Clone)]
struct CompiledRule {
    pattern: Regex,
    to: String,
}

/// Middleware options handed to the dev server, plus an in-process
/// evaluator with the same semantics.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryFallback {
    pub verbose: bool,
    pub html_accept_headers: Vec<String>,
    pub index: String,
    pub rewrites: Vec<RewriteRule>,
    #[serde(skip)]
    compiled: Vec<CompiledRule>,
}

impl HistoryFallback {
    /// Compile the ordered rule list.
    pub fn new(rewrites: Vec<RewriteRule>, verbose: bool) -> Result<Self, PatternError> {
        let compiled = rewrites
            .iter()
            .map(|rule| {
                Regex::new(&rule.from)
                    .map(|pattern| CompiledRule {
                        pattern,
                        to: rule.to.clone(),
                    })
                    .map_err(|source| PatternError {
                        from: rule.from.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            verbose,
            html_accept_headers: HTML_ACCEPT_HEADERS.iter().map(|s| s.to_string()).collect(),
            index: DEFAULT_INDEX.to_string(),
            rewrites,
            compiled,
        })
    }

    /// Decide what a request resolves to.
    ///
    /// `path` is the request path without query string.
    pub fn resolve(&self, method: &str, path: &str, accept: Option<&str>) -> FallbackOutcome {
        if !matches!(method, "GET" | "HEAD") {
            return FallbackOutcome::Passthrough;
        }

        let accepts_html = accept.is_some_and(|accept| {
            self.html_accept_headers
                .iter()
                .any(|html| accept.contains(html.as_str()))
        });
        if !accepts_html {
            return FallbackOutcome::Passthrough;
        }

        if let Some(rule) = self.compiled.iter().find(|rule| rule.pattern.is_match(path)) {
            if self.verbose {
                crate::log!("serve"; "rewriting {} to {}", path, rule.to);
            }
            return FallbackOutcome::Rewrite(rule.to.clone());
        }

        let last_segment = path.rsplit('/').next().unwrap_or_default();
        if last_segment.contains('.') {
            return FallbackOutcome::Passthrough;
        }

        if self.verbose {
            crate::log!("serve"; "rewriting {} to {}", path, self.index);
        }
        FallbackOutcome::Index(self.index.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HTML: Option<&str> = Some("text/html,application/xhtml+xml;q=0.9,*/*;q=0.8");

    fn fallback(rules: &[(&str, &str)]) -> HistoryFallback {
        let rules = rules.iter().map(|(f, t)| RewriteRule::new(*f, *t)).collect();
        HistoryFallback::new(rules, false).unwrap()
    }

    #[test]
    fn test_first_match_wins() {
        let fb = fallback(&[
            ("/a/b", "/src/pages/a/b/index.html"),
            ("/a", "/src/pages/a/index.html"),
        ]);
        assert_eq!(
            fb.resolve("GET", "/a/b", HTML),
            FallbackOutcome::Rewrite("/src/pages/a/b/index.html".into())
        );
        assert_eq!(
            fb.resolve("GET", "/a", HTML),
            FallbackOutcome::Rewrite("/src/pages/a/index.html".into())
        );
    }

    #[test]
    fn test_wrong_order_shadows_nested_page() {
        let fb = fallback(&[
            ("/a", "/src/pages/a/index.html"),
            ("/a/b", "/src/pages/a/b/index.html"),
        ]);
        assert_eq!(
            fb.resolve("GET", "/a/b", HTML),
            FallbackOutcome::Rewrite("/src/pages/a/index.html".into())
        );
    }

    #[test]
    fn test_non_navigation_passthrough() {
        let fb = fallback(&[("/login", "/src/pages/login/index.html")]);
        assert_eq!(fb.resolve("POST", "/login", HTML), FallbackOutcome::Passthrough);
        assert_eq!(
            fb.resolve("GET", "/login", Some("application/json")),
            FallbackOutcome::Passthrough
        );
        assert_eq!(fb.resolve("GET", "/login", None), FallbackOutcome::Passthrough);
    }

    #[test]
    fn test_dot_rule_and_index() {
        let fb = fallback(&[]);
        assert_eq!(fb.resolve("GET", "/app.js", HTML), FallbackOutcome::Passthrough);
        assert_eq!(
            fb.resolve("HEAD", "/some/route", HTML),
            FallbackOutcome::Index("/index.html".into())
        );
    }

    #[test]
    fn test_invalid_pattern() {
        let err = HistoryFallback::new(vec![RewriteRule::new("/(broken", "/x")], false).unwrap_err();
        assert_eq!(err.from, "/(broken");
    }

    #[test]
    fn test_serialize_options() {
        let fb = fallback(&[("/login", "/src/pages/login/index.html")]);
        let json = serde_json::to_value(&fb).unwrap();
        assert_eq!(json["html_accept_headers"][0], "text/html");
        assert_eq!(json["rewrites"][0]["from"], "/login");
        assert!(json.get("compiled").is_none());
    }
}
