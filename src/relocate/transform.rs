//! Content transforms applied to pages while they are relocated.

use std::fmt;
use std::sync::Arc;

type TransformFn = dyn Fn(&str) -> String + Send + Sync;

/// Caller supplied html rewrite, identity by default.
///
/// Typical use is fixing relative asset URLs that were correct for the
/// bundler's intermediate layout but not for the final one.
#[derive(Clone, Default)]
pub struct HtmlTransform {
    func: Option<Arc<TransformFn>>,
}

impl HtmlTransform {
    pub fn identity() -> Self {
        Self { func: None }
    }

    pub fn from_fn<F>(func: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self {
            func: Some(Arc::new(func)),
        }
    }

    /// Replace every occurrence of `from` with `to`.
    pub fn replace(from: impl Into<String>, to: impl Into<String>) -> Self {
        let (from, to) = (from.into(), to.into());
        Self::from_fn(move |html| html.replace(&from, &to))
    }

    /// Point `../` style asset references at `assets_path`.
    ///
    /// A page emitted at `dist/src/pages/login/index.html` references its
    /// assets as `../../../assets/...`; `depth` is the number of `../`
    /// hops (3 in that example).
    pub fn rebase_assets(depth: usize, assets_path: &str) -> Self {
        let from = format!("{}assets", "../".repeat(depth));
        Self::replace(from, assets_path.trim_end_matches('/'))
    }

    pub fn is_identity(&self) -> bool {
        self.func.is_none()
    }

    pub fn apply(&self, html: &str) -> String {
        match &self.func {
            Some(func) => func(html),
            None => html.to_string(),
        }
    }
}

impl fmt::Debug for HtmlTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_identity() { "identity" } else { "custom" };
        f.debug_tuple("HtmlTransform").field(&kind).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let t = HtmlTransform::default();
        assert!(t.is_identity());
        assert_eq!(t.apply("<p>é</p>"), "<p>é</p>");
    }

    #[test]
    fn test_rebase_assets() {
        let t = HtmlTransform::rebase_assets(3, "./assets/");
        assert_eq!(
            t.apply(r#"<script src="../../../assets/js/login.js"></script>"#),
            r#"<script src="./assets/js/login.js"></script>"#
        );
        assert!(!t.is_identity());
    }

    #[test]
    fn test_from_fn() {
        let t = HtmlTransform::from_fn(|html| html.to_uppercase());
        assert_eq!(t.apply("abc"), "ABC");
        assert_eq!(format!("{t:?}"), "HtmlTransform(\"custom\")");
    }
}
