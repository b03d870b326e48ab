//! URL-shaped path helpers.
//!
//! Entry names, rewrite rules and bundler inputs all use `/` separated
//! strings regardless of the host platform.

use std::path::Path;

/// Convert a relative path into a `/` separated string.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use mpa_pages::utils::path::to_slash;
/// assert_eq!(to_slash(Path::new("src/pages/login/index.html")), "src/pages/login/index.html");
/// ```
pub fn to_slash(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            std::path::Component::Normal(s) => Some(s.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Ensure a directory string ends with exactly one `/`.
///
/// # Examples
/// ```
/// use mpa_pages::utils::path::with_trailing_slash;
/// assert_eq!(with_trailing_slash("dist"), "dist/");
/// assert_eq!(with_trailing_slash("dist/"), "dist/");
/// ```
pub fn with_trailing_slash(dir: &str) -> String {
    if dir.ends_with('/') {
        dir.to_string()
    } else {
        format!("{dir}/")
    }
}

/// Join a URL origin and a relative file path with a single `/`.
///
/// # Examples
/// ```
/// use mpa_pages::utils::path::join_url;
/// assert_eq!(join_url("https://cdn.io/", "/assets/a.png"), "https://cdn.io/assets/a.png");
/// ```
pub fn join_url(origin: &str, file: &str) -> String {
    format!(
        "{}/{}",
        origin.trim_end_matches('/'),
        file.trim_start_matches("./").trim_start_matches('/')
    )
}
