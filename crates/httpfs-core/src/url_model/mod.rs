//! Logical path → request URL.
//!
//! The transform is deliberately minimal: it restores encoded slashes and
//! escapes spaces, nothing else. The result is not validated; a malformed URL
//! surfaces as a request failure.

mod encode;
mod redact;

pub use encode::encode_path;
pub use redact::redact_url;

/// Builds the request URL for `path` under `base`.
///
/// Exactly one trailing slash is stripped from `base` and leading slashes are
/// stripped from `path`, so the two are joined by a single `/`.
///
/// # Examples
///
/// - `build_url("https://example.com/files/", "a%2Fb c.txt")` → `"https://example.com/files/a/b%20c.txt"`
pub fn build_url(base: &str, path: &str) -> String {
    let base = base.strip_suffix('/').unwrap_or(base);
    let path = encode_path(path);
    format!("{}/{}", base, path.trim_start_matches('/'))
}

/// Builds the URL used to probe `path` as a directory: always exactly one trailing `/`.
pub fn build_directory_url(base: &str, path: &str) -> String {
    let dir = format!("{}/", path.trim_end_matches('/'));
    build_url(base, &dir)
}
