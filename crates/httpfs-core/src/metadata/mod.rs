//! Response headers → file metadata.
//!
//! Absent or malformed headers yield absent fields. Nothing is defaulted to
//! zero or an empty string, and nothing here fails.

mod date;

pub use date::parse_http_date;

use crate::fetch_head::ResponseHeaders;
use crate::visibility::Visibility;
use serde::Serialize;

/// Read-only projection of a probed resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileMetadata {
    pub path: String,
    /// Size in bytes from `Content-Length`.
    pub size: Option<u64>,
    pub visibility: Visibility,
    /// Unix timestamp from `Last-Modified`.
    pub last_modified: Option<i64>,
    /// MIME type from `Content-Type`, parameters stripped.
    pub mime_type: Option<String>,
}

impl FileMetadata {
    /// Record carrying only path and visibility.
    pub fn visibility_only(path: &str, visibility: Visibility) -> Self {
        Self {
            path: path.to_string(),
            size: None,
            visibility,
            last_modified: None,
            mime_type: None,
        }
    }
}

/// Decodes probed headers for `path`. Visibility is the adapter's, never taken from headers.
pub fn decode(path: &str, headers: &ResponseHeaders, visibility: Visibility) -> FileMetadata {
    FileMetadata {
        path: path.to_string(),
        size: headers.get("content-length").and_then(parse_content_length),
        visibility,
        last_modified: headers.get("last-modified").and_then(parse_http_date),
        mime_type: headers.get("content-type").and_then(parse_mime_type),
    }
}

/// Digits only; anything else (signs, spaces inside, overflow) is absent.
fn parse_content_length(value: &str) -> Option<u64> {
    let value = value.trim();
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

/// `text/html; charset=utf-8` → `text/html`.
fn parse_mime_type(value: &str) -> Option<String> {
    let essence = value.split(';').next().unwrap_or("").trim();
    if essence.is_empty() {
        None
    } else {
        Some(essence.to_string())
    }
}
