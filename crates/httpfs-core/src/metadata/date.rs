//! HTTP-date parsing for `Last-Modified`.

use chrono::{DateTime, NaiveDateTime};

/// Parses an HTTP-date into a Unix timestamp (seconds).
///
/// Accepts the three forms HTTP/1.1 allows:
/// - IMF-fixdate / RFC 1123 (e.g. `Sun, 06 Nov 1994 08:49:37 GMT`)
/// - RFC 850 (e.g. `Sunday, 06-Nov-94 08:49:37 GMT`)
/// - asctime (e.g. `Sun Nov  6 08:49:37 1994`)
///
/// Returns `None` for anything else.
pub fn parse_http_date(s: &str) -> Option<i64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.timestamp());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%A, %d-%b-%y %H:%M:%S GMT") {
        return Some(dt.and_utc().timestamp());
    }
    let collapsed = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if let Ok(dt) = NaiveDateTime::parse_from_str(&collapsed, "%a %b %d %H:%M:%S %Y") {
        return Some(dt.and_utc().timestamp());
    }
    None
}
