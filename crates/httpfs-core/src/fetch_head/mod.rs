//! HTTP HEAD / metadata probing.
//!
//! Uses the curl crate (libcurl) to fetch the response header block of a
//! resource. Origins that reject HEAD are probed with a GET that is cut off
//! at the first body byte, so only headers travel.

mod parse;
mod status;

pub use parse::{parse_status_code, ResponseHeaders};
pub use status::StatusPolicy;

use crate::config::RequestContext;
use crate::control::AbortToken;
use crate::transfer::{configure_easy, transport_message, Deadline};
use crate::url_model::redact_url;
use std::fmt;
use std::str;

/// Why a probe produced no headers.
#[derive(Debug)]
pub enum ProbeError {
    /// Curl reported an error (DNS, connect, TLS, timeout, ...).
    Transport(curl::Error),
    /// A response arrived but its status is not in the accepted set.
    Status(u32),
    /// The transfer completed without a parseable status line.
    NoResponse,
    /// The adapter's abort token was set.
    Aborted,
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::Transport(e) => write!(f, "{}", transport_message(e)),
            ProbeError::Status(code) => write!(f, "HTTP {}", code),
            ProbeError::NoResponse => write!(f, "no response"),
            ProbeError::Aborted => write!(f, "aborted"),
        }
    }
}

impl std::error::Error for ProbeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProbeError::Transport(e) => Some(e),
            ProbeError::Status(_) | ProbeError::NoResponse | ProbeError::Aborted => None,
        }
    }
}

impl From<curl::Error> for ProbeError {
    fn from(e: curl::Error) -> Self {
        if e.is_aborted_by_callback() {
            ProbeError::Aborted
        } else {
            ProbeError::Transport(e)
        }
    }
}

/// Probes `url` and returns the final response's headers if its status is accepted by `policy`.
///
/// With `use_head` the request is a HEAD; otherwise a GET whose body is never read.
/// Follows redirects. Runs in the current thread and blocks until the deadline in `ctx`.
pub fn probe(
    url: &str,
    ctx: &RequestContext,
    use_head: bool,
    policy: &StatusPolicy,
    abort: &AbortToken,
) -> Result<ResponseHeaders, ProbeError> {
    if abort.is_aborted() {
        return Err(ProbeError::Aborted);
    }

    let mut lines: Vec<String> = Vec::new();
    let mut body_cut = false;

    let mut easy = curl::easy::Easy::new();
    configure_easy(&mut easy, url, ctx, Deadline::Total)?;
    if use_head {
        easy.nobody(true)?;
    }

    let performed = {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                lines.push(s.trim_end().to_string());
            }
            true
        })?;
        // Headers are complete once body bytes arrive; stop the GET there.
        transfer.write_function(|_| {
            body_cut = true;
            Ok(0)
        })?;
        transfer.progress_function(|_, _, _, _| !abort.is_aborted())?;
        transfer.perform()
    };

    match performed {
        Ok(()) => {}
        Err(e) if e.is_write_error() && body_cut => {}
        Err(e) => return Err(e.into()),
    }

    let headers = ResponseHeaders::from_lines(&lines);
    let code = match headers.status() {
        Some(code) => code,
        None => match easy.response_code() {
            Ok(code) if code != 0 => code,
            _ => return Err(ProbeError::NoResponse),
        },
    };

    let method = if use_head { "HEAD" } else { "GET" };
    tracing::debug!(url = %redact_url(url), method, status = code, "probe response");

    if !policy.accepts(code) {
        return Err(ProbeError::Status(code));
    }
    Ok(headers)
}
