//! Per-request curl configuration.
//!
//! Every request gets a fresh `Easy` handle configured from the adapter's
//! `RequestContext`; nothing is shared between requests or threads.

use crate::config::RequestContext;
use curl::easy::{Easy, List};
use std::time::Duration;

/// How long a transfer may run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deadline {
    /// Connect timeout plus a hard limit on the whole transfer (probes, buffered reads).
    Total,
    /// Connect timeout plus a low-speed cutoff; no wall-clock limit (streams).
    ConnectOnly,
}

/// Applies URL, redirect policy, timeouts, TLS, proxy and headers from `ctx` to `easy`.
///
/// Enables progress callbacks so callers can install an abort check.
pub fn configure_easy(
    easy: &mut Easy,
    url: &str,
    ctx: &RequestContext,
    deadline: Deadline,
) -> Result<(), curl::Error> {
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(ctx.max_redirections)?;
    easy.connect_timeout(ctx.connect_timeout())?;
    match deadline {
        Deadline::Total => easy.timeout(ctx.timeout())?,
        Deadline::ConnectOnly => {
            // Abort if throughput drops below 1 KiB/s for 60s.
            easy.low_speed_limit(1024)?;
            easy.low_speed_time(Duration::from_secs(60))?;
        }
    }

    easy.ssl_verify_peer(ctx.verify_peer)?;
    easy.ssl_verify_host(ctx.verify_host)?;
    if let Some(ca) = &ctx.ca_info {
        easy.cainfo(ca)?;
    }
    if let Some(proxy) = &ctx.proxy {
        easy.proxy(proxy)?;
    }
    if let Some(ua) = &ctx.user_agent {
        easy.useragent(ua)?;
    }
    if let Some(encoding) = &ctx.accept_encoding {
        easy.accept_encoding(encoding)?;
    }

    if !ctx.headers.is_empty() {
        let mut list = List::new();
        for (k, v) in &ctx.headers {
            list.append(&format!("{}: {}", k.trim(), v.trim()))?;
        }
        easy.http_headers(list)?;
    }

    easy.progress(true)?;
    Ok(())
}

/// Lowest-level diagnostic for a curl failure: libcurl's detail buffer when set,
/// else the generic description for the error code.
pub fn transport_message(e: &curl::Error) -> String {
    e.extra_description()
        .map(str::to_string)
        .unwrap_or_else(|| e.description().to_string())
}

/// True for 2xx statuses; content reads accept any of them.
pub fn is_success_status(code: u32) -> bool {
    (200..300).contains(&code)
}
