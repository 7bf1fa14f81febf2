//! `httpfs <base> cat <path>` – copy a remote file to stdout.

use anyhow::Result;
use httpfs_core::{FilesystemAdapter, HttpAdapter};
use std::io::{self, Write};

pub fn run_cat(adapter: &HttpAdapter, path: &str, buffered: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if buffered {
        let body = adapter.read(path)?;
        out.write_all(&body)?;
    } else {
        let mut stream = adapter.open_stream(path)?;
        let copied = io::copy(&mut stream, &mut out)?;
        tracing::debug!(path, bytes = copied, "cat streamed");
    }
    out.flush()?;
    Ok(())
}
