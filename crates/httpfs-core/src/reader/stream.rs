//! Streaming GET.
//!
//! The transfer runs on its own thread and hands body chunks over a bounded
//! channel, so the caller pulls bytes at its own pace through `std::io::Read`.
//! Opening waits for the first chunk (or the outcome) so a missing file fails
//! at open time. Dropping the handle cancels the transfer at its next
//! progress tick, even when the server has stalled.

use super::ReadError;
use crate::config::RequestContext;
use crate::control::AbortToken;
use crate::fetch_head::parse_status_code;
use crate::transfer::{configure_easy, is_success_status, Deadline};
use crate::url_model::redact_url;
use std::cell::Cell;
use std::fmt;
use std::io::{self, Read};
use std::str;
use std::sync::mpsc::{self, Receiver, SyncSender};
use std::thread;

/// Chunks buffered between the transfer thread and the reader.
const QUEUE_DEPTH: usize = 16;

enum StreamEvent {
    Data(Vec<u8>),
    Finished,
    Failed(ReadError),
}

/// Read-only handle on a remote body. Owned by the caller; drop it to release the connection.
pub struct ReadStream {
    rx: Receiver<StreamEvent>,
    chunk: Vec<u8>,
    pos: usize,
    done: bool,
    /// Set on drop; the transfer thread polls it from its progress callback.
    cancel: AbortToken,
}

impl Drop for ReadStream {
    fn drop(&mut self) {
        self.cancel.abort();
    }
}

impl fmt::Debug for ReadStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadStream")
            .field("buffered", &(self.chunk.len() - self.pos))
            .field("done", &self.done)
            .finish()
    }
}

impl Read for ReadStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        loop {
            if self.pos < self.chunk.len() {
                let n = buf.len().min(self.chunk.len() - self.pos);
                buf[..n].copy_from_slice(&self.chunk[self.pos..self.pos + n]);
                self.pos += n;
                return Ok(n);
            }
            if self.done || buf.is_empty() {
                return Ok(0);
            }
            match self.rx.recv() {
                Ok(StreamEvent::Data(data)) => {
                    self.chunk = data;
                    self.pos = 0;
                }
                Ok(StreamEvent::Finished) => self.done = true,
                Ok(StreamEvent::Failed(e)) => {
                    self.done = true;
                    return Err(io::Error::other(e));
                }
                Err(_) => {
                    self.done = true;
                    return Err(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        ReadError::Disconnected,
                    ));
                }
            }
        }
    }
}

/// Starts a GET of `url` on a background thread and returns once the response is known.
///
/// Fails if the transfer cannot start, the server answers non-2xx, or the
/// connection fails before any body byte arrives.
pub fn open_stream(url: &str, ctx: RequestContext, abort: AbortToken) -> Result<ReadStream, ReadError> {
    if abort.is_aborted() {
        return Err(ReadError::Aborted);
    }

    let (tx, rx) = mpsc::sync_channel(QUEUE_DEPTH);
    let url = url.to_string();
    let cancel = AbortToken::new();
    let worker_cancel = cancel.clone();
    thread::Builder::new()
        .name("httpfs-stream".to_string())
        .spawn(move || {
            let event = match run_transfer(&url, &ctx, &abort, &worker_cancel, &tx) {
                Ok(()) => StreamEvent::Finished,
                Err(e) => {
                    tracing::debug!(url = %redact_url(&url), error = %e, "stream transfer failed");
                    StreamEvent::Failed(e)
                }
            };
            let _ = tx.send(event);
        })
        .map_err(ReadError::Spawn)?;

    match rx.recv() {
        Ok(StreamEvent::Data(chunk)) => Ok(ReadStream {
            rx,
            chunk,
            pos: 0,
            done: false,
            cancel,
        }),
        Ok(StreamEvent::Finished) => Ok(ReadStream {
            rx,
            chunk: Vec::new(),
            pos: 0,
            done: true,
            cancel,
        }),
        Ok(StreamEvent::Failed(e)) => Err(e),
        Err(_) => Err(ReadError::Disconnected),
    }
}

fn run_transfer(
    url: &str,
    ctx: &RequestContext,
    abort: &AbortToken,
    cancel: &AbortToken,
    tx: &SyncSender<StreamEvent>,
) -> Result<(), ReadError> {
    let status = Cell::new(0u32);
    let rejected = Cell::new(None::<u32>);
    let reader_gone = Cell::new(false);

    let mut easy = curl::easy::Easy::new();
    configure_easy(&mut easy, url, ctx, Deadline::ConnectOnly)?;

    let performed = {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Some(code) = str::from_utf8(data).ok().and_then(parse_status_code) {
                status.set(code);
            }
            true
        })?;
        transfer.write_function(|data| {
            let code = status.get();
            if !is_success_status(code) {
                rejected.set(Some(code));
                return Ok(0);
            }
            if tx.send(StreamEvent::Data(data.to_vec())).is_err() {
                reader_gone.set(true);
                return Ok(0);
            }
            Ok(data.len())
        })?;
        transfer.progress_function(|_, _, _, _| !abort.is_aborted() && !cancel.is_aborted())?;
        transfer.perform()
    };

    if let Some(code) = rejected.get() {
        return Err(ReadError::Http(code));
    }
    if reader_gone.get() || cancel.is_aborted() {
        tracing::debug!(url = %redact_url(url), "stream dropped by reader");
        return Ok(());
    }
    performed?;

    let code = easy.response_code()?;
    tracing::debug!(url = %redact_url(url), status = code, "stream finished");
    if !is_success_status(code) {
        return Err(ReadError::Http(code));
    }
    Ok(())
}
