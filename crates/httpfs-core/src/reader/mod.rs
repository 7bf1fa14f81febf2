//! Content retrieval: whole-body GET and streaming GET.
//!
//! Both accept any 2xx status. The adapter wraps failures into
//! `FsError::FileUnreadable`.

mod error;
mod stream;

pub use error::ReadError;
pub use stream::{open_stream, ReadStream};

use crate::config::RequestContext;
use crate::control::AbortToken;
use crate::transfer::{configure_easy, is_success_status, Deadline};
use crate::url_model::redact_url;

/// GETs `url` and returns the full body.
pub fn read_all(url: &str, ctx: &RequestContext, abort: &AbortToken) -> Result<Vec<u8>, ReadError> {
    if abort.is_aborted() {
        return Err(ReadError::Aborted);
    }

    let mut body: Vec<u8> = Vec::new();
    let mut easy = curl::easy::Easy::new();
    configure_easy(&mut easy, url, ctx, Deadline::Total)?;

    let performed = {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.progress_function(|_, _, _, _| !abort.is_aborted())?;
        transfer.perform()
    };
    performed?;

    let code = easy.response_code()?;
    tracing::debug!(url = %redact_url(url), status = code, bytes = body.len(), "read response");
    if !is_success_status(code) {
        return Err(ReadError::Http(code));
    }
    Ok(body)
}
