//! Read failure type.

use crate::transfer::transport_message;
use std::fmt;
use std::io;

/// Why content could not be retrieved. Displays as the lowest-level diagnostic available.
#[derive(Debug)]
pub enum ReadError {
    /// Curl reported an error (DNS, connect, TLS, timeout, ...).
    Curl(curl::Error),
    /// Response status was not 2xx.
    Http(u32),
    /// The adapter's abort token was set.
    Aborted,
    /// The background transfer thread could not be started.
    Spawn(io::Error),
    /// The transfer thread went away without reporting an outcome.
    Disconnected,
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Curl(e) => write!(f, "{}", transport_message(e)),
            ReadError::Http(code) => write!(f, "HTTP {}", code),
            ReadError::Aborted => write!(f, "aborted"),
            ReadError::Spawn(e) => write!(f, "failed to start transfer thread: {}", e),
            ReadError::Disconnected => write!(f, "transfer ended without a response"),
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadError::Curl(e) => Some(e),
            ReadError::Spawn(e) => Some(e),
            ReadError::Http(_) | ReadError::Aborted | ReadError::Disconnected => None,
        }
    }
}

impl From<curl::Error> for ReadError {
    fn from(e: curl::Error) -> Self {
        if e.is_aborted_by_callback() {
            ReadError::Aborted
        } else {
            ReadError::Curl(e)
        }
    }
}
