//! Errors surfaced at the adapter boundary.
//!
//! Transport failures never cross this boundary raw: probes degrade to
//! "metadata unavailable" (or `false`), reads to "file unreadable".

use crate::visibility::Visibility;

#[derive(thiserror::Error, Debug)]
pub enum FsError {
    /// Mutation-class operation; this adapter is read-only.
    #[error("operation unsupported: {operation}")]
    Unsupported { operation: &'static str },

    #[error("operation unsupported: set visibility of {path} to {visibility}")]
    SetVisibilityUnsupported { path: String, visibility: Visibility },

    /// The probe did not get an accepted status for the path.
    #[error("unable to retrieve metadata for {path}")]
    MetadataUnavailable { path: String },

    /// Content retrieval failed; `message` is the lowest-level diagnostic available.
    #[error("unable to read file {path}: {message}")]
    FileUnreadable { path: String, message: String },

    #[error("invalid base URL {base:?}: {source}")]
    InvalidBase {
        base: String,
        #[source]
        source: url::ParseError,
    },
}

impl FsError {
    pub(crate) fn unsupported(operation: &'static str) -> Self {
        FsError::Unsupported { operation }
    }

    pub(crate) fn unreadable(path: &str, message: impl Into<String>) -> Self {
        FsError::FileUnreadable {
            path: path.to_string(),
            message: message.into(),
        }
    }

    /// True for both unsupported-operation variants.
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self,
            FsError::Unsupported { .. } | FsError::SetVisibilityUnsupported { .. }
        )
    }

    /// The path the failure is attributed to, if any.
    pub fn path(&self) -> Option<&str> {
        match self {
            FsError::SetVisibilityUnsupported { path, .. }
            | FsError::MetadataUnavailable { path }
            | FsError::FileUnreadable { path, .. } => Some(path),
            FsError::Unsupported { .. } | FsError::InvalidBase { .. } => None,
        }
    }
}
