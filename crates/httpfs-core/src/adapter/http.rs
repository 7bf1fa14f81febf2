//! `FilesystemAdapter` over a remote HTTP resource tree.
//!
//! Every operation builds its URL from the adapter's base, then either probes
//! (existence, metadata) or GETs (reads). Mutations fail immediately.
//! Each request gets its own curl handle configured from the current
//! `RequestContext`; no state is shared between calls.

use super::FilesystemAdapter;
use crate::config::{AdapterConfig, RequestContext};
use crate::control::AbortToken;
use crate::error::FsError;
use crate::fetch_head::{self, ProbeError, ResponseHeaders, StatusPolicy};
use crate::metadata::{self, FileMetadata};
use crate::reader::{self, ReadStream};
use crate::url_model::{build_directory_url, build_url, redact_url};
use crate::visibility::Visibility;
use std::io::Read;
use url::Url;

/// Read-only adapter rooted at a base URL.
#[derive(Debug)]
pub struct HttpAdapter {
    base: String,
    supports_head: bool,
    status_policy: StatusPolicy,
    request: RequestContext,
    visibility: Visibility,
    abort: AbortToken,
}

impl HttpAdapter {
    /// Adapter with default configuration: HEAD probes, 200-only, hardened TLS.
    ///
    /// # Errors
    ///
    /// - [`FsError::InvalidBase`] if `base` is not an absolute URL
    pub fn new(base: &str) -> Result<Self, FsError> {
        Self::with_config(base, AdapterConfig::default())
    }

    /// Adapter with explicit configuration. Visibility is fixed here from the base URL.
    pub fn with_config(base: &str, config: AdapterConfig) -> Result<Self, FsError> {
        let parsed = Url::parse(base).map_err(|source| FsError::InvalidBase {
            base: redact_url(base),
            source,
        })?;
        let visibility = Visibility::from_base_url(&parsed);
        tracing::debug!(
            host = parsed.host_str().unwrap_or(""),
            %visibility,
            supports_head = config.supports_head,
            "http adapter created"
        );

        Ok(Self {
            base: base.to_string(),
            supports_head: config.supports_head,
            status_policy: StatusPolicy::new(config.success_statuses),
            request: config.request,
            visibility,
            abort: AbortToken::new(),
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn supports_head(&self) -> bool {
        self.supports_head
    }

    pub fn status_policy(&self) -> &StatusPolicy {
        &self.status_policy
    }

    pub fn request_context(&self) -> &RequestContext {
        &self.request
    }

    /// Replaces the request context wholesale (no merging). Affects calls made after this returns.
    pub fn set_request_context(&mut self, request: RequestContext) {
        self.request = request;
    }

    /// Token that aborts this adapter's in-flight and future network calls when set.
    pub fn abort_token(&self) -> AbortToken {
        self.abort.clone()
    }

    /// The request URL for `path`.
    pub fn url_for(&self, path: &str) -> String {
        build_url(&self.base, path)
    }

    /// Probe `url`; any failure is logged and reported as `None`.
    fn head(&self, url: &str) -> Option<ResponseHeaders> {
        match fetch_head::probe(
            url,
            &self.request,
            self.supports_head,
            &self.status_policy,
            &self.abort,
        ) {
            Ok(headers) => Some(headers),
            Err(ProbeError::Transport(e)) => {
                tracing::warn!(url = %redact_url(url), error = %e, "probe transport failure");
                None
            }
            Err(e) => {
                tracing::debug!(url = %redact_url(url), reason = %e, "probe rejected");
                None
            }
        }
    }

    /// Opens a streaming read of `path`, returning the concrete handle.
    pub fn open_stream(&self, path: &str) -> Result<ReadStream, FsError> {
        let url = self.url_for(path);
        reader::open_stream(&url, self.request.clone(), self.abort.clone()).map_err(|e| {
            tracing::warn!(url = %redact_url(&url), error = %e, "stream open failed");
            FsError::unreadable(path, e.to_string())
        })
    }
}

impl FilesystemAdapter for HttpAdapter {
    fn file_exists(&self, path: &str) -> bool {
        self.head(&self.url_for(path)).is_some()
    }

    fn directory_exists(&self, path: &str) -> bool {
        self.head(&build_directory_url(&self.base, path)).is_some()
    }

    fn metadata(&self, path: &str) -> Result<FileMetadata, FsError> {
        let headers = self
            .head(&self.url_for(path))
            .ok_or_else(|| FsError::MetadataUnavailable {
                path: path.to_string(),
            })?;
        Ok(metadata::decode(path, &headers, self.visibility))
    }

    fn visibility(&self, path: &str) -> Result<FileMetadata, FsError> {
        Ok(FileMetadata::visibility_only(path, self.visibility))
    }

    fn read(&self, path: &str) -> Result<Vec<u8>, FsError> {
        let url = self.url_for(path);
        reader::read_all(&url, &self.request, &self.abort).map_err(|e| {
            tracing::warn!(url = %redact_url(&url), error = %e, "read failed");
            FsError::unreadable(path, e.to_string())
        })
    }

    fn read_stream(&self, path: &str) -> Result<Box<dyn Read + Send>, FsError> {
        Ok(Box::new(self.open_stream(path)?))
    }

    fn write(&self, _path: &str, _contents: &[u8]) -> Result<(), FsError> {
        Err(FsError::unsupported("write"))
    }

    fn write_stream(&self, _path: &str, _contents: &mut dyn Read) -> Result<(), FsError> {
        Err(FsError::unsupported("write stream"))
    }

    fn copy(&self, _source: &str, _destination: &str) -> Result<(), FsError> {
        Err(FsError::unsupported("copy"))
    }

    fn rename(&self, _source: &str, _destination: &str) -> Result<(), FsError> {
        Err(FsError::unsupported("move"))
    }

    fn delete(&self, _path: &str) -> Result<(), FsError> {
        Err(FsError::unsupported("delete"))
    }

    fn delete_directory(&self, _path: &str) -> Result<(), FsError> {
        Err(FsError::unsupported("delete directory"))
    }

    fn create_directory(&self, _path: &str) -> Result<(), FsError> {
        Err(FsError::unsupported("create directory"))
    }

    fn list_contents(&self, _path: &str, _deep: bool) -> Result<Vec<FileMetadata>, FsError> {
        Err(FsError::unsupported("list contents"))
    }

    fn set_visibility(&self, path: &str, visibility: Visibility) -> Result<(), FsError> {
        Err(FsError::SetVisibilityUnsupported {
            path: path.to_string(),
            visibility,
        })
    }
}
