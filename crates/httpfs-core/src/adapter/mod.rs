//! Filesystem-style contract and its HTTP implementation.

mod http;

pub use http::HttpAdapter;

use crate::error::FsError;
use crate::metadata::FileMetadata;
use crate::visibility::Visibility;
use std::io::Read;

/// Operations a filesystem backend exposes to the layer above it.
///
/// Existence checks answer with a plain `bool`: any failure to establish
/// existence is "does not exist". Read-only backends return
/// [`FsError::Unsupported`] from the mutation methods.
///
/// This trait is object-safe and can be used as `dyn FilesystemAdapter`.
pub trait FilesystemAdapter: Send + Sync {
    fn file_exists(&self, path: &str) -> bool;

    fn directory_exists(&self, path: &str) -> bool;

    /// Size, last-modified and MIME type of `path`.
    ///
    /// # Errors
    ///
    /// - [`FsError::MetadataUnavailable`] if the path cannot be probed
    fn metadata(&self, path: &str) -> Result<FileMetadata, FsError>;

    /// Record carrying the visibility of `path`.
    fn visibility(&self, path: &str) -> Result<FileMetadata, FsError>;

    /// Entire file contents.
    ///
    /// # Errors
    ///
    /// - [`FsError::FileUnreadable`] if retrieval fails
    fn read(&self, path: &str) -> Result<Vec<u8>, FsError>;

    /// Streaming reader over the file contents. The caller owns and drops it.
    ///
    /// # Errors
    ///
    /// - [`FsError::FileUnreadable`] if the stream cannot be opened
    fn read_stream(&self, path: &str) -> Result<Box<dyn Read + Send>, FsError>;

    fn write(&self, path: &str, contents: &[u8]) -> Result<(), FsError>;

    fn write_stream(&self, path: &str, contents: &mut dyn Read) -> Result<(), FsError>;

    fn copy(&self, source: &str, destination: &str) -> Result<(), FsError>;

    /// Move `source` to `destination`.
    fn rename(&self, source: &str, destination: &str) -> Result<(), FsError>;

    fn delete(&self, path: &str) -> Result<(), FsError>;

    fn delete_directory(&self, path: &str) -> Result<(), FsError>;

    fn create_directory(&self, path: &str) -> Result<(), FsError>;

    fn list_contents(&self, path: &str, deep: bool) -> Result<Vec<FileMetadata>, FsError>;

    fn set_visibility(&self, path: &str, visibility: Visibility) -> Result<(), FsError>;
}
