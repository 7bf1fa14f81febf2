pub mod config;
pub mod logging;

pub mod adapter;
pub mod control;
pub mod error;
pub mod fetch_head;
pub mod metadata;
pub mod reader;
pub mod transfer;
pub mod url_model;
pub mod visibility;

pub use adapter::{FilesystemAdapter, HttpAdapter};
pub use config::{AdapterConfig, RequestContext};
pub use error::FsError;
pub use metadata::FileMetadata;
pub use reader::ReadStream;
pub use visibility::Visibility;
