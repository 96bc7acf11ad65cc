//! Resource storage for respak
//!
//! Resolves resource names against a root that is either a directory tree or
//! a `.tar.zst` archive, behind one interface:
//! - backend: `StorageBackend` and its two implementations
//! - root: `ResourceRoot`, the context owning the active backend
//! - config: `StorageConfig` (root path, archive suffixes)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod config;
pub mod error;
pub mod root;

pub use backend::{
    ArchiveBackend, BackendKind, DirectoryBackend, EntryLocation, ResourceHandle, ResourceStream,
    StorageBackend,
};
pub use config::{ConfigError, StorageConfig, DEFAULT_ARCHIVE_EXTENSIONS, DEFAULT_ROOT_PATH};
pub use error::{StorageError, StorageResult};
pub use root::ResourceRoot;
