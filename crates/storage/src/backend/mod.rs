//! Storage backends
//!
//! A backend resolves resource names (always `/`-separated, relative to the
//! root) to readable streams. Two implementations exist:
//!
//! - [`DirectoryBackend`]: a plain directory tree, every capability supported
//! - [`ArchiveBackend`]: a zstd-compressed tar archive, forward reads only
//!
//! Callers go through [`ResourceHandle`], which exposes the full capability
//! set and reports [`StorageError::Unsupported`] where a backend cannot
//! honour a call.
//!
//! [`StorageError::Unsupported`]: crate::StorageError::Unsupported

mod archive;
mod directory;

pub use archive::{ArchiveBackend, EntryLocation};
pub use directory::DirectoryBackend;

use crate::error::StorageResult;
use std::fmt;
use std::io::{self, Read, SeekFrom};
use std::path::Path;

/// Backend variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// Directory tree
    Directory,
    /// Compressed archive
    Archive,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::Directory => f.write_str("directory"),
            BackendKind::Archive => f.write_str("archive"),
        }
    }
}

/// Open stream over one resource
pub trait ResourceStream: Read {
    /// Total size in bytes
    fn size(&mut self) -> StorageResult<u64>;

    /// Reposition, returning the new offset
    fn seek(&mut self, pos: SeekFrom) -> StorageResult<u64>;

    /// Current offset
    fn tell(&mut self) -> StorageResult<u64>;
}

/// Resource name to stream resolution.
///
/// # Thread Safety
///
/// Backends are `Send + Sync` so a root can be shared, but an archive still
/// serves one open entry at a time.
pub trait StorageBackend: Send + Sync {
    /// Which variant this is
    fn kind(&self) -> BackendKind;

    /// Path the backend was opened on
    fn root(&self) -> &Path;

    /// Open a resource by relative name
    fn open(&self, name: &str) -> StorageResult<ResourceHandle<'_>>;
}

/// An open resource
///
/// Closing is dropping; [`ResourceHandle::close`] makes it explicit.
pub struct ResourceHandle<'a> {
    name: String,
    stream: Box<dyn ResourceStream + 'a>,
}

impl<'a> ResourceHandle<'a> {
    /// Wrap a backend stream
    pub fn new(name: impl Into<String>, stream: Box<dyn ResourceStream + 'a>) -> Self {
        ResourceHandle {
            name: name.into(),
            stream,
        }
    }

    /// Name this handle was opened with
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total size in bytes
    pub fn size(&mut self) -> StorageResult<u64> {
        self.stream.size()
    }

    /// Reposition, returning the new offset
    pub fn seek(&mut self, pos: SeekFrom) -> StorageResult<u64> {
        self.stream.seek(pos)
    }

    /// Current offset
    pub fn tell(&mut self) -> StorageResult<u64> {
        self.stream.tell()
    }

    /// Read everything that remains
    pub fn read_all(&mut self) -> StorageResult<Vec<u8>> {
        let mut data = Vec::new();
        self.stream.read_to_end(&mut data)?;
        Ok(data)
    }

    /// Release the handle
    pub fn close(self) {}
}

impl Read for ResourceHandle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.stream.read(buf)
    }
}

impl fmt::Debug for ResourceHandle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceHandle")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Split a `/`-separated name into non-empty components
pub(crate) fn name_components(name: &str) -> impl Iterator<Item = &str> {
    name.split(['/', '\\'])
        .filter(|part| !part.is_empty() && *part != ".")
}

/// Canonical `/`-separated form of a name
pub(crate) fn normalize_name(name: &str) -> String {
    name_components(name).collect::<Vec<_>>().join("/")
}
