//! Directory tree backend

use super::{name_components, BackendKind, ResourceHandle, ResourceStream, StorageBackend};
use crate::error::{StorageError, StorageResult};
use std::fs::File;
use std::io::{self, BufReader, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resources stored as plain files under a root directory
#[derive(Debug, Clone)]
pub struct DirectoryBackend {
    root: PathBuf,
}

impl DirectoryBackend {
    /// Use `root` as the resource directory
    pub fn open_root(root: impl Into<PathBuf>) -> StorageResult<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(StorageError::not_found(root.display().to_string()));
        }
        Ok(DirectoryBackend { root })
    }

    /// Host path of a resource name
    ///
    /// Each `/`-separated component is pushed separately, so the result uses
    /// the host separator.
    pub fn resolve(&self, name: &str) -> PathBuf {
        let mut path = self.root.clone();
        for part in name_components(name) {
            path.push(part);
        }
        path
    }
}

impl StorageBackend for DirectoryBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Directory
    }

    fn root(&self) -> &Path {
        &self.root
    }

    fn open(&self, name: &str) -> StorageResult<ResourceHandle<'_>> {
        let path = self.resolve(name);
        let file = File::open(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StorageError::not_found(name),
            _ => StorageError::Io(e),
        })?;
        debug!(resource = name, path = %path.display(), "opened directory resource");
        Ok(ResourceHandle::new(
            name,
            Box::new(FileStream {
                reader: BufReader::new(file),
            }),
        ))
    }
}

/// Buffered native file
struct FileStream {
    reader: BufReader<File>,
}

impl Read for FileStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reader.read(buf)
    }
}

impl ResourceStream for FileStream {
    fn size(&mut self) -> StorageResult<u64> {
        Ok(self.reader.get_ref().metadata()?.len())
    }

    fn seek(&mut self, pos: SeekFrom) -> StorageResult<u64> {
        Ok(Seek::seek(&mut self.reader, pos)?)
    }

    fn tell(&mut self) -> StorageResult<u64> {
        Ok(self.reader.stream_position()?)
    }
}
