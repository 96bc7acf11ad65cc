//! Compressed archive backend
//!
//! The archive is a tar stream compressed with zstd (`.tar.zst`). Opening it
//! streams the archive once to record where each entry's data sits in the
//! decompressed stream. Opening an entry then rewinds the single archive
//! file, starts a fresh decoder and skips forward to that position.
//!
//! The decoder state is per archive, so only one entry can be open at a
//! time: the open entry holds the archive file and hands it back when it is
//! dropped.

use super::{normalize_name, BackendKind, ResourceHandle, ResourceStream, StorageBackend};
use crate::error::{StorageError, StorageResult};
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use std::fs::File;
use std::io::{self, BufReader, Read, Seek, SeekFrom, Take};
use std::path::{Path, PathBuf};
use tar::Archive;
use tracing::{debug, trace};

type EntryDecoder = zstd::Decoder<'static, BufReader<File>>;

/// Where an entry's data lives in the decompressed tar stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryLocation {
    /// Offset of the first data byte
    pub offset: u64,
    /// Data length
    pub size: u64,
}

/// Resources stored as entries of a `.tar.zst` archive
#[derive(Debug)]
pub struct ArchiveBackend {
    path: PathBuf,
    index: FxHashMap<String, EntryLocation>,
    file: Mutex<Option<File>>,
}

impl ArchiveBackend {
    /// Open an archive and index its entries
    pub fn open_archive(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();
        let file = File::open(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StorageError::not_found(path.display().to_string()),
            _ => StorageError::Io(e),
        })?;
        let index = Self::build_index(&file)?;
        debug!(path = %path.display(), entries = index.len(), "indexed archive");
        Ok(ArchiveBackend {
            path,
            index,
            file: Mutex::new(Some(file)),
        })
    }

    fn build_index(file: &File) -> StorageResult<FxHashMap<String, EntryLocation>> {
        let decoder = zstd::Decoder::new(file)
            .map_err(|e| StorageError::compression(format!("zstd decode: {}", e)))?;
        let mut archive = Archive::new(decoder);
        let mut index = FxHashMap::default();

        for entry in archive
            .entries()
            .map_err(|e| StorageError::archive(e.to_string()))?
        {
            let entry = entry.map_err(|e| StorageError::archive(e.to_string()))?;
            if !entry.header().entry_type().is_file() {
                continue;
            }
            let name = entry
                .path()
                .map_err(|e| StorageError::archive(e.to_string()))?
                .to_string_lossy()
                .to_string();
            let name = normalize_name(&name);
            let location = EntryLocation {
                offset: entry.raw_file_position(),
                size: entry.size(),
            };
            trace!(entry = %name, offset = location.offset, size = location.size, "archive entry");
            index.insert(name, location);
        }
        Ok(index)
    }

    /// Location of an entry, if present
    pub fn entry(&self, name: &str) -> Option<EntryLocation> {
        self.index.get(&normalize_name(name)).copied()
    }

    /// Indexed entry names, sorted
    pub fn entry_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.index.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Whether an entry currently holds the archive cursor
    pub fn is_busy(&self) -> bool {
        self.file.lock().is_none()
    }

    fn start_decoder(&self, mut file: File) -> StorageResult<EntryDecoder> {
        if let Err(e) = file.rewind() {
            *self.file.lock() = Some(file);
            return Err(StorageError::Io(e));
        }
        zstd::Decoder::new(file).map_err(|e| {
            // The file went down with the decoder; reopen so later opens still work.
            *self.file.lock() = File::open(&self.path).ok();
            StorageError::compression(format!("zstd decode: {}", e))
        })
    }
}

impl StorageBackend for ArchiveBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Archive
    }

    fn root(&self) -> &Path {
        &self.path
    }

    fn open(&self, name: &str) -> StorageResult<ResourceHandle<'_>> {
        let location = self.entry(name).ok_or_else(|| StorageError::not_found(name))?;
        let file = self
            .file
            .lock()
            .take()
            .ok_or_else(|| StorageError::EntryBusy {
                name: name.to_string(),
            })?;
        let decoder = self.start_decoder(file)?;

        let mut stream = EntryStream {
            slot: &self.file,
            reader: Some(decoder.take(location.offset)),
        };
        stream.skip_to(location)?;
        debug!(resource = name, offset = location.offset, size = location.size, "opened archive entry");
        Ok(ResourceHandle::new(name, Box::new(stream)))
    }
}

/// Decompression cursor bounded to one entry
struct EntryStream<'a> {
    slot: &'a Mutex<Option<File>>,
    reader: Option<Take<EntryDecoder>>,
}

impl EntryStream<'_> {
    fn skip_to(&mut self, location: EntryLocation) -> StorageResult<()> {
        let reader = self
            .reader
            .as_mut()
            .ok_or_else(|| StorageError::archive("entry stream already closed"))?;
        let skipped = io::copy(reader, &mut io::sink())
            .map_err(|e| StorageError::compression(e.to_string()))?;
        if skipped != location.offset {
            return Err(StorageError::archive(format!(
                "archive ended at {} before entry data at {}",
                skipped, location.offset
            )));
        }
        reader.set_limit(location.size);
        Ok(())
    }

    fn unsupported(op: &'static str) -> StorageError {
        StorageError::Unsupported {
            op,
            backend: BackendKind::Archive,
        }
    }
}

impl Read for EntryStream<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.reader.as_mut() {
            Some(reader) => reader.read(buf),
            None => Ok(0),
        }
    }
}

impl ResourceStream for EntryStream<'_> {
    fn size(&mut self) -> StorageResult<u64> {
        Err(Self::unsupported("size"))
    }

    fn seek(&mut self, _pos: SeekFrom) -> StorageResult<u64> {
        Err(Self::unsupported("seek"))
    }

    fn tell(&mut self) -> StorageResult<u64> {
        Err(Self::unsupported("tell"))
    }
}

impl Drop for EntryStream<'_> {
    fn drop(&mut self) {
        if let Some(reader) = self.reader.take() {
            let file = reader.into_inner().finish().into_inner();
            *self.slot.lock() = Some(file);
        }
    }
}
