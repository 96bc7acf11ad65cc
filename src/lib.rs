//! respak - versioned, checksummed resource containers
//!
//! Game data is split into one container per resource kind. Each container
//! carries a small header, a payload in a fixed little-endian layout, and a
//! CRC-32 trailer. Containers are served from either a directory tree or a
//! single `.tar.zst` archive.
//!
//! # Quick Start
//!
//! ```ignore
//! use respak::{ContainerWriter, ResourceLoader, ResourceRoot, WriterConfig};
//!
//! // Build a data directory
//! let writer = ContainerWriter::new(WriterConfig::new("data"))?;
//! writer.write_all(tables)?;
//!
//! // Load it back
//! let mut root = ResourceRoot::new();
//! root.set_root_path("data")?;
//! let loaded = ResourceLoader::new(&root).load_all()?;
//! ```
//!
//! # Architecture
//!
//! - `respak-core`: resource ids, platform profiles, header, text
//! - `respak-codec`: payload layouts and the codec registry
//! - `respak-storage`: directory and archive backends behind `ResourceRoot`
//! - `respak-container`: writer, reader, checksum, whole-set loader

pub use respak_codec::{
    standard_codec, ArrayCodec, Block, CodecError, CodecRegistry, CodecResult, Color, Connection,
    EntityData, HighScore, IntroStep, Manifest, ManifestCodec, MapRecord, Mark, MoveStep, Picture,
    PictureCodec, RecordCodec, ResourceTable, Sprite, SpriteMask, Submap, TableRecord,
    TargetProfile, TextCodec, TextListCodec, TileBank, WireReader, WireRecord, WireWriter,
    HISCORE_NAME_SIZE, LINES_PER_TILE, SPRITE_COLS, SPRITE_ROWS, SPRITE_SAMPLES, TILES_PER_BANK,
};
pub use respak_container::{
    append_trailer, checksum, read_header, verify_bytes, verify_checksum, ChecksumReader,
    ContainerError, ContainerReader, ContainerResult, ContainerWriter,
    LoadedResources, ResourceLoader, WriterConfig, WriterConfigError, WrittenContainer,
};
pub use respak_core::{
    ActiveProfile, AtariSt, HeaderError, Pc, Platform, ResourceHeader, ResourceId, Terminator,
    Text, ACTIVE_PLATFORM, BOOTSTRAP_RESOURCE_NAME, DATA_VERSION, HEADER_SIZE, MAX_STRING_LEN,
    RESOURCE_MAGIC, TRAILER_SIZE,
};
pub use respak_storage::{
    ArchiveBackend, BackendKind, DirectoryBackend, ResourceHandle, ResourceRoot, ResourceStream,
    StorageBackend, StorageConfig, StorageError, StorageResult, DEFAULT_ARCHIVE_EXTENSIONS,
    DEFAULT_ROOT_PATH,
};

