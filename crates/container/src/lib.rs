//! Resource containers for respak
//!
//! A container is one resource file:
//! - header: magic, data version, resource id
//! - payload: encoded by the id's codec
//! - trailer: CRC-32 of header and payload
//!
//! `ContainerWriter` builds them offline; `ContainerReader` and
//! `ResourceLoader` read them back through a `ResourceRoot`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod checksum;
pub mod config;
pub mod error;
pub mod loader;
pub mod reader;
pub mod writer;

pub use checksum::{append_trailer, checksum, verify_bytes, ChecksumReader};
pub use config::{WriterConfig, WriterConfigError, DEFAULT_CHECKSUM_CHUNK_SIZE};
pub use error::{ContainerError, ContainerResult};
pub use loader::{LoadedResources, ResourceLoader};
pub use reader::{read_header, verify_checksum, ContainerReader};
pub use writer::{ContainerWriter, WrittenContainer};
