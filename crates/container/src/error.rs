//! Container error types

use crate::config::WriterConfigError;
use respak_codec::CodecError;
use respak_core::{HeaderError, Platform, ResourceId};
use respak_storage::StorageError;
use std::io;
use thiserror::Error;

/// Errors that can occur while writing or reading a container
#[derive(Debug, Error)]
pub enum ContainerError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Invalid magic bytes
    #[error("Invalid magic bytes: expected {expected:?}, got {actual:?}")]
    BadMagic {
        /// Expected magic bytes
        expected: [u8; 4],
        /// Actual magic bytes found
        actual: [u8; 4],
    },

    /// Unsupported format version
    #[error("Unsupported data version {version}, only {supported} is supported")]
    BadVersion {
        /// Version found in the file
        version: u16,
        /// The supported version
        supported: u16,
    },

    /// Header id differs from the id the container was requested as
    #[error("Resource id mismatch: requested {requested}, header holds {found}")]
    BadId {
        /// Id the caller asked for
        requested: ResourceId,
        /// Raw id in the header
        found: u16,
    },

    /// Header id is not a known resource
    #[error("Unknown resource id {0}")]
    UnknownResource(u16),

    /// Trailer does not match the certified bytes
    #[error("Checksum mismatch: stored {stored:#010x}, computed {computed:#010x}")]
    ChecksumMismatch {
        /// Trailer value
        stored: u32,
        /// CRC-32 of everything before the trailer
        computed: u32,
    },

    /// Container too short to hold a trailer
    #[error("Container of {len} bytes has no checksum trailer")]
    TrailerMissing {
        /// Bytes available
        len: u64,
    },

    /// Resource does not exist on this profile
    #[error("{id} is not available on the {platform:?} profile")]
    UnavailableOnProfile {
        /// Requested id
        id: ResourceId,
        /// Active platform
        platform: Platform,
    },

    /// Payload codec failure
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    /// Storage failure
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Invalid writer configuration
    #[error("Invalid writer config: {0}")]
    Config(#[from] WriterConfigError),
}

impl From<HeaderError> for ContainerError {
    fn from(err: HeaderError) -> Self {
        match err {
            HeaderError::BadMagic { expected, actual } => Self::BadMagic { expected, actual },
            HeaderError::BadVersion { version, supported } => {
                Self::BadVersion { version, supported }
            }
        }
    }
}

impl ContainerError {
    /// Envelope or payload does not match the format
    pub fn is_format_failure(&self) -> bool {
        matches!(
            self,
            Self::BadMagic { .. }
                | Self::BadVersion { .. }
                | Self::BadId { .. }
                | Self::UnknownResource(_)
                | Self::Codec(CodecError::Truncated { .. })
                | Self::Codec(CodecError::BadShape(_))
        )
    }

    /// Trailer verification failed
    pub fn is_integrity_failure(&self) -> bool {
        matches!(
            self,
            Self::ChecksumMismatch { .. } | Self::TrailerMissing { .. }
        )
    }

    /// Backend refused a capability
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_unsupported())
    }
}

/// Result type for container operations
pub type ContainerResult<T> = Result<T, ContainerError>;
