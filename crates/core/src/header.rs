//! Container header
//!
//! Every container starts with an 8-byte envelope:
//!
//! ```text
//! +------------------+ 0
//! | Magic: "XRES"    | 4 bytes
//! +------------------+ 4
//! | Format Version   | 2 bytes (u16 LE)
//! +------------------+ 6
//! | Resource Id      | 2 bytes (u16 LE)
//! +------------------+ 8
//! | Payload          | resource specific
//! +------------------+
//! | CRC32            | 4 bytes (u32 LE), covers everything above
//! +------------------+
//! ```

use crate::resource_id::ResourceId;

/// Magic bytes: "XRES"
pub const RESOURCE_MAGIC: [u8; 4] = *b"XRES";

/// The single supported container format version
pub const DATA_VERSION: u16 = 1;

/// Header size in bytes
pub const HEADER_SIZE: usize = 8;

/// Trailer size in bytes
pub const TRAILER_SIZE: usize = 4;

/// Container header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceHeader {
    /// Magic bytes
    pub magic: [u8; 4],
    /// Format version
    pub version: u16,
    /// Raw resource id, kept raw so that unknown ids can be reported
    pub resource_id: u16,
}

impl ResourceHeader {
    /// Create a header for the current format version
    pub fn new(id: ResourceId) -> Self {
        ResourceHeader {
            magic: RESOURCE_MAGIC,
            version: DATA_VERSION,
            resource_id: id.as_u16(),
        }
    }

    /// Serialize header to bytes
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[0..4].copy_from_slice(&self.magic);
        bytes[4..6].copy_from_slice(&self.version.to_le_bytes());
        bytes[6..8].copy_from_slice(&self.resource_id.to_le_bytes());
        bytes
    }

    /// Parse header from bytes (no validation)
    pub fn from_bytes(bytes: &[u8; HEADER_SIZE]) -> Self {
        ResourceHeader {
            magic: [bytes[0], bytes[1], bytes[2], bytes[3]],
            version: u16::from_le_bytes([bytes[4], bytes[5]]),
            resource_id: u16::from_le_bytes([bytes[6], bytes[7]]),
        }
    }

    /// Typed resource id, if known
    pub fn id(&self) -> Option<ResourceId> {
        ResourceId::from_u16(self.resource_id)
    }

    /// Validate magic and version
    pub fn validate(&self) -> Result<(), HeaderError> {
        if self.magic != RESOURCE_MAGIC {
            return Err(HeaderError::BadMagic {
                expected: RESOURCE_MAGIC,
                actual: self.magic,
            });
        }
        if self.version != DATA_VERSION {
            return Err(HeaderError::BadVersion {
                version: self.version,
                supported: DATA_VERSION,
            });
        }
        Ok(())
    }
}

/// Errors that can occur when validating a container header
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeaderError {
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
}
