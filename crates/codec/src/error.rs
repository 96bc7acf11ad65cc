//! Codec error types

use respak_core::ResourceId;
use std::io;
use thiserror::Error;

/// Errors that can occur while encoding or decoding a payload
#[derive(Debug, Error)]
pub enum CodecError {
    /// String does not fit the `u16` length prefix
    #[error("String of {len} bytes exceeds the {max} byte limit")]
    TooLong {
        /// Scanned logical length
        len: usize,
        /// Largest encodable length
        max: usize,
    },

    /// Element count does not fit the `u16` count prefix
    #[error("{what} count {count} exceeds the u16 count prefix")]
    TooMany {
        /// What was being counted
        what: &'static str,
        /// Number of elements
        count: usize,
    },

    /// Payload ended before a read could complete
    #[error("Payload truncated: needed {needed} more bytes")]
    Truncated {
        /// Width of the read that failed
        needed: usize,
    },

    /// Payload bytes do not form a valid table
    #[error("Bad payload shape: {0}")]
    BadShape(String),

    /// Codec handed a table of another kind
    #[error("Codec for {id} cannot encode a {found} table")]
    WrongTable {
        /// Id the codec serves
        id: ResourceId,
        /// Kind of the table it was given
        found: &'static str,
    },

    /// No codec registered for this id
    #[error("No codec registered for {0}")]
    Unregistered(ResourceId),

    /// IO error from the underlying stream
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl CodecError {
    /// Create a bad shape error
    pub fn bad_shape(msg: impl Into<String>) -> Self {
        Self::BadShape(msg.into())
    }

    /// Map a stream error, treating a short read as truncation
    pub fn from_read(err: io::Error, needed: usize) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            Self::Truncated { needed }
        } else {
            Self::Io(err)
        }
    }
}

/// Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;
