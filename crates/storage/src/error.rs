//! Storage error types

use crate::backend::BackendKind;
use crate::config::ConfigError;
use std::io;
use thiserror::Error;

/// Errors that can occur while resolving or reading resources
#[derive(Debug, Error)]
pub enum StorageError {
    /// No root path is active
    #[error("No resource root is set")]
    NoRoot,

    /// Name not present under the active root
    #[error("Resource not found: {name}")]
    NotFound {
        /// Requested name
        name: String,
    },

    /// Archive cursor already held by another open entry
    #[error("Cannot open {name}: another archive entry is still open")]
    EntryBusy {
        /// Requested name
        name: String,
    },

    /// Capability not offered by this backend
    #[error("{op} is not supported by the {backend} backend")]
    Unsupported {
        /// Operation attempted
        op: &'static str,
        /// Backend that refused it
        backend: BackendKind,
    },

    /// Archive structure could not be read
    #[error("Archive error: {0}")]
    Archive(String),

    /// Decompression failed
    #[error("Compression error: {0}")]
    Compression(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Invalid storage configuration
    #[error("Invalid storage config: {0}")]
    Config(#[from] ConfigError),
}

impl StorageError {
    /// Create an archive error
    pub fn archive(msg: impl Into<String>) -> Self {
        Self::Archive(msg.into())
    }

    /// Create a compression error
    pub fn compression(msg: impl Into<String>) -> Self {
        Self::Compression(msg.into())
    }

    /// Create a not found error
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Whether this is a capability refusal rather than a failure
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
