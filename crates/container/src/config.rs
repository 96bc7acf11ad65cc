//! Writer configuration

use std::path::PathBuf;

/// Bytes hashed per read while computing the trailer
pub const DEFAULT_CHECKSUM_CHUNK_SIZE: usize = 1024;

/// Container writer configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterConfig {
    /// Directory containers are written under
    pub output_dir: PathBuf,
    /// Read size of the trailer pass
    pub checksum_chunk_size: usize,
}

impl Default for WriterConfig {
    fn default() -> Self {
        WriterConfig {
            output_dir: PathBuf::from("."),
            checksum_chunk_size: DEFAULT_CHECKSUM_CHUNK_SIZE,
        }
    }
}

impl WriterConfig {
    /// Default config writing under `output_dir`
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        WriterConfig::default().with_output_dir(output_dir)
    }

    /// Set output directory
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Set trailer pass chunk size
    pub fn with_checksum_chunk_size(mut self, size: usize) -> Self {
        self.checksum_chunk_size = size;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), WriterConfigError> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(WriterConfigError::EmptyOutputDir);
        }
        if self.checksum_chunk_size == 0 {
            return Err(WriterConfigError::ZeroChunkSize);
        }
        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WriterConfigError {
    /// Output directory is empty
    #[error("Output directory is empty")]
    EmptyOutputDir,

    /// Checksum chunk size is zero
    #[error("Checksum chunk size must be non-zero")]
    ZeroChunkSize,
}
