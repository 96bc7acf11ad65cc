//! Storage configuration
//!
//! Selects the resource root and which file suffixes mark it as an archive.

use crate::backend::BackendKind;
use std::path::{Path, PathBuf};

/// Root used when the host supplies none
pub const DEFAULT_ROOT_PATH: &str = "data.tar.zst";

/// Suffixes recognised as archives by default
pub const DEFAULT_ARCHIVE_EXTENSIONS: &[&str] = &[".tar.zst", ".tzst"];

/// Storage configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Directory or archive path
    pub root: PathBuf,
    /// Archive suffixes, matched case-insensitively
    pub archive_extensions: Vec<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            root: PathBuf::from(DEFAULT_ROOT_PATH),
            archive_extensions: DEFAULT_ARCHIVE_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
        }
    }
}

impl StorageConfig {
    /// Default config rooted at `root`
    pub fn rooted(root: impl Into<PathBuf>) -> Self {
        StorageConfig::default().with_root(root)
    }

    /// Set the root path
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Recognise one more archive suffix
    pub fn with_archive_extension(mut self, ext: impl Into<String>) -> Self {
        self.archive_extensions.push(ext.into());
        self
    }

    /// Replace the archive suffixes
    pub fn with_archive_extensions<I, S>(mut self, exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.archive_extensions = exts.into_iter().map(Into::into).collect();
        self
    }

    /// Backend a path selects under this config
    pub fn backend_for(&self, path: &Path) -> BackendKind {
        let name = path.to_string_lossy().to_ascii_lowercase();
        let is_archive = self
            .archive_extensions
            .iter()
            .any(|ext| name.ends_with(&ext.to_ascii_lowercase()));
        if is_archive {
            BackendKind::Archive
        } else {
            BackendKind::Directory
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.root.as_os_str().is_empty() {
            return Err(ConfigError::EmptyRoot);
        }
        for ext in &self.archive_extensions {
            if ext.len() < 2 || !ext.starts_with('.') {
                return Err(ConfigError::InvalidExtension(ext.clone()));
            }
        }
        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Root path is empty
    #[error("Root path is empty")]
    EmptyRoot,

    /// Archive suffix is not of the form `.ext`
    #[error("Invalid archive extension: {0:?}")]
    InvalidExtension(String),
}
