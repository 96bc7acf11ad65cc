//! Resource root context
//!
//! Owns the active backend. Every resource access goes through a
//! [`ResourceRoot`]; there is no process-wide state. The backend is chosen
//! once per root path from its suffix and released exactly once, either by
//! [`ResourceRoot::clear_root_path`], by switching roots, or on drop.

use crate::backend::{
    ArchiveBackend, BackendKind, DirectoryBackend, ResourceHandle, StorageBackend,
};
use crate::config::StorageConfig;
use crate::error::{StorageError, StorageResult};
use std::path::Path;
use tracing::{debug, info};

/// Active resource root
#[derive(Default)]
pub struct ResourceRoot {
    config: StorageConfig,
    backend: Option<Box<dyn StorageBackend>>,
}

impl ResourceRoot {
    /// Root with no active path, using default archive suffixes
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `config` and activate its root
    pub fn from_config(config: StorageConfig) -> StorageResult<Self> {
        config.validate()?;
        let root_path = config.root.clone();
        let mut root = ResourceRoot {
            config,
            backend: None,
        };
        root.set_root_path(root_path)?;
        Ok(root)
    }

    /// Activate `path`, releasing any previous backend first
    ///
    /// A path ending in a configured archive suffix opens an
    /// [`ArchiveBackend`]; anything else is a [`DirectoryBackend`].
    pub fn set_root_path(&mut self, path: impl AsRef<Path>) -> StorageResult<()> {
        let path = path.as_ref();
        self.clear_root_path();

        let backend: Box<dyn StorageBackend> = match self.config.backend_for(path) {
            BackendKind::Archive => Box::new(ArchiveBackend::open_archive(path)?),
            BackendKind::Directory => Box::new(DirectoryBackend::open_root(path)?),
        };
        info!(
            root = %path.display(),
            backend = %backend.kind(),
            "resource root activated"
        );
        self.config.root = path.to_path_buf();
        self.backend = Some(backend);
        Ok(())
    }

    /// Release the active backend, if any
    pub fn clear_root_path(&mut self) {
        if let Some(backend) = self.backend.take() {
            info!(
                root = %backend.root().display(),
                backend = %backend.kind(),
                "resource root released"
            );
        }
    }

    /// Whether a root is active
    pub fn is_active(&self) -> bool {
        self.backend.is_some()
    }

    /// Active backend
    pub fn backend(&self) -> StorageResult<&dyn StorageBackend> {
        match &self.backend {
            Some(backend) => Ok(backend.as_ref()),
            None => Err(StorageError::NoRoot),
        }
    }

    /// Configuration in effect
    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// Open a resource by relative name
    pub fn open_resource(&self, name: &str) -> StorageResult<ResourceHandle<'_>> {
        self.backend()?.open(name)
    }

    /// Read a whole resource
    pub fn read_resource(&self, name: &str) -> StorageResult<Vec<u8>> {
        let mut handle = self.open_resource(name)?;
        let data = handle.read_all()?;
        debug!(resource = name, bytes = data.len(), "read resource");
        Ok(data)
    }
}

impl Drop for ResourceRoot {
    fn drop(&mut self) {
        self.clear_root_path();
    }
}

impl std::fmt::Debug for ResourceRoot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceRoot")
            .field("root", &self.config.root)
            .field("backend", &self.backend.as_ref().map(|b| b.kind()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_no_root() {
        let root = ResourceRoot::new();
        assert!(!root.is_active());
        assert!(matches!(
            root.open_resource("filelist.dat"),
            Err(StorageError::NoRoot)
        ));
    }

    #[test]
    fn test_directory_root() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("filelist.dat"), b"abc").unwrap();

        let mut root = ResourceRoot::new();
        root.set_root_path(dir.path()).unwrap();
        assert!(root.is_active());
        assert_eq!(root.backend().unwrap().kind(), BackendKind::Directory);
        assert_eq!(root.read_resource("filelist.dat").unwrap(), b"abc");
    }

    #[test]
    fn test_clear_root() {
        let dir = tempdir().unwrap();
        let mut root = ResourceRoot::new();
        root.set_root_path(dir.path()).unwrap();
        root.clear_root_path();
        assert!(!root.is_active());
        assert!(matches!(root.backend(), Err(StorageError::NoRoot)));
        root.clear_root_path();
    }

    #[test]
    fn test_failed_switch_releases_previous() {
        let dir = tempdir().unwrap();
        let mut root = ResourceRoot::new();
        root.set_root_path(dir.path()).unwrap();
        assert!(root.set_root_path(dir.path().join("missing")).is_err());
        assert!(!root.is_active());
    }

    #[test]
    fn test_from_config_validates() {
        let result = ResourceRoot::from_config(StorageConfig::rooted(""));
        assert!(matches!(result, Err(StorageError::Config(_))));
    }

    #[test]
    fn test_from_config_directory() {
        let dir = tempdir().unwrap();
        let root = ResourceRoot::from_config(StorageConfig::rooted(dir.path())).unwrap();
        assert_eq!(root.backend().unwrap().root(), dir.path());
        assert_eq!(root.config().root, dir.path());
    }
}
