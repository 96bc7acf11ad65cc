//! Whole-set loading
//!
//! [`ResourceLoader`] reads the manifest from the active root, then every
//! resource the manifest names. The result is an owned [`LoadedResources`]
//! whose tables are released together when it is dropped or unloaded.

use crate::error::{ContainerError, ContainerResult};
use crate::reader::ContainerReader;
use respak_codec::{Manifest, ResourceTable, TargetProfile};
use respak_core::{ActiveProfile, ResourceId};
use respak_storage::{ResourceRoot, StorageError};
use rustc_hash::FxHashMap;
use tracing::{debug, info};

/// Loads containers from a resource root
#[derive(Debug)]
pub struct ResourceLoader<'r, P: TargetProfile = ActiveProfile> {
    root: &'r ResourceRoot,
    reader: ContainerReader<P>,
}

impl<'r, P: TargetProfile> ResourceLoader<'r, P> {
    /// Loader over `root` with the standard codecs
    pub fn new(root: &'r ResourceRoot) -> Self {
        Self::with_reader(root, ContainerReader::new())
    }

    /// Loader with a custom reader
    pub fn with_reader(root: &'r ResourceRoot, reader: ContainerReader<P>) -> Self {
        ResourceLoader { root, reader }
    }

    /// Read the bootstrap manifest
    pub fn load_manifest(&self) -> ContainerResult<Manifest> {
        self.reader.load_manifest(self.root)
    }

    /// Read one resource through the path `manifest` gives it
    pub fn load(&self, manifest: &Manifest, id: ResourceId) -> ContainerResult<ResourceTable<P>> {
        if !id.available_on(P::PLATFORM) {
            return Err(ContainerError::UnavailableOnProfile {
                id,
                platform: P::PLATFORM,
            });
        }
        let name = manifest.name_of(id).ok_or_else(|| StorageError::not_found(id.name()))?;
        self.reader.open(self.root, name, id)
    }

    /// Read the manifest and every resource it names
    ///
    /// Stops at the first failure; nothing partially loaded is returned.
    pub fn load_all(&self) -> ContainerResult<LoadedResources<P>> {
        let manifest = self.load_manifest()?;
        let mut tables = FxHashMap::default();
        for (id, name) in manifest.names() {
            if !id.available_on(P::PLATFORM) {
                debug!(id = %id, resource = name, "skipping resource absent on profile");
                continue;
            }
            let table = self.reader.open(self.root, name, id)?;
            tables.insert(id, table);
        }
        info!(
            platform = P::PLATFORM.name(),
            resources = tables.len(),
            "loaded resource set"
        );
        Ok(LoadedResources { manifest, tables })
    }
}

/// A fully loaded resource set
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedResources<P: TargetProfile = ActiveProfile> {
    manifest: Manifest,
    tables: FxHashMap<ResourceId, ResourceTable<P>>,
}

impl<P: TargetProfile> LoadedResources<P> {
    /// Table for `id`, if loaded
    pub fn get(&self, id: ResourceId) -> Option<&ResourceTable<P>> {
        self.tables.get(&id)
    }

    /// Manifest the set was loaded through
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Number of loaded tables, excluding the manifest
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether no table was loaded
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Loaded ids in ascending order
    pub fn ids(&self) -> Vec<ResourceId> {
        let mut ids: Vec<_> = self.tables.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Iterate loaded tables in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (ResourceId, &ResourceTable<P>)> {
        self.tables.iter().map(|(id, table)| (*id, table))
    }

    /// Release every table
    pub fn unload(self) {}
}

impl<P: TargetProfile> Drop for LoadedResources<P> {
    fn drop(&mut self) {
        if !self.tables.is_empty() {
            debug!(resources = self.tables.len(), "unloading resource set");
        }
    }
}
