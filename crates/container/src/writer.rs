//! Container writer
//!
//! Builds containers offline. Each container is written as:
//! 1. open the target for read-write, creating parent directories
//! 2. header
//! 3. payload from the id's codec
//! 4. trailer, computed by rewinding and re-reading the file
//!
//! There is no rollback: a container that fails mid-write stays on disk and
//! is rejected later by trailer verification.

use crate::checksum::append_trailer;
use crate::config::WriterConfig;
use crate::error::{ContainerError, ContainerResult};
use respak_codec::{CodecRegistry, Manifest, ResourceTable, TargetProfile, WireWriter};
use respak_core::{ActiveProfile, ResourceHeader, ResourceId, BOOTSTRAP_RESOURCE_NAME};
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Outcome of one written container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenContainer {
    /// Resource id
    pub id: ResourceId,
    /// File written
    pub path: PathBuf,
    /// Total size including the trailer
    pub len: u64,
    /// Trailer value
    pub crc: u32,
}

/// Writes containers under an output directory
pub struct ContainerWriter<P: TargetProfile = ActiveProfile> {
    config: WriterConfig,
    registry: CodecRegistry<P>,
}

impl<P: TargetProfile> ContainerWriter<P> {
    /// Writer with the standard codecs
    pub fn new(config: WriterConfig) -> ContainerResult<Self> {
        Self::with_registry(config, CodecRegistry::standard())
    }

    /// Writer with a custom registry
    pub fn with_registry(config: WriterConfig, registry: CodecRegistry<P>) -> ContainerResult<Self> {
        config.validate()?;
        Ok(ContainerWriter { config, registry })
    }

    /// Output directory
    pub fn output_dir(&self) -> &Path {
        &self.config.output_dir
    }

    /// File a container for `id` is written to
    pub fn path_for(&self, id: ResourceId) -> ContainerResult<PathBuf> {
        let name = match id {
            ResourceId::FileList => BOOTSTRAP_RESOURCE_NAME,
            _ => id
                .path_on(P::PLATFORM)
                .ok_or(ContainerError::UnavailableOnProfile {
                    id,
                    platform: P::PLATFORM,
                })?,
        };
        let mut path = self.config.output_dir.clone();
        for part in name.split('/') {
            path.push(part);
        }
        Ok(path)
    }

    /// Write one container
    pub fn write_container(
        &self,
        id: ResourceId,
        table: &ResourceTable<P>,
    ) -> ContainerResult<WrittenContainer> {
        let path = self.path_for(id)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)?;
        let mut out = BufWriter::new(file);
        out.write_all(&ResourceHeader::new(id).to_bytes())?;

        let mut payload = WireWriter::new();
        if let Err(e) = self.registry.encode_into(id, table, &mut payload) {
            warn!(id = %id, path = %path.display(), error = %e, "payload encoding failed");
            return Err(e.into());
        }
        out.write_all(payload.as_bytes())?;

        let mut file = out.into_inner().map_err(|e| e.into_error())?;
        let crc = append_trailer(&mut file, self.config.checksum_chunk_size)?;
        let len = file.metadata()?.len();

        debug!(id = %id, path = %path.display(), bytes = len, crc, "wrote container");
        Ok(WrittenContainer { id, path, len, crc })
    }

    /// Write the standard manifest for this profile
    pub fn write_manifest(&self) -> ContainerResult<WrittenContainer> {
        let manifest = Manifest::for_platform(P::PLATFORM);
        self.write_container(ResourceId::FileList, &ResourceTable::Manifest(manifest))
    }

    /// Write a full resource set
    ///
    /// The manifest goes first: the supplied one if `tables` holds a
    /// [`ResourceId::FileList`] entry, otherwise the standard one. The rest
    /// follow in ascending id order; ids absent on this profile are skipped.
    /// Stops at the first failure.
    pub fn write_all<I>(&self, tables: I) -> ContainerResult<Vec<WrittenContainer>>
    where
        I: IntoIterator<Item = (ResourceId, ResourceTable<P>)>,
    {
        let mut tables: Vec<_> = tables.into_iter().collect();
        tables.sort_by_key(|(id, _)| *id);

        let mut written = Vec::with_capacity(tables.len() + 1);
        match tables.first() {
            Some((ResourceId::FileList, manifest)) => {
                written.push(self.write_container(ResourceId::FileList, manifest)?);
            }
            _ => written.push(self.write_manifest()?),
        }

        for (id, table) in tables.iter().filter(|(id, _)| *id != ResourceId::FileList) {
            if !id.available_on(P::PLATFORM) {
                warn!(id = %id, platform = P::PLATFORM.name(), "skipping resource absent on profile");
                continue;
            }
            written.push(self.write_container(*id, table)?);
        }

        info!(
            output = %self.config.output_dir.display(),
            containers = written.len(),
            "wrote resource set"
        );
        Ok(written)
    }
}
