//! Container reader
//!
//! Reads are single pass: the stream is wrapped in a [`ChecksumReader`],
//! the header is checked, the payload is decoded, and the trailer is
//! verified last. A decoded table is only returned once its trailer
//! matches.

use crate::checksum::ChecksumReader;
use crate::error::{ContainerError, ContainerResult};
use respak_codec::{CodecError, CodecRegistry, Manifest, ResourceTable, TargetProfile, WireReader};
use respak_core::{ActiveProfile, ResourceHeader, ResourceId, BOOTSTRAP_RESOURCE_NAME, HEADER_SIZE};
use respak_storage::ResourceRoot;
use std::io::Read;
use tracing::{debug, warn};

/// Read and validate a container header
///
/// Checks magic and version; the id is returned raw inside the header.
pub fn read_header(r: &mut dyn Read) -> ContainerResult<ResourceHeader> {
    let mut bytes = [0u8; HEADER_SIZE];
    r.read_exact(&mut bytes)
        .map_err(|e| CodecError::from_read(e, HEADER_SIZE))?;
    let header = ResourceHeader::from_bytes(&bytes);
    header.validate()?;
    Ok(header)
}

/// Drain the rest of a checked stream and compare its trailer
pub fn verify_checksum<R: Read>(reader: ChecksumReader<R>) -> ContainerResult<u32> {
    reader.finish()
}

/// Decodes containers for one profile
#[derive(Debug, Default)]
pub struct ContainerReader<P: TargetProfile = ActiveProfile> {
    registry: CodecRegistry<P>,
}

impl<P: TargetProfile> ContainerReader<P> {
    /// Reader with the standard codecs
    pub fn new() -> Self {
        Self::with_registry(CodecRegistry::standard())
    }

    /// Reader with a custom registry
    pub fn with_registry(registry: CodecRegistry<P>) -> Self {
        ContainerReader { registry }
    }

    /// Codecs in use
    pub fn registry(&self) -> &CodecRegistry<P> {
        &self.registry
    }

    /// Decode one payload for `id`
    pub fn read_payload(&self, id: ResourceId, r: &mut dyn Read) -> ContainerResult<ResourceTable<P>> {
        Ok(self.registry.decode(id, r)?)
    }

    /// Read a whole container expected to hold `id`
    pub fn read_from<R: Read>(&self, id: ResourceId, stream: R) -> ContainerResult<ResourceTable<P>> {
        let result = self.read_checked(id, ChecksumReader::new(stream));
        match &result {
            Ok(table) => debug!(id = %id, records = table.len(), "read container"),
            Err(e) if e.is_format_failure() || e.is_integrity_failure() => {
                warn!(id = %id, error = %e, "rejected container")
            }
            Err(_) => {}
        }
        result
    }

    /// Read a container held in memory
    pub fn read_bytes(&self, id: ResourceId, bytes: &[u8]) -> ContainerResult<ResourceTable<P>> {
        self.read_from(id, bytes)
    }

    /// Open `name` under `root` and read it as `id`
    pub fn open(
        &self,
        root: &ResourceRoot,
        name: &str,
        id: ResourceId,
    ) -> ContainerResult<ResourceTable<P>> {
        let handle = root.open_resource(name)?;
        self.read_from(id, handle)
    }

    /// Read the bootstrap manifest under `root`
    pub fn load_manifest(&self, root: &ResourceRoot) -> ContainerResult<Manifest> {
        match self.open(root, BOOTSTRAP_RESOURCE_NAME, ResourceId::FileList)? {
            ResourceTable::Manifest(manifest) => Ok(manifest),
            other => Err(CodecError::WrongTable {
                id: ResourceId::FileList,
                found: other.kind(),
            }
            .into()),
        }
    }

    fn read_checked<R: Read>(
        &self,
        id: ResourceId,
        mut checked: ChecksumReader<R>,
    ) -> ContainerResult<ResourceTable<P>> {
        let header = read_header(&mut checked)?;
        let found = header.id().ok_or(ContainerError::UnknownResource(header.resource_id))?;
        if found != id {
            return Err(ContainerError::BadId {
                requested: id,
                found: header.resource_id,
            });
        }
        if !id.available_on(P::PLATFORM) {
            return Err(ContainerError::UnavailableOnProfile {
                id,
                platform: P::PLATFORM,
            });
        }

        let table = self.read_payload(id, &mut checked)?;
        if !WireReader::new(&mut checked).at_end()? {
            return Err(CodecError::bad_shape(format!("{} payload has trailing bytes", id)).into());
        }
        verify_checksum(checked)?;
        Ok(table)
    }
}
