//! Bootstrap manifest codec

use crate::error::{CodecError, CodecResult};
use crate::profile::TargetProfile;
use crate::tables::{Manifest, ResourceTable};
use crate::traits::RecordCodec;
use crate::wire::{WireReader, WireWriter};
use respak_core::{ResourceId, Terminator};
use std::io::Read;

/// One `0x00`-scanned string per listed id, ascending, no count prefix.
/// An absent entry is a zero-length string.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestCodec;

impl<P: TargetProfile> RecordCodec<P> for ManifestCodec {
    fn id(&self) -> ResourceId {
        ResourceId::FileList
    }

    fn encode(&self, table: &ResourceTable<P>, w: &mut WireWriter) -> CodecResult<()> {
        let ResourceTable::Manifest(manifest) = table else {
            return Err(RecordCodec::<P>::wrong_table(self, table));
        };
        for entry in manifest.entries() {
            let name = entry.as_deref().unwrap_or("");
            w.put_string(name.as_bytes(), Terminator::Nul)?;
        }
        Ok(())
    }

    fn decode(&self, r: &mut dyn Read) -> CodecResult<ResourceTable<P>> {
        let mut r = WireReader::new(r);
        let mut entries = Vec::with_capacity(Manifest::ENTRIES);
        for id in ResourceId::listed() {
            let bytes = r.get_string()?;
            if bytes.is_empty() {
                entries.push(None);
                continue;
            }
            let name = String::from_utf8(bytes).map_err(|_| {
                CodecError::bad_shape(format!("manifest name for {} is not UTF-8", id))
            })?;
            entries.push(Some(name));
        }
        Ok(ResourceTable::Manifest(Manifest::from_entries(entries)?))
    }
}
