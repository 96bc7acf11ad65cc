//! Record codec trait definitions.

use crate::error::{CodecError, CodecResult};
use crate::profile::TargetProfile;
use crate::tables::ResourceTable;
use crate::wire::{WireReader, WireWriter};
use respak_core::ResourceId;
use std::io::Read;

/// Per-kind payload codec.
///
/// A codec owns the wire layout of exactly one resource id. Encoding only
/// produces payload bytes; the container envelope and trailer belong to the
/// container writer.
///
/// # Counts
///
/// Decoding sizes every allocation from the counts found in the stream,
/// never from compile-time constants. Encoding writes whatever the table
/// holds.
pub trait RecordCodec<P: TargetProfile>: Send + Sync {
    /// Resource id this codec serves.
    fn id(&self) -> ResourceId;

    /// Append the payload for `table`.
    ///
    /// Fails with [`CodecError::WrongTable`] if the table shape does not
    /// belong to this id.
    fn encode(&self, table: &ResourceTable<P>, w: &mut WireWriter) -> CodecResult<()>;

    /// Read one payload from `r`.
    ///
    /// Stops right after the payload; anything following it (the trailer)
    /// is left unread.
    fn decode(&self, r: &mut dyn Read) -> CodecResult<ResourceTable<P>>;

    /// Build a wrong-table error for this codec.
    fn wrong_table(&self, table: &ResourceTable<P>) -> CodecError {
        CodecError::WrongTable {
            id: self.id(),
            found: table.kind(),
        }
    }
}

/// Encode a table to a standalone payload.
pub fn encode_payload<P: TargetProfile>(
    codec: &dyn RecordCodec<P>,
    table: &ResourceTable<P>,
) -> CodecResult<Vec<u8>> {
    let mut w = WireWriter::new();
    codec.encode(table, &mut w)?;
    Ok(w.into_bytes())
}

/// Decode a standalone payload, rejecting trailing bytes.
pub fn decode_payload<P: TargetProfile>(
    codec: &dyn RecordCodec<P>,
    bytes: &[u8],
) -> CodecResult<ResourceTable<P>> {
    let mut src = bytes;
    let table = codec.decode(&mut src)?;
    if !WireReader::new(&mut src).at_end()? {
        return Err(CodecError::bad_shape(format!(
            "{} payload has trailing bytes",
            codec.id()
        )));
    }
    Ok(table)
}
