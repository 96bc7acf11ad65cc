//! Counted array codec

use crate::error::CodecResult;
use crate::profile::TargetProfile;
use crate::tables::{ResourceTable, TableRecord};
use crate::traits::RecordCodec;
use crate::wire::{get_records, put_records, WireReader, WireWriter};
use respak_core::ResourceId;
use std::fmt;
use std::io::Read;
use std::marker::PhantomData;

/// `u16` count, then that many fixed-layout records
///
/// Serves raw byte arrays, structured record arrays and the bitmap tables
/// alike; the record type fixes the element layout.
pub struct ArrayCodec<T> {
    id: ResourceId,
    _record: PhantomData<fn() -> T>,
}

impl<T> ArrayCodec<T> {
    /// Codec for `id` with records of type `T`
    pub fn new(id: ResourceId) -> Self {
        ArrayCodec {
            id,
            _record: PhantomData,
        }
    }
}

impl<T> fmt::Debug for ArrayCodec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayCodec")
            .field("id", &self.id)
            .field("record", &std::any::type_name::<T>())
            .finish()
    }
}

impl<P, T> RecordCodec<P> for ArrayCodec<T>
where
    P: TargetProfile,
    T: TableRecord<P>,
{
    fn id(&self) -> ResourceId {
        self.id
    }

    fn encode(&self, table: &ResourceTable<P>, w: &mut WireWriter) -> CodecResult<()> {
        let records = T::unwrap(table).ok_or_else(|| RecordCodec::<P>::wrong_table(self, table))?;
        put_records(w, T::WHAT, records)
    }

    fn decode(&self, r: &mut dyn Read) -> CodecResult<ResourceTable<P>> {
        let records = get_records::<T>(&mut WireReader::new(r))?;
        Ok(T::wrap(records))
    }
}
