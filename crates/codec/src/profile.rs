//! Per-profile bitmap sample types

use crate::error::CodecResult;
use crate::tables::SpriteMask;
use crate::wire::{WireReader, WireRecord, WireWriter};
use respak_core::{AtariSt, Pc, Platform};
use std::fmt::Debug;

/// Graphics layout of a build target
///
/// Implemented by the zero-sized profile markers. Bitmap codecs are generic
/// over it, so the sample width is fixed at compile time.
pub trait TargetProfile:
    Debug + Clone + Copy + PartialEq + Eq + Default + Send + Sync + 'static
{
    /// Platform this profile describes
    const PLATFORM: Platform;

    /// One line of a tile
    type TileSample: WireRecord + Debug + Clone + Copy + PartialEq + Eq + Default + Send + Sync;

    /// One row of one sprite plane
    type SpriteSample: WireRecord + Debug + Clone + Copy + PartialEq + Eq + Default + Send + Sync;
}

impl TargetProfile for AtariSt {
    const PLATFORM: Platform = Platform::AtariSt;
    type TileSample = u32;
    type SpriteSample = u32;
}

impl TargetProfile for Pc {
    const PLATFORM: Platform = Platform::Pc;
    type TileSample = u16;
    type SpriteSample = SpriteMask;
}

impl WireRecord for SpriteMask {
    fn encode(&self, w: &mut WireWriter) -> CodecResult<()> {
        w.put_u16(self.mask)?;
        w.put_u16(self.pict)
    }

    fn decode(r: &mut WireReader<'_>) -> CodecResult<Self> {
        Ok(SpriteMask {
            mask: r.get_u16()?,
            pict: r.get_u16()?,
        })
    }
}
