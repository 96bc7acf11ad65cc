//! Picture codec (ST)

use crate::error::{CodecError, CodecResult};
use crate::profile::TargetProfile;
use crate::tables::{Picture, ResourceTable};
use crate::traits::RecordCodec;
use crate::wire::{WireReader, WireWriter};
use respak_core::ResourceId;
use std::io::Read;

const PREALLOC_WORDS: usize = 1 << 16;

/// `{width, height, x, y: u16}` then `width * height / 8` `u32` words
#[derive(Debug, Clone, Copy)]
pub struct PictureCodec {
    id: ResourceId,
}

impl PictureCodec {
    /// Codec for `id`
    pub fn new(id: ResourceId) -> Self {
        PictureCodec { id }
    }
}

impl<P: TargetProfile> RecordCodec<P> for PictureCodec {
    fn id(&self) -> ResourceId {
        self.id
    }

    fn encode(&self, table: &ResourceTable<P>, w: &mut WireWriter) -> CodecResult<()> {
        let ResourceTable::Picture(picture) = table else {
            return Err(RecordCodec::<P>::wrong_table(self, table));
        };
        if picture.pixels.len() != picture.expected_words() {
            return Err(CodecError::bad_shape(format!(
                "{}x{} picture needs {} pixel words, has {}",
                picture.width,
                picture.height,
                picture.expected_words(),
                picture.pixels.len()
            )));
        }
        w.put_u16(picture.width)?;
        w.put_u16(picture.height)?;
        w.put_u16(picture.x)?;
        w.put_u16(picture.y)?;
        for word in &picture.pixels {
            w.put_u32(*word)?;
        }
        Ok(())
    }

    fn decode(&self, r: &mut dyn Read) -> CodecResult<ResourceTable<P>> {
        let mut r = WireReader::new(r);
        let mut picture = Picture {
            width: r.get_u16()?,
            height: r.get_u16()?,
            x: r.get_u16()?,
            y: r.get_u16()?,
            pixels: Vec::new(),
        };
        let words = picture.expected_words();
        // A corrupt header can claim gigabytes; grow past this as words arrive.
        picture.pixels.reserve_exact(words.min(PREALLOC_WORDS));
        for _ in 0..words {
            picture.pixels.push(r.get_u32()?);
        }
        Ok(ResourceTable::Picture(picture))
    }
}
