//! Narrative text codecs

use crate::error::CodecResult;
use crate::profile::TargetProfile;
use crate::tables::ResourceTable;
use crate::traits::RecordCodec;
use crate::wire::{WireReader, WireWriter};
use respak_core::{ResourceId, Terminator, Text};
use std::io::Read;

/// A single `0xFE`-scanned string
#[derive(Debug, Clone, Copy)]
pub struct TextCodec {
    id: ResourceId,
}

impl TextCodec {
    /// Codec for `id`
    pub fn new(id: ResourceId) -> Self {
        TextCodec { id }
    }
}

impl<P: TargetProfile> RecordCodec<P> for TextCodec {
    fn id(&self) -> ResourceId {
        self.id
    }

    fn encode(&self, table: &ResourceTable<P>, w: &mut WireWriter) -> CodecResult<()> {
        let ResourceTable::Text(text) = table else {
            return Err(RecordCodec::<P>::wrong_table(self, table));
        };
        w.put_string(text.as_bytes(), Terminator::Narrative)
    }

    fn decode(&self, r: &mut dyn Read) -> CodecResult<ResourceTable<P>> {
        let bytes = WireReader::new(r).get_string()?;
        Ok(ResourceTable::Text(Text::new(bytes)))
    }
}

/// `u16` count, then that many `0xFE`-scanned strings
#[derive(Debug, Clone, Copy)]
pub struct TextListCodec {
    id: ResourceId,
}

impl TextListCodec {
    /// Codec for `id`
    pub fn new(id: ResourceId) -> Self {
        TextListCodec { id }
    }
}

impl<P: TargetProfile> RecordCodec<P> for TextListCodec {
    fn id(&self) -> ResourceId {
        self.id
    }

    fn encode(&self, table: &ResourceTable<P>, w: &mut WireWriter) -> CodecResult<()> {
        let ResourceTable::IntroTexts(texts) = table else {
            return Err(RecordCodec::<P>::wrong_table(self, table));
        };
        w.put_count("text", texts.len())?;
        for text in texts {
            w.put_string(text.as_bytes(), Terminator::Narrative)?;
        }
        Ok(())
    }

    fn decode(&self, r: &mut dyn Read) -> CodecResult<ResourceTable<P>> {
        let mut r = WireReader::new(r);
        let count = r.get_count()?;
        let mut texts = Vec::with_capacity(count);
        for _ in 0..count {
            texts.push(Text::new(r.get_string()?));
        }
        Ok(ResourceTable::IntroTexts(texts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecError;
    use crate::traits::{decode_payload, encode_payload};
    use respak_core::AtariSt;

    #[test]
    fn test_text_with_zero_byte_roundtrip() {
        let codec = TextCodec::new(ResourceId::GameOverText);
        let table = ResourceTable::<AtariSt>::Text(Text::new(b"GAME\0OVER".to_vec()));
        let bytes = encode_payload::<AtariSt>(&codec, &table).unwrap();
        assert_eq!(&bytes[..2], &[9, 0]);
        assert_eq!(decode_payload::<AtariSt>(&codec, &bytes).unwrap(), table);
    }

    #[test]
    fn test_text_stops_at_narrative_terminator() {
        let codec = TextCodec::new(ResourceId::PausedText);
        let table = ResourceTable::<AtariSt>::Text(Text::new(b"PAUSED\xFEjunk".to_vec()));
        let bytes = encode_payload::<AtariSt>(&codec, &table).unwrap();
        assert_eq!(bytes, b"\x06\x00PAUSED".to_vec());
    }

    #[test]
    fn test_overlong_text() {
        let codec = TextCodec::new(ResourceId::PausedText);
        let table = ResourceTable::<AtariSt>::Text(Text::new(vec![b'x'; 65536]));
        assert!(matches!(
            encode_payload::<AtariSt>(&codec, &table),
            Err(CodecError::TooLong { .. })
        ));
    }

    #[test]
    fn test_text_list_roundtrip() {
        let codec = TextListCodec::new(ResourceId::IntroTexts);
        let table = ResourceTable::<AtariSt>::IntroTexts(vec![
            Text::from("WELCOME TO\0SOUTH AMERICA"),
            Text::default(),
            Text::from("EGYPT"),
        ]);
        let bytes = encode_payload::<AtariSt>(&codec, &table).unwrap();
        assert_eq!(&bytes[..2], &[3, 0]);
        assert_eq!(decode_payload::<AtariSt>(&codec, &bytes).unwrap(), table);
    }
}
