//! Resource id to codec registry

use crate::codecs::{ArrayCodec, ManifestCodec, PictureCodec, TextCodec, TextListCodec};
use crate::error::{CodecError, CodecResult};
use crate::profile::TargetProfile;
use crate::tables::{
    Block, Color, Connection, EntityData, HighScore, IntroStep, MapRecord, Mark, MoveStep,
    ResourceTable, Sprite, Submap, TileBank,
};
use crate::traits::RecordCodec;
use crate::wire::WireWriter;
use respak_core::{ActiveProfile, ResourceId};
use rustc_hash::FxHashMap;
use std::fmt;
use std::io::Read;
use tracing::trace;

/// Get the standard codec for an id.
///
/// Returns [`CodecError::Unregistered`] for ids the profile does not carry.
pub fn standard_codec<P: TargetProfile>(id: ResourceId) -> CodecResult<Box<dyn RecordCodec<P>>> {
    if !id.available_on(P::PLATFORM) {
        return Err(CodecError::Unregistered(id));
    }
    let codec: Box<dyn RecordCodec<P>> = match id {
        ResourceId::FileList => Box::new(ManifestCodec),
        ResourceId::Palette => Box::new(ArrayCodec::<Color>::new(id)),
        ResourceId::EntityData => Box::new(ArrayCodec::<EntityData>::new(id)),
        ResourceId::SpriteSequences
        | ResourceId::BlockNumbers
        | ResourceId::EntityFlags
        | ResourceId::IntroSpriteLists
        | ResourceId::IntroStepOffsets => Box::new(ArrayCodec::<u8>::new(id)),
        ResourceId::MoveSteps => Box::new(ArrayCodec::<MoveStep>::new(id)),
        ResourceId::Maps => Box::new(ArrayCodec::<MapRecord>::new(id)),
        ResourceId::Submaps => Box::new(ArrayCodec::<Submap>::new(id)),
        ResourceId::Connections => Box::new(ArrayCodec::<Connection>::new(id)),
        ResourceId::Blocks => Box::new(ArrayCodec::<Block>::new(id)),
        ResourceId::Marks => Box::new(ArrayCodec::<Mark>::new(id)),
        ResourceId::IntroSteps => Box::new(ArrayCodec::<IntroStep>::new(id)),
        ResourceId::IntroTexts => Box::new(TextListCodec::new(id)),
        ResourceId::GameOverText | ResourceId::PausedText => Box::new(TextCodec::new(id)),
        ResourceId::SpritesData => Box::new(ArrayCodec::<Sprite<P>>::new(id)),
        ResourceId::TilesData => Box::new(ArrayCodec::<TileBank<P>>::new(id)),
        ResourceId::HighScores => Box::new(ArrayCodec::<HighScore>::new(id)),
        ResourceId::PicHallOfFame | ResourceId::PicCongrats | ResourceId::PicSplash => {
            Box::new(PictureCodec::new(id))
        }
        ResourceId::ScreenHallOfFameTitle
        | ResourceId::ScreenTitle
        | ResourceId::ScreenCopyright
        | ResourceId::ScreenCongrats => Box::new(TextCodec::new(id)),
    };
    Ok(codec)
}

/// Codecs keyed by resource id
pub struct CodecRegistry<P: TargetProfile = ActiveProfile> {
    codecs: FxHashMap<ResourceId, Box<dyn RecordCodec<P>>>,
}

impl<P: TargetProfile> CodecRegistry<P> {
    /// Empty registry
    pub fn new() -> Self {
        CodecRegistry {
            codecs: FxHashMap::default(),
        }
    }

    /// Registry holding the standard codec of every id on this profile
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for id in ResourceId::ALL {
            if let Ok(codec) = standard_codec::<P>(id) {
                registry.register(codec);
            }
        }
        registry
    }

    /// Add a codec, returning the one it replaces
    pub fn register(&mut self, codec: Box<dyn RecordCodec<P>>) -> Option<Box<dyn RecordCodec<P>>> {
        self.codecs.insert(codec.id(), codec)
    }

    /// Codec for `id`
    pub fn get(&self, id: ResourceId) -> CodecResult<&dyn RecordCodec<P>> {
        match self.codecs.get(&id) {
            Some(codec) => Ok(codec.as_ref()),
            None => Err(CodecError::Unregistered(id)),
        }
    }

    /// Whether `id` has a codec
    pub fn contains(&self, id: ResourceId) -> bool {
        self.codecs.contains_key(&id)
    }

    /// Registered ids in ascending order
    pub fn ids(&self) -> Vec<ResourceId> {
        let mut ids: Vec<_> = self.codecs.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Append the payload of `table` under `id`
    pub fn encode_into(
        &self,
        id: ResourceId,
        table: &ResourceTable<P>,
        w: &mut WireWriter,
    ) -> CodecResult<()> {
        let start = w.len();
        self.get(id)?.encode(table, w)?;
        trace!(id = %id, bytes = w.len() - start, "encoded payload");
        Ok(())
    }

    /// Encode `table` under `id` to a standalone payload
    pub fn encode(&self, id: ResourceId, table: &ResourceTable<P>) -> CodecResult<Vec<u8>> {
        let mut w = WireWriter::new();
        self.encode_into(id, table, &mut w)?;
        Ok(w.into_bytes())
    }

    /// Decode one payload for `id` from `r`
    pub fn decode(&self, id: ResourceId, r: &mut dyn Read) -> CodecResult<ResourceTable<P>> {
        let table = self.get(id)?.decode(r)?;
        trace!(id = %id, records = table.len(), "decoded payload");
        Ok(table)
    }
}

impl<P: TargetProfile> Default for CodecRegistry<P> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<P: TargetProfile> fmt::Debug for CodecRegistry<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodecRegistry")
            .field("platform", &P::PLATFORM)
            .field("ids", &self.ids())
            .finish()
    }
}
