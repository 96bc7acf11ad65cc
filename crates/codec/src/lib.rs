//! Payload codecs for respak resource containers
//!
//! This crate turns in-memory resource tables into container payloads and
//! back:
//! - wire: little-endian primitives shared by every layout
//! - tables: record types and the `ResourceTable` they decode into
//! - profile: per-target bitmap sample widths
//! - codecs: one codec per payload shape
//! - registry: resource id to codec lookup
//!
//! Payloads carry no envelope; the container crate adds the header and the
//! checksum trailer.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codecs;
pub mod error;
pub mod profile;
pub mod registry;
pub mod tables;
pub mod traits;
pub mod wire;

pub use codecs::{ArrayCodec, ManifestCodec, PictureCodec, TextCodec, TextListCodec};
pub use error::{CodecError, CodecResult};
pub use profile::TargetProfile;
pub use registry::{standard_codec, CodecRegistry};
pub use tables::{
    Block, Color, Connection, EntityData, HighScore, IntroStep, Manifest, MapRecord, Mark,
    MoveStep, Picture, ResourceTable, Sprite, SpriteMask, Submap, TableRecord, TileBank,
    HISCORE_NAME_SIZE, LINES_PER_TILE, SPRITE_COLS, SPRITE_ROWS, SPRITE_SAMPLES, TILES_PER_BANK,
};
pub use traits::{decode_payload, encode_payload, RecordCodec};
pub use wire::{WireReader, WireRecord, WireWriter};
