//! Per-kind codecs

mod array;
mod manifest;
mod picture;
mod text;

pub use array::ArrayCodec;
pub use manifest::ManifestCodec;
pub use picture::PictureCodec;
pub use text::{TextCodec, TextListCodec};
