//! Target platform profiles
//!
//! The graphics layout differs per target: the ST build stores 32-bit tile
//! lines and packed 32-bit sprite rows, the PC build stores 16-bit tile
//! lines and split mask/picture sprite rows. The choice is made at compile
//! time through the `gfx-pc` feature; there is no runtime switch.
//!
//! The marker types here carry no data. Codecs are generic over them so that
//! both layouts can be exercised from a single build.

/// Target platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Atari ST graphics layout
    AtariSt,
    /// PC (CGA/EGA) graphics layout
    Pc,
}

impl Platform {
    /// Human-readable platform name
    pub fn name(self) -> &'static str {
        match self {
            Platform::AtariSt => "st",
            Platform::Pc => "pc",
        }
    }
}

/// Marker for the Atari ST layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AtariSt;

/// Marker for the PC layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pc;

/// Profile selected for this build
#[cfg(not(feature = "gfx-pc"))]
pub type ActiveProfile = AtariSt;

/// Profile selected for this build
#[cfg(feature = "gfx-pc")]
pub type ActiveProfile = Pc;

/// Platform selected for this build
#[cfg(not(feature = "gfx-pc"))]
pub const ACTIVE_PLATFORM: Platform = Platform::AtariSt;

/// Platform selected for this build
#[cfg(feature = "gfx-pc")]
pub const ACTIVE_PLATFORM: Platform = Platform::Pc;
