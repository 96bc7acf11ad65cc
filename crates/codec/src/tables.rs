//! In-memory resource tables
//!
//! Each record type here has a fixed little-endian wire layout implemented
//! through [`WireRecord`]. Fields are encoded one at a time in declaration
//! order with no padding.
//!
//! | Record | Wire size |
//! |--------|-----------|
//! | Color | 4 |
//! | EntityData | 9 |
//! | MoveStep | 3 |
//! | MapRecord | 8 + string |
//! | Submap | 8 |
//! | Connection | 7 |
//! | Block | 4 |
//! | Mark | 4 |
//! | IntroStep | 8 |
//! | HighScore | 14 |

use crate::error::{CodecError, CodecResult};
use crate::profile::TargetProfile;
use crate::wire::{WireReader, WireRecord, WireWriter};
use respak_core::{ActiveProfile, Platform, ResourceId, Terminator, Text};

/// Sprite planes
pub const SPRITE_COLS: usize = 4;
/// Rows per sprite plane
pub const SPRITE_ROWS: usize = 21;
/// Samples per sprite
pub const SPRITE_SAMPLES: usize = SPRITE_COLS * SPRITE_ROWS;
/// Tiles per bank
pub const TILES_PER_BANK: usize = 256;
/// Lines per tile
pub const LINES_PER_TILE: usize = 8;
/// Bytes in a high score name
pub const HISCORE_NAME_SIZE: usize = 10;

/// Palette entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Unused, kept for alignment with the runtime palette
    pub pad: u8,
}

/// Entity metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EntityData {
    /// Width
    pub w: u8,
    /// Height
    pub h: u8,
    /// Sprite
    pub spr: u16,
    /// Sprite sequence index
    pub sni: u16,
    /// Trigger width
    pub trig_w: u8,
    /// Trigger height
    pub trig_h: u8,
    /// Sound
    pub snd: u8,
}

/// Entity movement step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveStep {
    /// Repeat count
    pub count: u8,
    /// Horizontal delta
    pub dx: i8,
    /// Vertical delta
    pub dy: i8,
}

/// Map record
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MapRecord {
    /// Start x
    pub x: u16,
    /// Start y
    pub y: u16,
    /// First row
    pub row: u16,
    /// First submap
    pub submap: u16,
    /// Tune name, a `0x00`-terminated path in memory
    pub tune: Text,
}

/// Submap record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Submap {
    /// Tile page
    pub page: u16,
    /// First block number
    pub bnum: u16,
    /// First connection
    pub connect: u16,
    /// First mark
    pub mark: u16,
}

/// Connection between submaps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Connection {
    /// Direction
    pub dir: u8,
    /// Trigger x
    pub x: u8,
    /// Trigger y
    pub y: u8,
    /// Scroll step
    pub step: u8,
    /// Target dx
    pub dx: u8,
    /// Target dy
    pub dy: u8,
    /// Target submap
    pub submap: u8,
}

/// 2x2 tile block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Block {
    /// Tile numbers
    pub tiles: [u8; 4],
}

/// Entity placement mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Mark {
    /// Packed position
    pub xy: u8,
    /// Left/top
    pub lt: u8,
    /// Entity
    pub ent: u8,
    /// Flags
    pub flags: u8,
}

/// Map intro animation step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntroStep {
    /// Repeat count
    pub count: u16,
    /// Horizontal delta
    pub dx: u16,
    /// Vertical delta
    pub dy: u16,
    /// Base frame
    pub base: u16,
}

/// Hall of fame entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HighScore {
    /// Score
    pub score: u32,
    /// Name bytes
    pub name: [u8; HISCORE_NAME_SIZE],
}

/// PC sprite row sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpriteMask {
    /// Transparency mask
    pub mask: u16,
    /// Picture bits
    pub pict: u16,
}

/// One sprite, plane-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite<P: TargetProfile = ActiveProfile> {
    samples: Vec<P::SpriteSample>,
}

impl<P: TargetProfile> Sprite<P> {
    /// Blank sprite
    pub fn blank() -> Self {
        Sprite {
            samples: vec![Default::default(); SPRITE_SAMPLES],
        }
    }

    /// Build from plane-major samples
    pub fn from_samples(samples: Vec<P::SpriteSample>) -> CodecResult<Self> {
        if samples.len() != SPRITE_SAMPLES {
            return Err(CodecError::bad_shape(format!(
                "sprite has {} samples, expected {}",
                samples.len(),
                SPRITE_SAMPLES
            )));
        }
        Ok(Sprite { samples })
    }

    /// Sample at `col`, `row`
    pub fn sample(&self, col: usize, row: usize) -> Option<&P::SpriteSample> {
        if col >= SPRITE_COLS || row >= SPRITE_ROWS {
            return None;
        }
        self.samples.get(col * SPRITE_ROWS + row)
    }

    /// Mutable sample at `col`, `row`
    pub fn sample_mut(&mut self, col: usize, row: usize) -> Option<&mut P::SpriteSample> {
        if col >= SPRITE_COLS || row >= SPRITE_ROWS {
            return None;
        }
        self.samples.get_mut(col * SPRITE_ROWS + row)
    }

    /// All samples, plane-major
    pub fn samples(&self) -> &[P::SpriteSample] {
        &self.samples
    }
}

/// One tile bank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileBank<P: TargetProfile = ActiveProfile> {
    tiles: Vec<[P::TileSample; LINES_PER_TILE]>,
}

impl<P: TargetProfile> TileBank<P> {
    /// Blank bank
    pub fn blank() -> Self {
        TileBank {
            tiles: vec![[Default::default(); LINES_PER_TILE]; TILES_PER_BANK],
        }
    }

    /// Build from exactly [`TILES_PER_BANK`] tiles
    pub fn from_tiles(tiles: Vec<[P::TileSample; LINES_PER_TILE]>) -> CodecResult<Self> {
        if tiles.len() != TILES_PER_BANK {
            return Err(CodecError::bad_shape(format!(
                "tile bank has {} tiles, expected {}",
                tiles.len(),
                TILES_PER_BANK
            )));
        }
        Ok(TileBank { tiles })
    }

    /// Lines of one tile
    pub fn tile(&self, index: usize) -> Option<&[P::TileSample; LINES_PER_TILE]> {
        self.tiles.get(index)
    }

    /// Mutable lines of one tile
    pub fn tile_mut(&mut self, index: usize) -> Option<&mut [P::TileSample; LINES_PER_TILE]> {
        self.tiles.get_mut(index)
    }
}

/// Full-screen picture (ST)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Picture {
    /// Width in pixels
    pub width: u16,
    /// Height in pixels
    pub height: u16,
    /// Screen x
    pub x: u16,
    /// Screen y
    pub y: u16,
    /// 4 bits per pixel, 8 pixels per word
    pub pixels: Vec<u32>,
}

impl Picture {
    /// Pixel words implied by the dimensions
    pub fn expected_words(&self) -> usize {
        self.width as usize * self.height as usize / 8
    }
}

/// Bootstrap manifest: the relative path of every listed id
///
/// The manifest never names itself; its own file is found through
/// [`respak_core::BOOTSTRAP_RESOURCE_NAME`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<Option<String>>,
}

impl Manifest {
    /// Entries in a manifest
    pub const ENTRIES: usize = ResourceId::COUNT - 1;

    /// Standard manifest for a platform
    pub fn for_platform(platform: Platform) -> Self {
        Manifest {
            entries: ResourceId::listed()
                .map(|id| id.path_on(platform).map(str::to_string))
                .collect(),
        }
    }

    /// Build from one entry per listed id, in ascending id order
    pub fn from_entries(entries: Vec<Option<String>>) -> CodecResult<Self> {
        if entries.len() != Self::ENTRIES {
            return Err(CodecError::bad_shape(format!(
                "manifest has {} entries, expected {}",
                entries.len(),
                Self::ENTRIES
            )));
        }
        Ok(Manifest { entries })
    }

    /// Entries in ascending id order
    pub fn entries(&self) -> &[Option<String>] {
        &self.entries
    }

    /// Relative path of a listed id, `None` if absent or the bootstrap id
    pub fn name_of(&self, id: ResourceId) -> Option<&str> {
        let index = (id.as_u16() as usize).checked_sub(1)?;
        self.entries.get(index)?.as_deref()
    }

    /// Present entries with their ids
    pub fn names(&self) -> impl Iterator<Item = (ResourceId, &str)> {
        ResourceId::listed()
            .zip(self.entries.iter())
            .filter_map(|(id, name)| name.as_deref().map(|n| (id, n)))
    }
}

/// Decoded resource, one variant per payload shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceTable<P: TargetProfile = ActiveProfile> {
    /// Bootstrap manifest
    Manifest(Manifest),
    /// Palette
    Palette(Vec<Color>),
    /// Entity metadata
    EntityData(Vec<EntityData>),
    /// Raw byte array
    Bytes(Vec<u8>),
    /// Movement steps
    MoveSteps(Vec<MoveStep>),
    /// Maps
    Maps(Vec<MapRecord>),
    /// Submaps
    Submaps(Vec<Submap>),
    /// Connections
    Connections(Vec<Connection>),
    /// Blocks
    Blocks(Vec<Block>),
    /// Marks
    Marks(Vec<Mark>),
    /// Intro steps
    IntroSteps(Vec<IntroStep>),
    /// Intro texts
    IntroTexts(Vec<Text>),
    /// Single text
    Text(Text),
    /// Sprite bitmaps
    Sprites(Vec<Sprite<P>>),
    /// Tile bitmaps
    Tiles(Vec<TileBank<P>>),
    /// Hall of fame
    HighScores(Vec<HighScore>),
    /// Picture
    Picture(Picture),
}

impl<P: TargetProfile> ResourceTable<P> {
    /// Short name of the table shape
    pub fn kind(&self) -> &'static str {
        match self {
            ResourceTable::Manifest(_) => "manifest",
            ResourceTable::Palette(_) => "palette",
            ResourceTable::EntityData(_) => "entdata",
            ResourceTable::Bytes(_) => "bytes",
            ResourceTable::MoveSteps(_) => "mvstep",
            ResourceTable::Maps(_) => "maps",
            ResourceTable::Submaps(_) => "submaps",
            ResourceTable::Connections(_) => "connect",
            ResourceTable::Blocks(_) => "blocks",
            ResourceTable::Marks(_) => "marks",
            ResourceTable::IntroSteps(_) => "imapsteps",
            ResourceTable::IntroTexts(_) => "texts",
            ResourceTable::Text(_) => "text",
            ResourceTable::Sprites(_) => "sprites",
            ResourceTable::Tiles(_) => "tiles",
            ResourceTable::HighScores(_) => "highscores",
            ResourceTable::Picture(_) => "picture",
        }
    }

    /// Number of top-level records
    pub fn len(&self) -> usize {
        match self {
            ResourceTable::Manifest(m) => m.entries().len(),
            ResourceTable::Palette(v) => v.len(),
            ResourceTable::EntityData(v) => v.len(),
            ResourceTable::Bytes(v) => v.len(),
            ResourceTable::MoveSteps(v) => v.len(),
            ResourceTable::Maps(v) => v.len(),
            ResourceTable::Submaps(v) => v.len(),
            ResourceTable::Connections(v) => v.len(),
            ResourceTable::Blocks(v) => v.len(),
            ResourceTable::Marks(v) => v.len(),
            ResourceTable::IntroSteps(v) => v.len(),
            ResourceTable::IntroTexts(v) => v.len(),
            ResourceTable::Text(t) => t.len(),
            ResourceTable::Sprites(v) => v.len(),
            ResourceTable::Tiles(v) => v.len(),
            ResourceTable::HighScores(v) => v.len(),
            ResourceTable::Picture(p) => p.pixels.len(),
        }
    }

    /// Whether the table holds no records
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A record type stored as a counted array in one table variant
pub trait TableRecord<P: TargetProfile>: WireRecord + Clone {
    /// Name used in count errors
    const WHAT: &'static str;

    /// Wrap decoded records
    fn wrap(records: Vec<Self>) -> ResourceTable<P>;

    /// Borrow records out of a table of the matching variant
    fn unwrap(table: &ResourceTable<P>) -> Option<&[Self]>;
}

macro_rules! table_record {
    ($ty:ty, $variant:ident, $what:literal) => {
        impl<P: TargetProfile> TableRecord<P> for $ty {
            const WHAT: &'static str = $what;

            fn wrap(records: Vec<Self>) -> ResourceTable<P> {
                ResourceTable::$variant(records)
            }

            fn unwrap(table: &ResourceTable<P>) -> Option<&[Self]> {
                match table {
                    ResourceTable::$variant(records) => Some(records.as_slice()),
                    _ => None,
                }
            }
        }
    };
}

table_record!(Color, Palette, "color");
table_record!(EntityData, EntityData, "entity");
table_record!(u8, Bytes, "byte");
table_record!(MoveStep, MoveSteps, "move step");
table_record!(MapRecord, Maps, "map");
table_record!(Submap, Submaps, "submap");
table_record!(Connection, Connections, "connection");
table_record!(Block, Blocks, "block");
table_record!(Mark, Marks, "mark");
table_record!(IntroStep, IntroSteps, "intro step");
table_record!(HighScore, HighScores, "high score");

impl<P: TargetProfile> TableRecord<P> for Sprite<P> {
    const WHAT: &'static str = "sprite";

    fn wrap(records: Vec<Self>) -> ResourceTable<P> {
        ResourceTable::Sprites(records)
    }

    fn unwrap(table: &ResourceTable<P>) -> Option<&[Self]> {
        match table {
            ResourceTable::Sprites(records) => Some(records.as_slice()),
            _ => None,
        }
    }
}

impl<P: TargetProfile> TableRecord<P> for TileBank<P> {
    const WHAT: &'static str = "tile bank";

    fn wrap(records: Vec<Self>) -> ResourceTable<P> {
        ResourceTable::Tiles(records)
    }

    fn unwrap(table: &ResourceTable<P>) -> Option<&[Self]> {
        match table {
            ResourceTable::Tiles(records) => Some(records.as_slice()),
            _ => None,
        }
    }
}

impl WireRecord for Color {
    fn encode(&self, w: &mut WireWriter) -> CodecResult<()> {
        w.put_u8(self.r)?;
        w.put_u8(self.g)?;
        w.put_u8(self.b)?;
        w.put_u8(self.pad)
    }

    fn decode(r: &mut WireReader<'_>) -> CodecResult<Self> {
        Ok(Color {
            r: r.get_u8()?,
            g: r.get_u8()?,
            b: r.get_u8()?,
            pad: r.get_u8()?,
        })
    }
}

impl WireRecord for EntityData {
    fn encode(&self, w: &mut WireWriter) -> CodecResult<()> {
        w.put_u8(self.w)?;
        w.put_u8(self.h)?;
        w.put_u16(self.spr)?;
        w.put_u16(self.sni)?;
        w.put_u8(self.trig_w)?;
        w.put_u8(self.trig_h)?;
        w.put_u8(self.snd)
    }

    fn decode(r: &mut WireReader<'_>) -> CodecResult<Self> {
        Ok(EntityData {
            w: r.get_u8()?,
            h: r.get_u8()?,
            spr: r.get_u16()?,
            sni: r.get_u16()?,
            trig_w: r.get_u8()?,
            trig_h: r.get_u8()?,
            snd: r.get_u8()?,
        })
    }
}

impl WireRecord for MoveStep {
    fn encode(&self, w: &mut WireWriter) -> CodecResult<()> {
        w.put_u8(self.count)?;
        w.put_i8(self.dx)?;
        w.put_i8(self.dy)
    }

    fn decode(r: &mut WireReader<'_>) -> CodecResult<Self> {
        Ok(MoveStep {
            count: r.get_u8()?,
            dx: r.get_i8()?,
            dy: r.get_i8()?,
        })
    }
}

impl WireRecord for MapRecord {
    fn encode(&self, w: &mut WireWriter) -> CodecResult<()> {
        w.put_u16(self.x)?;
        w.put_u16(self.y)?;
        w.put_u16(self.row)?;
        w.put_u16(self.submap)?;
        w.put_string(self.tune.as_bytes(), Terminator::Nul)
    }

    fn decode(r: &mut WireReader<'_>) -> CodecResult<Self> {
        Ok(MapRecord {
            x: r.get_u16()?,
            y: r.get_u16()?,
            row: r.get_u16()?,
            submap: r.get_u16()?,
            tune: Text::new(r.get_string()?),
        })
    }
}

impl WireRecord for Submap {
    fn encode(&self, w: &mut WireWriter) -> CodecResult<()> {
        w.put_u16(self.page)?;
        w.put_u16(self.bnum)?;
        w.put_u16(self.connect)?;
        w.put_u16(self.mark)
    }

    fn decode(r: &mut WireReader<'_>) -> CodecResult<Self> {
        Ok(Submap {
            page: r.get_u16()?,
            bnum: r.get_u16()?,
            connect: r.get_u16()?,
            mark: r.get_u16()?,
        })
    }
}

impl WireRecord for Connection {
    fn encode(&self, w: &mut WireWriter) -> CodecResult<()> {
        for field in [
            self.dir, self.x, self.y, self.step, self.dx, self.dy, self.submap,
        ] {
            w.put_u8(field)?;
        }
        Ok(())
    }

    fn decode(r: &mut WireReader<'_>) -> CodecResult<Self> {
        let [dir, x, y, step, dx, dy, submap] = r.get_array::<7>()?;
        Ok(Connection {
            dir,
            x,
            y,
            step,
            dx,
            dy,
            submap,
        })
    }
}

impl WireRecord for Block {
    fn encode(&self, w: &mut WireWriter) -> CodecResult<()> {
        w.put_bytes(&self.tiles)
    }

    fn decode(r: &mut WireReader<'_>) -> CodecResult<Self> {
        Ok(Block {
            tiles: r.get_array()?,
        })
    }
}

impl WireRecord for Mark {
    fn encode(&self, w: &mut WireWriter) -> CodecResult<()> {
        w.put_bytes(&[self.xy, self.lt, self.ent, self.flags])
    }

    fn decode(r: &mut WireReader<'_>) -> CodecResult<Self> {
        let [xy, lt, ent, flags] = r.get_array::<4>()?;
        Ok(Mark { xy, lt, ent, flags })
    }
}

impl WireRecord for IntroStep {
    fn encode(&self, w: &mut WireWriter) -> CodecResult<()> {
        w.put_u16(self.count)?;
        w.put_u16(self.dx)?;
        w.put_u16(self.dy)?;
        w.put_u16(self.base)
    }

    fn decode(r: &mut WireReader<'_>) -> CodecResult<Self> {
        Ok(IntroStep {
            count: r.get_u16()?,
            dx: r.get_u16()?,
            dy: r.get_u16()?,
            base: r.get_u16()?,
        })
    }
}

impl WireRecord for HighScore {
    fn encode(&self, w: &mut WireWriter) -> CodecResult<()> {
        w.put_u32(self.score)?;
        w.put_bytes(&self.name)
    }

    fn decode(r: &mut WireReader<'_>) -> CodecResult<Self> {
        Ok(HighScore {
            score: r.get_u32()?,
            name: r.get_array()?,
        })
    }
}

// Bitmaps: outer count comes from the array codec, inner dimensions are fixed.

impl<P: TargetProfile> WireRecord for Sprite<P> {
    fn encode(&self, w: &mut WireWriter) -> CodecResult<()> {
        for sample in &self.samples {
            sample.encode(w)?;
        }
        Ok(())
    }

    fn decode(r: &mut WireReader<'_>) -> CodecResult<Self> {
        let mut samples = Vec::with_capacity(SPRITE_SAMPLES);
        for _ in 0..SPRITE_SAMPLES {
            samples.push(<P::SpriteSample as WireRecord>::decode(r)?);
        }
        Ok(Sprite { samples })
    }
}

impl<P: TargetProfile> WireRecord for TileBank<P> {
    fn encode(&self, w: &mut WireWriter) -> CodecResult<()> {
        for tile in &self.tiles {
            for line in tile {
                line.encode(w)?;
            }
        }
        Ok(())
    }

    fn decode(r: &mut WireReader<'_>) -> CodecResult<Self> {
        let mut tiles = Vec::with_capacity(TILES_PER_BANK);
        for _ in 0..TILES_PER_BANK {
            let mut tile = [<P::TileSample as Default>::default(); LINES_PER_TILE];
            for line in tile.iter_mut() {
                *line = <P::TileSample as WireRecord>::decode(r)?;
            }
            tiles.push(tile);
        }
        Ok(TileBank { tiles })
    }
}
