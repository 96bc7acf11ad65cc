//! Shared fixtures for the integration suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from a suite's
//! main.rs.

#![allow(dead_code)]

use respak::{
    Block, Color, Connection, ContainerWriter, EntityData, HighScore, IntroStep, MapRecord, Mark,
    MoveStep, Picture, ResourceId, ResourceTable, Sprite, Submap, TargetProfile, Text, TileBank,
    WriterConfig, WrittenContainer, HISCORE_NAME_SIZE,
};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Raw sound file stored next to the containers, never wrapped
pub const SOUND_NAME: &str = "sounds/bombshht.wav";

/// Bytes of [`SOUND_NAME`]
pub fn sound_bytes() -> Vec<u8> {
    let mut wav = b"RIFF\x24\x00\x00\x00WAVEfmt ".to_vec();
    wav.extend((0..200u32).map(|i| (i * 7 % 251) as u8));
    wav
}

// ============================================================================
// Tables
// ============================================================================

/// `count` entity records with distinguishable fields
pub fn entity_data(count: usize) -> Vec<EntityData> {
    (0..count)
        .map(|i| EntityData {
            w: (i % 32) as u8,
            h: (i % 21) as u8,
            spr: i as u16 * 3,
            sni: i as u16 * 5,
            trig_w: 1,
            trig_h: 2,
            snd: (i % 7) as u8,
        })
        .collect()
}

/// 16 x 2 picture with patterned pixels
pub fn picture() -> Picture {
    Picture {
        width: 16,
        height: 2,
        x: 32,
        y: 40,
        pixels: vec![0x0123_4567, 0x89AB_CDEF, 0xFFFF_0000, 0x0000_FFFF],
    }
}

/// Sample table for one id
pub fn table_for<P: TargetProfile>(id: ResourceId) -> ResourceTable<P> {
    match id {
        ResourceId::FileList => ResourceTable::Manifest(respak::Manifest::for_platform(P::PLATFORM)),
        ResourceId::Palette => ResourceTable::Palette(
            (0..16u8)
                .map(|i| Color {
                    r: i * 16,
                    g: 255 - i,
                    b: i,
                    pad: 0,
                })
                .collect(),
        ),
        ResourceId::EntityData => ResourceTable::EntityData(entity_data(74)),
        ResourceId::SpriteSequences
        | ResourceId::BlockNumbers
        | ResourceId::EntityFlags
        | ResourceId::IntroSpriteLists
        | ResourceId::IntroStepOffsets => {
            ResourceTable::Bytes((0..40u8).map(|b| b ^ id.as_u16() as u8).collect())
        }
        ResourceId::MoveSteps => ResourceTable::MoveSteps(vec![
            MoveStep {
                count: 4,
                dx: -2,
                dy: 1,
            },
            MoveStep {
                count: 0,
                dx: 0,
                dy: 0,
            },
        ]),
        ResourceId::Maps => ResourceTable::Maps(vec![
            MapRecord {
                x: 0x0008,
                y: 0x008C,
                row: 0x0018,
                submap: 0,
                tune: Text::from("sounds/tune0.wav"),
            },
            MapRecord {
                x: 0x0008,
                y: 0x0080,
                row: 0x0C0,
                submap: 9,
                tune: Text::from(""),
            },
        ]),
        ResourceId::Submaps => ResourceTable::Submaps(vec![Submap {
            page: 1,
            bnum: 2,
            connect: 3,
            mark: 4,
        }]),
        ResourceId::Connections => ResourceTable::Connections(vec![Connection {
            dir: 1,
            x: 2,
            y: 3,
            step: 4,
            dx: 5,
            dy: 6,
            submap: 7,
        }]),
        ResourceId::Blocks => ResourceTable::Blocks(
            (0..8u8)
                .map(|i| Block {
                    tiles: [i, i + 1, i + 2, i + 3],
                })
                .collect(),
        ),
        ResourceId::Marks => ResourceTable::Marks(vec![
            Mark {
                xy: 0x12,
                lt: 0x34,
                ent: 5,
                flags: 0x80,
            };
            3
        ]),
        ResourceId::IntroSteps => ResourceTable::IntroSteps(vec![IntroStep {
            count: 2,
            dx: 0xFFFE,
            dy: 1,
            base: 0x60,
        }]),
        ResourceId::IntroTexts => ResourceTable::IntroTexts(vec![
            Text::from("WELCOME TO"),
            Text::from("SOUTH AMERICA"),
            Text::from(""),
        ]),
        ResourceId::GameOverText => ResourceTable::Text(Text::from("GAME OVER")),
        ResourceId::PausedText => ResourceTable::Text(Text::from("PAUSED")),
        ResourceId::SpritesData => ResourceTable::Sprites(vec![Sprite::blank(); 3]),
        ResourceId::TilesData => ResourceTable::Tiles(vec![TileBank::blank(); 2]),
        ResourceId::HighScores => ResourceTable::HighScores(
            (0..8u32)
                .map(|i| {
                    let mut name = [b' '; HISCORE_NAME_SIZE];
                    name[0] = b'A' + i as u8;
                    HighScore {
                        score: 80_000 - i * 10_000,
                        name,
                    }
                })
                .collect(),
        ),
        ResourceId::PicHallOfFame | ResourceId::PicCongrats | ResourceId::PicSplash => {
            ResourceTable::Picture(picture())
        }
        ResourceId::ScreenHallOfFameTitle
        | ResourceId::ScreenTitle
        | ResourceId::ScreenCopyright
        | ResourceId::ScreenCongrats => ResourceTable::Text(Text::from(id.name())),
    }
}

/// One sample table per listed id present on `P`
pub fn sample_tables<P: TargetProfile>() -> Vec<(ResourceId, ResourceTable<P>)> {
    ResourceId::listed()
        .filter(|id| id.available_on(P::PLATFORM))
        .map(|id| (id, table_for::<P>(id)))
        .collect()
}

// ============================================================================
// Data trees
// ============================================================================

/// A full data directory for `P`, plus the raw sound file
pub struct DataDir {
    pub dir: TempDir,
    pub written: Vec<WrittenContainer>,
}

impl DataDir {
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Write every sample table for `P` into a fresh directory
pub fn write_data_dir<P: TargetProfile>() -> DataDir {
    let dir = tempfile::tempdir().unwrap();
    let writer = ContainerWriter::<P>::new(WriterConfig::new(dir.path())).unwrap();
    let written = writer.write_all(sample_tables::<P>()).unwrap();

    let sound = host_path(dir.path(), SOUND_NAME);
    fs::create_dir_all(sound.parent().unwrap()).unwrap();
    fs::write(&sound, sound_bytes()).unwrap();

    DataDir { dir, written }
}

/// `root` joined with a `/`-separated resource name
pub fn host_path(root: &Path, name: &str) -> PathBuf {
    name.split('/').fold(root.to_path_buf(), |path, part| path.join(part))
}

/// Relative `/`-separated names of every file under `root`, sorted
pub fn relative_files(root: &Path) -> Vec<String> {
    fn walk(root: &Path, dir: &Path, out: &mut Vec<String>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                walk(root, &path, out);
            } else {
                let rel = path.strip_prefix(root).unwrap();
                let parts: Vec<_> = rel
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect();
                out.push(parts.join("/"));
            }
        }
    }
    let mut out = Vec::new();
    walk(root, root, &mut out);
    out.sort();
    out
}

/// Pack every file under `src` into a `.tar.zst` at `archive`
pub fn archive_dir(src: &Path, archive: &Path) {
    let file = File::create(archive).unwrap();
    let encoder = zstd::Encoder::new(file, 3).unwrap();
    let mut builder = tar::Builder::new(encoder);
    for name in relative_files(src) {
        builder
            .append_path_with_name(host_path(src, &name), &name)
            .unwrap();
    }
    let encoder = builder.into_inner().unwrap();
    encoder.finish().unwrap();
}
