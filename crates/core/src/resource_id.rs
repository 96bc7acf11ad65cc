//! Resource identifiers
//!
//! Every container carries the id of the resource kind it holds. Ids are
//! ordered: the manifest lists the relative path of every id after
//! [`ResourceId::FileList`] in ascending order.
//!
//! | Id | Kind | Path | Platforms |
//! |----|------|------|-----------|
//! | 0 | FileList | `filelist.dat` | all |
//! | 1 | Palette | `graphics/palette.dat` | all |
//! | 2 | EntityData | `misc/entdata.dat` | all |
//! | 3 | SpriteSequences | `misc/sprseq.dat` | all |
//! | 4 | MoveSteps | `misc/mvstep.dat` | all |
//! | 5 | Maps | `misc/maps.dat` | all |
//! | 6 | Submaps | `misc/submaps.dat` | all |
//! | 7 | Connections | `misc/connect.dat` | all |
//! | 8 | BlockNumbers | `misc/bnums.dat` | all |
//! | 9 | Blocks | `misc/blocks.dat` | all |
//! | 10 | Marks | `misc/marks.dat` | all |
//! | 11 | EntityFlags | `misc/eflgc.dat` | all |
//! | 12 | IntroSpriteLists | `misc/imapsl.dat` | all |
//! | 13 | IntroSteps | `misc/imapsteps.dat` | all |
//! | 14 | IntroStepOffsets | `misc/imapsofs.dat` | all |
//! | 15 | IntroTexts | `texts/imaptext.dat` | all |
//! | 16 | GameOverText | `texts/gameovertxt.dat` | all |
//! | 17 | PausedText | `texts/pausedtxt.dat` | all |
//! | 18 | SpritesData | `graphics/spritesdata.dat` | all |
//! | 19 | TilesData | `graphics/tilesdata.dat` | all |
//! | 20 | HighScores | `misc/highscores.dat` | all |
//! | 21-23 | pictures | `graphics/pic*.dat` | ST |
//! | 24-27 | text screens | `graphics/screen*.dat` | PC |

use crate::profile::Platform;
use std::fmt;

/// Resource kinds, in manifest order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum ResourceId {
    /// Bootstrap manifest listing every other resource
    FileList = 0,
    /// Game colour palette
    Palette = 1,
    /// Entity metadata records
    EntityData = 2,
    /// Entity sprite sequences
    SpriteSequences = 3,
    /// Entity movement steps
    MoveSteps = 4,
    /// Map records
    Maps = 5,
    /// Submap records
    Submaps = 6,
    /// Submap connectivity
    Connections = 7,
    /// Block numbers
    BlockNumbers = 8,
    /// Block definitions
    Blocks = 9,
    /// Entity placement marks
    Marks = 10,
    /// Entity flag classes
    EntityFlags = 11,
    /// Map intro sprite lists
    IntroSpriteLists = 12,
    /// Map intro animation steps
    IntroSteps = 13,
    /// First intro step of each map
    IntroStepOffsets = 14,
    /// Map intro texts
    IntroTexts = 15,
    /// "Game over" text
    GameOverText = 16,
    /// "Paused" text
    PausedText = 17,
    /// Sprite bitmaps
    SpritesData = 18,
    /// Tile bitmaps
    TilesData = 19,
    /// Hall of fame
    HighScores = 20,
    /// Hall of fame picture (ST only)
    PicHallOfFame = 21,
    /// Congratulations picture (ST only)
    PicCongrats = 22,
    /// Splash picture (ST only)
    PicSplash = 23,
    /// Hall of fame title screen (PC only)
    ScreenHallOfFameTitle = 24,
    /// Title screen (PC only)
    ScreenTitle = 25,
    /// Copyright screen (PC only)
    ScreenCopyright = 26,
    /// Congratulations screen (PC only)
    ScreenCongrats = 27,
}

/// Well-known name of the bootstrap manifest, independent of backend
pub const BOOTSTRAP_RESOURCE_NAME: &str = "filelist.dat";

impl ResourceId {
    /// Number of resource ids
    pub const COUNT: usize = 28;

    /// All ids in ascending order
    pub const ALL: [ResourceId; ResourceId::COUNT] = [
        ResourceId::FileList,
        ResourceId::Palette,
        ResourceId::EntityData,
        ResourceId::SpriteSequences,
        ResourceId::MoveSteps,
        ResourceId::Maps,
        ResourceId::Submaps,
        ResourceId::Connections,
        ResourceId::BlockNumbers,
        ResourceId::Blocks,
        ResourceId::Marks,
        ResourceId::EntityFlags,
        ResourceId::IntroSpriteLists,
        ResourceId::IntroSteps,
        ResourceId::IntroStepOffsets,
        ResourceId::IntroTexts,
        ResourceId::GameOverText,
        ResourceId::PausedText,
        ResourceId::SpritesData,
        ResourceId::TilesData,
        ResourceId::HighScores,
        ResourceId::PicHallOfFame,
        ResourceId::PicCongrats,
        ResourceId::PicSplash,
        ResourceId::ScreenHallOfFameTitle,
        ResourceId::ScreenTitle,
        ResourceId::ScreenCopyright,
        ResourceId::ScreenCongrats,
    ];

    /// Convert to the on-disk representation
    pub fn as_u16(self) -> u16 {
        self as u16
    }

    /// Try to create from the on-disk representation
    pub fn from_u16(value: u16) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    /// Ids listed by the manifest (everything after the bootstrap id)
    pub fn listed() -> impl Iterator<Item = ResourceId> {
        Self::ALL.into_iter().skip(1)
    }

    /// Relative path of this resource inside a root
    pub fn path(self) -> &'static str {
        match self {
            ResourceId::FileList => BOOTSTRAP_RESOURCE_NAME,
            ResourceId::Palette => "graphics/palette.dat",
            ResourceId::EntityData => "misc/entdata.dat",
            ResourceId::SpriteSequences => "misc/sprseq.dat",
            ResourceId::MoveSteps => "misc/mvstep.dat",
            ResourceId::Maps => "misc/maps.dat",
            ResourceId::Submaps => "misc/submaps.dat",
            ResourceId::Connections => "misc/connect.dat",
            ResourceId::BlockNumbers => "misc/bnums.dat",
            ResourceId::Blocks => "misc/blocks.dat",
            ResourceId::Marks => "misc/marks.dat",
            ResourceId::EntityFlags => "misc/eflgc.dat",
            ResourceId::IntroSpriteLists => "misc/imapsl.dat",
            ResourceId::IntroSteps => "misc/imapsteps.dat",
            ResourceId::IntroStepOffsets => "misc/imapsofs.dat",
            ResourceId::IntroTexts => "texts/imaptext.dat",
            ResourceId::GameOverText => "texts/gameovertxt.dat",
            ResourceId::PausedText => "texts/pausedtxt.dat",
            ResourceId::SpritesData => "graphics/spritesdata.dat",
            ResourceId::TilesData => "graphics/tilesdata.dat",
            ResourceId::HighScores => "misc/highscores.dat",
            ResourceId::PicHallOfFame => "graphics/pichaf.dat",
            ResourceId::PicCongrats => "graphics/piccongrats.dat",
            ResourceId::PicSplash => "graphics/picsplash.dat",
            ResourceId::ScreenHallOfFameTitle => "graphics/screenimainhoft.dat",
            ResourceId::ScreenTitle => "graphics/screenimainrdt.dat",
            ResourceId::ScreenCopyright => "graphics/screenimaincdc.dat",
            ResourceId::ScreenCongrats => "graphics/screencongrats.dat",
        }
    }

    /// Whether this resource exists on the given platform
    pub fn available_on(self, platform: Platform) -> bool {
        match self {
            ResourceId::PicHallOfFame | ResourceId::PicCongrats | ResourceId::PicSplash => {
                platform == Platform::AtariSt
            }
            ResourceId::ScreenHallOfFameTitle
            | ResourceId::ScreenTitle
            | ResourceId::ScreenCopyright
            | ResourceId::ScreenCongrats => platform == Platform::Pc,
            _ => true,
        }
    }

    /// Relative path on the given platform, `None` where the id does not apply
    pub fn path_on(self, platform: Platform) -> Option<&'static str> {
        self.available_on(platform).then(|| self.path())
    }

    /// Short identifier used in logs and error messages
    pub fn name(self) -> &'static str {
        match self {
            ResourceId::FileList => "filelist",
            ResourceId::Palette => "palette",
            ResourceId::EntityData => "entdata",
            ResourceId::SpriteSequences => "sprseq",
            ResourceId::MoveSteps => "mvstep",
            ResourceId::Maps => "maps",
            ResourceId::Submaps => "submaps",
            ResourceId::Connections => "connect",
            ResourceId::BlockNumbers => "bnums",
            ResourceId::Blocks => "blocks",
            ResourceId::Marks => "marks",
            ResourceId::EntityFlags => "eflgc",
            ResourceId::IntroSpriteLists => "imapsl",
            ResourceId::IntroSteps => "imapsteps",
            ResourceId::IntroStepOffsets => "imapsofs",
            ResourceId::IntroTexts => "imaptext",
            ResourceId::GameOverText => "gameovertxt",
            ResourceId::PausedText => "pausedtxt",
            ResourceId::SpritesData => "spritesdata",
            ResourceId::TilesData => "tilesdata",
            ResourceId::HighScores => "highscores",
            ResourceId::PicHallOfFame => "pichaf",
            ResourceId::PicCongrats => "piccongrats",
            ResourceId::PicSplash => "picsplash",
            ResourceId::ScreenHallOfFameTitle => "screenimainhoft",
            ResourceId::ScreenTitle => "screenimainrdt",
            ResourceId::ScreenCopyright => "screenimaincdc",
            ResourceId::ScreenCongrats => "screencongrats",
        }
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name(), self.as_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_dense_and_ordered() {
        for (index, id) in ResourceId::ALL.iter().enumerate() {
            assert_eq!(id.as_u16() as usize, index);
        }
    }

    #[test]
    fn test_from_u16_roundtrip() {
        for id in ResourceId::ALL {
            assert_eq!(ResourceId::from_u16(id.as_u16()), Some(id));
        }
        assert_eq!(ResourceId::from_u16(ResourceId::COUNT as u16), None);
        assert_eq!(ResourceId::from_u16(u16::MAX), None);
    }

    #[test]
    fn test_listed_skips_bootstrap() {
        let listed: Vec<_> = ResourceId::listed().collect();
        assert_eq!(listed.len(), ResourceId::COUNT - 1);
        assert_eq!(listed[0], ResourceId::Palette);
        assert!(!listed.contains(&ResourceId::FileList));
    }

    #[test]
    fn test_entity_data_path() {
        assert_eq!(ResourceId::EntityData.path(), "misc/entdata.dat");
        assert_eq!(ResourceId::EntityData.as_u16(), 2);
    }

    #[test]
    fn test_platform_specific_ids() {
        assert_eq!(
            ResourceId::PicSplash.path_on(Platform::AtariSt),
            Some("graphics/picsplash.dat")
        );
        assert_eq!(ResourceId::PicSplash.path_on(Platform::Pc), None);
        assert_eq!(ResourceId::ScreenTitle.path_on(Platform::AtariSt), None);
        assert!(ResourceId::ScreenTitle.available_on(Platform::Pc));
        assert!(ResourceId::TilesData.available_on(Platform::Pc));
        assert!(ResourceId::TilesData.available_on(Platform::AtariSt));
    }

    #[test]
    fn test_paths_are_unique() {
        let mut paths: Vec<_> = ResourceId::ALL.iter().map(|id| id.path()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), ResourceId::COUNT);
    }

    #[test]
    fn test_display() {
        assert_eq!(ResourceId::EntityData.to_string(), "entdata(2)");
    }
}
