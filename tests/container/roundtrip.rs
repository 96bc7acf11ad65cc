//! Every resource kind survives write then read, on both profiles.

use crate::common::*;
use respak::{
    AtariSt, CodecRegistry, ContainerReader, ContainerWriter, Pc, ResourceId, ResourceTable,
    Sprite, SpriteMask, TargetProfile, TileBank, WriterConfig,
};

fn roundtrip_all<P: TargetProfile>() {
    let dir = tempfile::tempdir().unwrap();
    let writer = ContainerWriter::<P>::new(WriterConfig::new(dir.path())).unwrap();
    let reader = ContainerReader::<P>::new();

    for (id, table) in sample_tables::<P>() {
        let written = writer.write_container(id, &table).unwrap();
        let bytes = std::fs::read(&written.path).unwrap();
        assert_eq!(reader.read_bytes(id, &bytes).unwrap(), table, "{}", id);
    }
}

#[test]
fn test_roundtrip_every_id_st() {
    roundtrip_all::<AtariSt>();
}

#[test]
fn test_roundtrip_every_id_pc() {
    roundtrip_all::<Pc>();
}

#[test]
fn test_st_bitmaps_keep_samples() {
    let mut sprite = Sprite::<AtariSt>::blank();
    *sprite.sample_mut(0, 0).unwrap() = 0xDEAD_BEEF;
    *sprite.sample_mut(3, 20).unwrap() = 0x0102_0304;
    let mut bank = TileBank::<AtariSt>::blank();
    bank.tile_mut(255).unwrap()[7] = 0xFFFF_FFFF;

    let registry = CodecRegistry::<AtariSt>::standard();
    for (id, table) in [
        (ResourceId::SpritesData, ResourceTable::Sprites(vec![sprite])),
        (ResourceId::TilesData, ResourceTable::Tiles(vec![bank])),
    ] {
        let payload = registry.encode(id, &table).unwrap();
        assert_eq!(registry.decode(id, &mut payload.as_slice()).unwrap(), table);
    }
}

#[test]
fn test_pc_sprite_layout() {
    let mut sprite = Sprite::<Pc>::blank();
    *sprite.sample_mut(0, 0).unwrap() = SpriteMask {
        mask: 0x00FF,
        pict: 0x1234,
    };
    let registry = CodecRegistry::<Pc>::standard();
    let payload = registry
        .encode(ResourceId::SpritesData, &ResourceTable::Sprites(vec![sprite]))
        .unwrap();
    // count, then 84 samples of mask + pict
    assert_eq!(payload.len(), 2 + 84 * 4);
    assert_eq!(&payload[..6], &[1, 0, 0xFF, 0x00, 0x34, 0x12]);
}

#[test]
fn test_profile_specific_ids() {
    let st = tempfile::tempdir().unwrap();
    let writer = ContainerWriter::<AtariSt>::new(WriterConfig::new(st.path())).unwrap();
    assert!(writer.path_for(ResourceId::ScreenTitle).is_err());
    assert!(writer.path_for(ResourceId::PicSplash).is_ok());

    let pc = tempfile::tempdir().unwrap();
    let writer = ContainerWriter::<Pc>::new(WriterConfig::new(pc.path())).unwrap();
    assert!(writer.path_for(ResourceId::PicSplash).is_err());
    assert!(writer.path_for(ResourceId::ScreenTitle).is_ok());
}
