//! Write a small data set, serve it from a directory, read it back.

use crate::common::*;
use respak::{
    checksum, AtariSt, ContainerReader, ContainerWriter, Manifest, ResourceId, ResourceRoot,
    ResourceTable, WriterConfig, BOOTSTRAP_RESOURCE_NAME,
};

fn five_name_manifest() -> Manifest {
    let named = [
        ResourceId::Palette,
        ResourceId::EntityData,
        ResourceId::Maps,
        ResourceId::PausedText,
        ResourceId::PicSplash,
    ];
    let entries = ResourceId::listed()
        .map(|id| named.contains(&id).then(|| id.path().to_string()))
        .collect();
    Manifest::from_entries(entries).unwrap()
}

#[test]
fn test_manifest_then_entdata() {
    let dir = tempfile::tempdir().unwrap();
    let writer = ContainerWriter::<AtariSt>::new(WriterConfig::new(dir.path())).unwrap();
    let manifest = five_name_manifest();
    writer
        .write_container(ResourceId::FileList, &ResourceTable::Manifest(manifest.clone()))
        .unwrap();
    let entdata = ResourceTable::EntityData(entity_data(74));
    let written = writer.write_container(ResourceId::EntityData, &entdata).unwrap();

    let bytes = std::fs::read(&written.path).unwrap();
    assert_eq!(&bytes[..8], &[b'X', b'R', b'E', b'S', 1, 0, 2, 0]);
    assert_eq!(&bytes[8..10], &74u16.to_le_bytes());
    assert_eq!(bytes.len(), 8 + 2 + 74 * 9 + 4);
    let crc = checksum(&bytes[..bytes.len() - 4]);
    assert_eq!(&bytes[bytes.len() - 4..], &crc.to_le_bytes());

    let mut root = ResourceRoot::new();
    root.set_root_path(dir.path()).unwrap();
    let reader = ContainerReader::<AtariSt>::new();

    let loaded = reader.load_manifest(&root).unwrap();
    assert_eq!(loaded, manifest);
    assert_eq!(loaded.names().count(), 5);

    let name = loaded.name_of(ResourceId::EntityData).unwrap();
    assert_eq!(name, "misc/entdata.dat");
    assert_eq!(reader.open(&root, name, ResourceId::EntityData).unwrap(), entdata);
}

#[test]
fn test_bootstrap_name_is_not_listed() {
    let manifest = Manifest::for_platform(respak::Platform::AtariSt);
    assert!(manifest.name_of(ResourceId::FileList).is_none());
    assert!(manifest.names().all(|(_, name)| name != BOOTSTRAP_RESOURCE_NAME));
}

#[test]
fn test_full_set_through_loader() {
    let data = write_data_dir::<AtariSt>();
    let mut root = ResourceRoot::new();
    root.set_root_path(data.path()).unwrap();

    let loaded = respak::ResourceLoader::<AtariSt>::new(&root).load_all().unwrap();
    let expected = sample_tables::<AtariSt>();
    assert_eq!(loaded.len(), expected.len());
    for (id, table) in &expected {
        assert_eq!(loaded.get(*id), Some(table), "{}", id);
    }
}
