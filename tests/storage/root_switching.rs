//! Root activation, switching and release.

use crate::common::*;
use respak::{
    AtariSt, BackendKind, ContainerReader, ResourceId, ResourceRoot, StorageConfig, StorageError,
};

#[test]
fn test_no_root_until_set() {
    let mut root = ResourceRoot::new();
    assert!(!root.is_active());
    assert!(matches!(
        root.read_resource(SOUND_NAME),
        Err(StorageError::NoRoot)
    ));

    let data = write_data_dir::<AtariSt>();
    root.set_root_path(data.path()).unwrap();
    assert!(root.is_active());
    root.clear_root_path();
    assert!(!root.is_active());
    root.clear_root_path();
}

#[test]
fn test_switch_between_roots() {
    let first = write_data_dir::<AtariSt>();
    let second = write_data_dir::<AtariSt>();
    std::fs::write(host_path(second.path(), SOUND_NAME), b"other").unwrap();

    let holder = tempfile::tempdir().unwrap();
    let archive = holder.path().join("DATA.TZST");
    archive_dir(second.path(), &archive);

    let mut root = ResourceRoot::new();
    root.set_root_path(first.path()).unwrap();
    assert_eq!(root.read_resource(SOUND_NAME).unwrap(), sound_bytes());

    root.set_root_path(&archive).unwrap();
    assert_eq!(root.backend().unwrap().kind(), BackendKind::Archive);
    assert_eq!(root.backend().unwrap().root(), archive.as_path());
    assert_eq!(root.read_resource(SOUND_NAME).unwrap(), b"other");

    root.set_root_path(second.path()).unwrap();
    assert_eq!(root.backend().unwrap().kind(), BackendKind::Directory);
    assert_eq!(root.read_resource(SOUND_NAME).unwrap(), b"other");
}

#[test]
fn test_failed_switch_leaves_no_root() {
    let data = write_data_dir::<AtariSt>();
    let mut root = ResourceRoot::new();
    root.set_root_path(data.path()).unwrap();

    let missing = data.path().join("missing.tar.zst");
    assert!(root.set_root_path(&missing).is_err());
    assert!(!root.is_active());
}

#[test]
fn test_from_config_custom_suffix() {
    let data = write_data_dir::<AtariSt>();
    let holder = tempfile::tempdir().unwrap();
    let archive = holder.path().join("data.pak");
    archive_dir(data.path(), &archive);

    let config = StorageConfig::rooted(&archive).with_archive_extension(".pak");
    let root = ResourceRoot::from_config(config).unwrap();
    assert_eq!(root.backend().unwrap().kind(), BackendKind::Archive);

    let table = ContainerReader::<AtariSt>::new()
        .open(&root, "texts/pausedtxt.dat", ResourceId::PausedText)
        .unwrap();
    assert_eq!(table, table_for::<AtariSt>(ResourceId::PausedText));
}
