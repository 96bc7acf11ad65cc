//! A directory tree and its `.tar.zst` serve the same bytes.

use crate::common::*;
use respak::{
    AtariSt, BackendKind, ContainerReader, ResourceLoader, ResourceRoot, StorageError,
    BOOTSTRAP_RESOURCE_NAME,
};
use std::io::{Read, SeekFrom};

struct Roots {
    data: DataDir,
    _holder: tempfile::TempDir,
    dir_root: ResourceRoot,
    archive_root: ResourceRoot,
}

fn roots() -> Roots {
    let data = write_data_dir::<AtariSt>();
    let holder = tempfile::tempdir().unwrap();
    let archive = holder.path().join("data.tar.zst");
    archive_dir(data.path(), &archive);

    let mut dir_root = ResourceRoot::new();
    dir_root.set_root_path(data.path()).unwrap();
    let mut archive_root = ResourceRoot::new();
    archive_root.set_root_path(&archive).unwrap();

    Roots {
        data,
        _holder: holder,
        dir_root,
        archive_root,
    }
}

#[test]
fn test_backends_chosen_by_suffix() {
    let roots = roots();
    assert_eq!(roots.dir_root.backend().unwrap().kind(), BackendKind::Directory);
    assert_eq!(
        roots.archive_root.backend().unwrap().kind(),
        BackendKind::Archive
    );
}

#[test]
fn test_every_file_identical() {
    let roots = roots();
    let names = relative_files(roots.data.path());
    assert!(names.contains(&BOOTSTRAP_RESOURCE_NAME.to_string()));
    assert!(names.contains(&SOUND_NAME.to_string()));

    for name in &names {
        let from_dir = roots.dir_root.read_resource(name).unwrap();
        let from_archive = roots.archive_root.read_resource(name).unwrap();
        assert_eq!(from_dir, from_archive, "{}", name);
    }
}

#[test]
fn test_manifest_names_decode_identically() {
    let roots = roots();
    let reader = ContainerReader::<AtariSt>::new();
    let manifest = reader.load_manifest(&roots.dir_root).unwrap();
    assert_eq!(reader.load_manifest(&roots.archive_root).unwrap(), manifest);

    for (id, name) in manifest.names() {
        let a = reader.open(&roots.dir_root, name, id).unwrap();
        let b = reader.open(&roots.archive_root, name, id).unwrap();
        assert_eq!(a, b, "{}", id);
    }
}

#[test]
fn test_load_all_from_archive() {
    let roots = roots();
    let from_dir = ResourceLoader::<AtariSt>::new(&roots.dir_root)
        .load_all()
        .unwrap();
    let from_archive = ResourceLoader::<AtariSt>::new(&roots.archive_root)
        .load_all()
        .unwrap();
    assert_eq!(from_dir, from_archive);
}

#[test]
fn test_raw_sound_stream() {
    let roots = roots();
    for root in [&roots.dir_root, &roots.archive_root] {
        let mut handle = root.open_resource(SOUND_NAME).unwrap();
        let mut riff = [0u8; 4];
        handle.read_exact(&mut riff).unwrap();
        assert_eq!(&riff, b"RIFF");
        let mut rest = Vec::new();
        handle.read_to_end(&mut rest).unwrap();
        assert_eq!(rest.len() + 4, sound_bytes().len());
    }
}

#[test]
fn test_positioning_only_on_directory() {
    let roots = roots();

    let mut handle = roots.dir_root.open_resource(SOUND_NAME).unwrap();
    assert_eq!(handle.size().unwrap(), sound_bytes().len() as u64);
    assert_eq!(handle.seek(SeekFrom::Start(8)).unwrap(), 8);
    assert_eq!(handle.tell().unwrap(), 8);
    drop(handle);

    let mut handle = roots.archive_root.open_resource(SOUND_NAME).unwrap();
    assert!(handle.size().unwrap_err().is_unsupported());
    assert!(handle.seek(SeekFrom::Start(8)).unwrap_err().is_unsupported());
    assert!(handle.tell().unwrap_err().is_unsupported());
}

#[test]
fn test_one_archive_entry_at_a_time() {
    let roots = roots();
    let first = roots.archive_root.open_resource(SOUND_NAME).unwrap();
    assert!(matches!(
        roots.archive_root.open_resource(BOOTSTRAP_RESOURCE_NAME),
        Err(StorageError::EntryBusy { .. })
    ));
    first.close();
    assert!(roots
        .archive_root
        .open_resource(BOOTSTRAP_RESOURCE_NAME)
        .is_ok());

    // directory handles are independent
    let _a = roots.dir_root.open_resource(SOUND_NAME).unwrap();
    let _b = roots.dir_root.open_resource(BOOTSTRAP_RESOURCE_NAME).unwrap();
}

#[test]
fn test_missing_resource() {
    let roots = roots();
    for root in [&roots.dir_root, &roots.archive_root] {
        assert!(matches!(
            root.open_resource("sounds/missing.wav"),
            Err(StorageError::NotFound { .. })
        ));
    }
}
