//! Damaged containers are rejected, never half-decoded.

use crate::common::*;
use proptest::prelude::*;
use respak::{
    verify_checksum, AtariSt, ChecksumReader, ContainerError, ContainerReader, ContainerWriter,
    ResourceId, ResourceTable, WriterConfig,
};

fn entdata_container() -> Vec<u8> {
    let dir = tempfile::tempdir().unwrap();
    let writer = ContainerWriter::<AtariSt>::new(WriterConfig::new(dir.path())).unwrap();
    let written = writer
        .write_container(ResourceId::EntityData, &ResourceTable::EntityData(entity_data(74)))
        .unwrap();
    std::fs::read(written.path).unwrap()
}

#[test]
fn test_truncated_trailer_fails_verification() {
    let bytes = entdata_container();
    let truncated = &bytes[..bytes.len() - 4];
    assert!(matches!(
        verify_checksum(ChecksumReader::new(truncated)),
        Err(ContainerError::ChecksumMismatch { .. })
    ));

    // Read as a container the last payload bytes become the trailer.
    let err = ContainerReader::<AtariSt>::new()
        .read_bytes(ResourceId::EntityData, truncated)
        .unwrap_err();
    assert!(err.is_format_failure() || err.is_integrity_failure());
}

#[test]
fn test_header_only_file() {
    let bytes = entdata_container();
    let err = ContainerReader::<AtariSt>::new()
        .read_bytes(ResourceId::EntityData, &bytes[..8])
        .unwrap_err();
    assert!(err.is_format_failure() || err.is_integrity_failure());
}

#[test]
fn test_version_two_rejected() {
    let mut bytes = entdata_container();
    bytes[4] = 2;
    assert!(matches!(
        ContainerReader::<AtariSt>::new().read_bytes(ResourceId::EntityData, &bytes),
        Err(ContainerError::BadVersion {
            version: 2,
            supported: 1
        })
    ));
}

#[test]
fn test_wrong_id_rejected() {
    let bytes = entdata_container();
    assert!(matches!(
        ContainerReader::<AtariSt>::new().read_bytes(ResourceId::Palette, &bytes),
        Err(ContainerError::BadId {
            requested: ResourceId::Palette,
            found: 2
        })
    ));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_any_bit_flip_is_caught(byte in 0usize..(8 + 2 + 74 * 9 + 4), bit in 0u8..8) {
        let mut bytes = entdata_container();
        bytes[byte] ^= 1 << bit;

        prop_assert!(verify_checksum(ChecksumReader::new(bytes.as_slice())).is_err());
        let err = ContainerReader::<AtariSt>::new()
            .read_bytes(ResourceId::EntityData, &bytes)
            .unwrap_err();
        prop_assert!(err.is_format_failure() || err.is_integrity_failure());
    }
}
