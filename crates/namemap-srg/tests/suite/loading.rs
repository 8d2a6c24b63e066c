use std::fs;

use namemap_config::MappingsConfig;
use namemap_srg::{MappingError, ParseOptions, SymbolMap};
use pretty_assertions::assert_eq;

#[test]
fn load_reads_file_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("joined.srg");
    fs::write(&path, "CL: a/B c/D\nFD: a/B/f c/D/g\n").unwrap();

    let map = SymbolMap::load(&path).unwrap();
    assert_eq!(map.to_mapped_class("a.B"), "c.D");
    assert_eq!(map.field_count(), 1);
}

#[test]
fn missing_file_is_an_io_error_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.srg");

    match SymbolMap::load(&path).unwrap_err() {
        MappingError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn unconfigured_mappings_load_nothing() {
    let loaded = SymbolMap::load_configured(&MappingsConfig::default()).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn configured_strictness_is_applied() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("methods.srg");
    fs::write(&path, "MD: a/B/m notadesc c/D/n ()V\n").unwrap();

    let lenient = MappingsConfig {
        path: Some(path.clone()),
        validate_descriptors: false,
    };
    let map = SymbolMap::load_configured(&lenient).unwrap().unwrap();
    assert_eq!(map.method_count(), 1);

    let strict = MappingsConfig {
        validate_descriptors: true,
        ..lenient
    };
    assert!(ParseOptions::from(&strict).validate_descriptors);
    let err = SymbolMap::load_configured(&strict).unwrap_err();
    assert!(matches!(err, MappingError::MalformedMappingLine { line: 1, .. }));
}
