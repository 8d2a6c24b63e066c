use std::fs;
use std::sync::Arc;

use namemap_config::{global_log_buffer, init_tracing, LoggingConfig};
use namemap_srg::SymbolMap;

// The only test in this binary that installs a subscriber; it is process-global.
#[test]
fn load_events_reach_the_buffer_and_the_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("namemap.log");
    let mappings = dir.path().join("joined.srg");
    fs::write(&mappings, "CL: a/B c/D\nFD: a/B/f c/D/g\n").unwrap();

    let buffer = init_tracing(&LoggingConfig {
        level: "namemap.srg=debug".to_owned(),
        stderr: false,
        file: Some(log_path.clone()),
        ..LoggingConfig::default()
    });
    assert!(Arc::ptr_eq(&buffer, &global_log_buffer()));
    assert!(Arc::ptr_eq(&buffer, &init_tracing(&LoggingConfig::default())));

    SymbolMap::load(&mappings).unwrap();

    let mappings_path = mappings.display().to_string();
    let loaded = buffer
        .last_lines(usize::MAX)
        .into_iter()
        .find(|line| line.contains("loaded mappings") && line.contains(&mappings_path))
        .expect("load event should be buffered");
    assert!(loaded.contains("DEBUG"), "{loaded}");
    assert!(loaded.contains("namemap.srg"), "{loaded}");
    assert!(loaded.contains("classes=1"), "{loaded}");
    assert!(loaded.contains("fields=1"), "{loaded}");
    assert!(loaded.contains("methods=0"), "{loaded}");

    let file_log = fs::read_to_string(&log_path).unwrap();
    assert!(
        file_log
            .lines()
            .any(|line| line.contains("loaded mappings") && line.contains(&mappings_path)),
        "{file_log}"
    );
}
