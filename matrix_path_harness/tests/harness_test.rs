use matrix_path_harness::report::run_fixture;
use matrix_path_harness::{find_fixtures, load_fixture, HarnessError};
use matrix_pathfinding::{CacheMode, PathFinderConfig};
use std::fs;
use std::path::{Path, PathBuf};

fn fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

#[test]
fn bundled_fixtures_match_their_expectations() {
    let fixtures = find_fixtures(&fixture_dir()).unwrap();
    let names: Vec<_> = fixtures
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["corridor.json", "islands.json", "maze.json"]);
    for path in &fixtures {
        let fixture = load_fixture(path).unwrap();
        for report in run_fixture(&fixture, PathFinderConfig::default()) {
            assert!(
                report.matches(),
                "{}: {:?} -> {:?} gave {}",
                path.display(),
                report.query.start,
                report.query.end,
                report.found()
            );
        }
    }
}

#[test]
fn scan_cache_answers_reversed_queries() {
    let fixture = load_fixture(&fixture_dir().join("maze.json")).unwrap();
    let config = PathFinderConfig {
        cache_mode: CacheMode::Scan,
        ..PathFinderConfig::default()
    };
    let reports = run_fixture(&fixture, config);
    // The reversed query is the only one whose outcome depends on the first-entry lookup.
    let reversed = &reports[2];
    assert!(!reversed.matches());
    assert!(reversed.found().starts_with("[(5,5),"));
    assert!(reports
        .iter()
        .enumerate()
        .all(|(i, report)| i == 2 || report.matches()));
}

#[test]
fn dimension_mismatch_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(
        &path,
        r#"{"dimensions": {"rows": 3, "cols": 2}, "data": [[1, 1], [1, 1]], "paths": []}"#,
    )
    .unwrap();
    match load_fixture(&path) {
        Err(HarnessError::DimensionMismatch {
            rows: 3,
            cols: 2,
            actual_rows: 2,
            actual_cols: 2,
        }) => {}
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn malformed_json_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{\"dimensions\": ").unwrap();
    assert!(matches!(load_fixture(&path), Err(HarnessError::Json { .. })));
    assert!(matches!(
        load_fixture(&dir.path().join("missing.json")),
        Err(HarnessError::Io { .. })
    ));
}

#[test]
fn folders_without_fixtures_are_an_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("notes.txt"), "not a fixture").unwrap();
    assert!(matches!(
        find_fixtures(dir.path()),
        Err(HarnessError::NoFixtures(_))
    ));
}
