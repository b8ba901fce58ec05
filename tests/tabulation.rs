use std::io::Write;

use methyltab::prelude::*;

fn init_logger() {
    let _ = pretty_env_logger::try_init();
}

const SAMPLE_TABLE: &str = "\
ddm1 ddmP-1 Nip-1 NIP P1 P2 YJ1 YJ2 other
0.55 0.60 NA 0.55 0.20 0.10 0.90 NA 123
0.55 abc 0.70 NA 0.10 0.10 0.90 0.85 456
";

#[test]
fn full_table_matches_sync_engine() {
    init_logger();

    let engine = TabulationEngine::new();
    let expected = engine.tabulate(SAMPLE_TABLE).unwrap();

    let handle = spawn_tabulation(engine, SAMPLE_TABLE.to_string());
    let result = handle.wait().unwrap();

    assert_eq!(result, expected);
    assert_eq!(result.table(SampleGroup::Core).count(55), 3);
    assert_eq!(result.table(SampleGroup::Core).count(60), 1);
    assert_eq!(result.table(SampleGroup::Core).count(70), 1);
    assert_eq!(result.table(SampleGroup::PSeries).count(10), 3);
    assert_eq!(result.table(SampleGroup::PSeries).count(20), 1);
    assert_eq!(result.table(SampleGroup::YjSeries).count(90), 2);
    assert_eq!(result.table(SampleGroup::YjSeries).count(85), 1);
    // The "other" column never reaches any table.
    assert_eq!(result.total_observations(), 12);
}

#[test]
fn file_input_round_trip() {
    init_logger();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE_TABLE.as_bytes()).unwrap();

    let handle = spawn_tabulation_file(
        TabulationEngine::new(),
        file.path().to_path_buf(),
    );
    let result = handle.wait().unwrap();

    assert_eq!(
        result,
        TabulationEngine::new().tabulate(SAMPLE_TABLE).unwrap()
    );
}

#[test]
fn unreadable_file_is_terminal_failure() {
    init_logger();

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist.tsv");

    let handle = spawn_tabulation_file(TabulationEngine::new(), missing);
    let err = handle.wait().unwrap_err();
    assert!(err.to_string().contains("Failed to read file"));
}

#[test]
fn empty_file_is_terminal_failure() {
    init_logger();

    let file = tempfile::NamedTempFile::new().unwrap();
    let handle = spawn_tabulation_file(
        TabulationEngine::new(),
        file.path().to_path_buf(),
    );

    let err = handle.wait().unwrap_err();
    assert_eq!(
        err.downcast_ref::<TabulateError>(),
        Some(&TabulateError::EmptyInput)
    );
}

#[test]
fn result_serializes_to_wire_shape() {
    init_logger();

    let result = TabulationEngine::new()
        .tabulate("ddm1 P1 YJ1 other\n0.55 0.2 NA xyz\n")
        .unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "group1": { "55": 1 },
            "pSamples": { "20": 1 },
            "yjSamples": {}
        })
    );
}

#[test]
fn concurrent_analyses_are_independent() {
    init_logger();

    let first = spawn_tabulation(
        TabulationEngine::new(),
        "P1\n0.10\n0.10\n".to_string(),
    );
    let second = spawn_tabulation(
        TabulationEngine::new(),
        "YJ1\n0.90\n".to_string(),
    );

    let first = first.wait().unwrap();
    let second = second.wait().unwrap();

    assert_eq!(first.table(SampleGroup::PSeries).count(10), 2);
    assert!(first.table(SampleGroup::YjSeries).is_empty());
    assert_eq!(second.table(SampleGroup::YjSeries).count(90), 1);
    assert!(second.table(SampleGroup::PSeries).is_empty());
}
