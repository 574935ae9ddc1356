//! Tests for dataset loading, relation snapshots and configuration files.
mod common;
use common::*;
use serde_json::json;
use std::fs;
use tempfile::tempdir;
use tradeflow::prelude::*;
use tradeflow::relation::loader::{EXPORT_PARTNER_INDICATOR, IMPORT_PARTNER_INDICATOR};

fn aland_store() -> RelationStore {
    let records: Vec<RawTradeRecord> = serde_json::from_str(TRADE_SUMMARY_JSON).unwrap();
    DatasetLoader::new().load_records(records)
}

#[test]
fn test_normalize_keeps_only_valid_partner_rows() {
    let store = aland_store();

    assert_eq!(
        store.rows(),
        [
            RelationRow::new("Aland", "Borduria", Direction::Export, 12.5),
            RelationRow::new("Aland", "Carpania", Direction::Export, 40.25),
            RelationRow::new("Aland", "Dunland", Direction::Import, 7.0),
        ]
    );
}

#[test]
fn test_normalized_store_feeds_the_tracer() {
    let orchestrator = Orchestrator::new(aland_store());
    let output = orchestrator.run("Aland", "Export").unwrap();

    // Carpania has the larger value, so it is discovered first.
    assert_eq!(output.diagram.graph.labels, ["Aland", "Carpania", "Borduria"]);
    assert_eq!(orchestrator.countries(), ["Aland"]);
}

#[test]
fn test_value_for_accepts_numbers_and_numeric_strings() {
    assert_eq!(
        raw_record("A", "B", EXPORT_PARTNER_INDICATOR, "Export", json!(3.5)).value_for("2019"),
        Some(3.5)
    );
    assert_eq!(
        raw_record("A", "B", EXPORT_PARTNER_INDICATOR, "Export", json!(" 12 ")).value_for("2019"),
        Some(12.0)
    );
    assert_eq!(
        raw_record("A", "B", EXPORT_PARTNER_INDICATOR, "Export", json!("n/a")).value_for("2019"),
        None
    );
    assert_eq!(
        raw_record("A", "B", EXPORT_PARTNER_INDICATOR, "Export", json!(null)).value_for("2019"),
        None
    );
    assert_eq!(
        raw_record("A", "B", EXPORT_PARTNER_INDICATOR, "Export", json!(1.0)).value_for("2020"),
        None
    );
}

#[test]
fn test_loader_year_selection() {
    let mut record = raw_record("A", "B", EXPORT_PARTNER_INDICATOR, "Export", json!(1.0));
    record.values.insert("2020".to_string(), json!(2.0));

    let rows = DatasetLoader::new()
        .with_year("2020")
        .normalize(vec![record.clone()]);
    assert_eq!(rows, [RelationRow::new("A", "B", Direction::Export, 2.0)]);

    let rows = DatasetLoader::new().with_year("2018").normalize(vec![record]);
    assert!(rows.is_empty());
}

#[test]
fn test_loader_custom_ignore_list_and_indicators() {
    let records = vec![
        raw_record("A", "World", EXPORT_PARTNER_INDICATOR, "Export", json!(1.0)),
        raw_record("A", "Other", EXPORT_PARTNER_INDICATOR, "Export", json!(1.0)),
        raw_record("A", "B", IMPORT_PARTNER_INDICATOR, "Import", json!(1.0)),
    ];

    let rows = DatasetLoader::new()
        .with_ignored(["Other"])
        .with_indicators([EXPORT_PARTNER_INDICATOR])
        .normalize(records);

    assert_eq!(rows, [RelationRow::new("A", "World", Direction::Export, 1.0)]);
}

#[test]
fn test_load_single_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("aland.json");
    fs::write(&path, TRADE_SUMMARY_JSON).unwrap();

    let store = DatasetLoader::new().load(&path).unwrap();
    assert_eq!(store.len(), 3);
    assert_eq!(store, aland_store());
}

#[test]
fn test_load_dir_reads_dataset_files_in_name_order() {
    let dir = tempdir().unwrap();
    let second = json!([
        {"Reporter": "Borduria", "Partner": "Aland", "Indicator": EXPORT_PARTNER_INDICATOR, "Indicator Type": "Export", "2019": 1.0}
    ]);
    fs::write(dir.path().join("b_borduria.json"), second.to_string()).unwrap();
    fs::write(dir.path().join("a_aland.json"), TRADE_SUMMARY_JSON).unwrap();
    fs::write(dir.path().join("notes.txt"), "not a dataset").unwrap();
    fs::create_dir(dir.path().join("nested.json")).unwrap();

    let store = DatasetLoader::new().load(dir.path()).unwrap();

    assert_eq!(store.len(), 4);
    assert_eq!(store.rows()[0].reporter, "Aland");
    assert_eq!(
        store.rows()[3],
        RelationRow::new("Borduria", "Aland", Direction::Export, 1.0)
    );
    assert_eq!(store.reporters(), ["Aland", "Borduria"]);
}

#[test]
fn test_load_csv_export() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("borduria.csv");
    fs::write(&path, TRADE_SUMMARY_CSV).unwrap();

    let store = DatasetLoader::new().load(&path).unwrap();

    assert_eq!(
        store.rows(),
        [
            RelationRow::new("Borduria", "Korea, Rep.", Direction::Export, 22.5),
            RelationRow::new("Borduria", "Aland", Direction::Import, 8.75),
        ]
    );
}

#[test]
fn test_load_dir_of_csv_and_json_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a_aland.json"), TRADE_SUMMARY_JSON).unwrap();
    fs::write(dir.path().join("b_borduria.CSV"), TRADE_SUMMARY_CSV).unwrap();
    let single_row = format!(
        "Reporter,Partner,Indicator Type,Indicator,2019\nCarpania,Aland,Export,{},6\n",
        EXPORT_PARTNER_INDICATOR
    );
    fs::write(dir.path().join("c_carpania.csv"), single_row).unwrap();

    let store = DatasetLoader::new().load(dir.path()).unwrap();

    assert_eq!(store.len(), 6);
    assert_eq!(store.reporters(), ["Aland", "Borduria", "Carpania"]);
    assert_eq!(
        store.rows()[5],
        RelationRow::new("Carpania", "Aland", Direction::Export, 6.0)
    );

    let output = Orchestrator::new(store).run("Carpania", "Export").unwrap();
    assert_eq!(
        output.diagram.graph.labels,
        ["Carpania", "Aland", "Borduria", "Korea, Rep."]
    );
}

#[test]
fn test_non_finite_values_are_missing() {
    let records = vec![
        raw_record("A", "B", EXPORT_PARTNER_INDICATOR, "Export", json!("NaN")),
        raw_record("A", "C", EXPORT_PARTNER_INDICATOR, "Export", json!(10.0)),
        raw_record("A", "D", EXPORT_PARTNER_INDICATOR, "Export", json!("inf")),
        raw_record("A", "E", EXPORT_PARTNER_INDICATOR, "Export", json!("-Infinity")),
    ];

    let store = DatasetLoader::new().load_records(records);

    assert_eq!(store.rows(), [RelationRow::new("A", "C", Direction::Export, 10.0)]);
    assert_eq!(store.view(Direction::Export).partners_of("A"), ["C"]);
}

#[test]
fn test_non_finite_csv_cells_are_missing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nan.csv");
    let body = format!(
        "Reporter,Partner,Indicator Type,Indicator,2019\nA,B,Export,{ind},NaN\nA,C,Export,{ind},10\n",
        ind = EXPORT_PARTNER_INDICATOR
    );
    fs::write(&path, body).unwrap();

    let store = DatasetLoader::new().load(&path).unwrap();
    assert_eq!(store.view(Direction::Export).partners_of("A"), ["C"]);
}

#[test]
fn test_load_missing_source() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.json");

    let err = DatasetLoader::new().load(&missing).unwrap_err();
    assert!(matches!(err, DatasetError::InvalidSource(ref p) if p == &missing));
    assert!(err.to_string().contains("neither a file nor a directory"));
}

#[test]
fn test_load_malformed_file_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ this is not json").unwrap();

    let err = DatasetLoader::new().load(&path).unwrap_err();
    match &err {
        DatasetError::Parse { path: p, .. } => assert_eq!(p, &path),
        other => panic!("expected a parse error, got {:?}", other),
    }
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn test_snapshot_round_trip_through_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("relations.bin");
    let store = dense_store();

    store.save(&path).unwrap();
    let loaded = RelationStore::from_file(&path).unwrap();

    assert_eq!(loaded, store);
    let before = Orchestrator::new(store).run("A", "Export").unwrap();
    let after = Orchestrator::new(loaded).run("A", "Export").unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_snapshot_errors() {
    let dir = tempdir().unwrap();

    let err = RelationStore::from_file(dir.path().join("missing.bin")).unwrap_err();
    assert!(matches!(err, SnapshotError::Io { .. }));

    let err = RelationStore::from_bytes(&[0xff, 0xff, 0xff]).unwrap_err();
    assert!(matches!(err, SnapshotError::Decode(_)));
}

#[test]
fn test_config_defaults() {
    let config = FlowConfig::default();

    assert_eq!(config.max_depth, 100);
    assert_eq!(config.node_limit, None);
    assert_eq!(config.table_rows, 20);
    assert_eq!(config.year, "2019");
    assert_eq!(config.ignored, ["World", "Unspecified"]);
    assert_eq!(config.palette, Palette::default());
    assert_eq!(config.palette.len(), 18);
}

#[test]
fn test_config_partial_json_keeps_defaults() {
    let config = FlowConfig::from_json(r#"{ "max_depth": 3, "year": "2018" }"#).unwrap();

    assert_eq!(config.max_depth, 3);
    assert_eq!(config.year, "2018");
    assert_eq!(config.table_rows, 20);
    assert_eq!(config.loader().year(), "2018");
}

#[test]
fn test_config_rejects_empty_palette() {
    let err = FlowConfig::from_json(r#"{ "palette": [] }"#).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("at least one color"));
}

#[test]
fn test_config_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tradeflow.json");
    fs::write(&path, r#"{ "node_limit": 50, "ignored": ["World"] }"#).unwrap();

    let config = FlowConfig::from_file(&path).unwrap();
    assert_eq!(config.node_limit, Some(50));
    assert_eq!(config.ignored, ["World"]);

    let err = FlowConfig::from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}
