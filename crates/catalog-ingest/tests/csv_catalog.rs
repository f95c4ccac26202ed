//! Integration tests for catalog CSV loading.

use std::io::Write;

use catalog_ingest::{DataLoadError, load_catalog, read_records};
use catalog_model::{OrphanFlag, RecordId};

const FULL_CSV: &str = "\
Disease,Drug_Name,Orphan,Category,Total Score,1-Pager,Studies
5052B,Rapamycin,Yes,Novel Pathway,9.1,Mechanism overview.,Phase II data.
5052B,LDN,No,StuffThatWorks,8.4,,
5052B,CoQ10 + Statin,No,Drug-Supplement Combo,6.0,Pairing rationale.,
";

#[test]
fn loads_records_in_file_order_with_sequential_ids() {
    let records = read_records(FULL_CSV.as_bytes()).expect("load catalog");
    assert_eq!(records.len(), 3);
    assert_eq!(
        records.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![RecordId(0), RecordId(1), RecordId(2)]
    );
    assert_eq!(records[0].drug_name, "Rapamycin");
    assert_eq!(records[0].orphan, OrphanFlag::Yes);
    assert_eq!(records[1].category, "StuffThatWorks");
    assert_eq!(records[2].total_score, "6.0");
}

#[test]
fn empty_optional_cells_load_as_none() {
    let records = read_records(FULL_CSV.as_bytes()).expect("load catalog");
    assert_eq!(records[0].one_pager.as_deref(), Some("Mechanism overview."));
    assert_eq!(records[0].studies.as_deref(), Some("Phase II data."));
    assert!(records[1].one_pager.is_none());
    assert!(records[1].studies.is_none());
    assert_eq!(records[2].one_pager.as_deref(), Some("Pairing rationale."));
    assert!(records[2].studies.is_none());
}

#[test]
fn optional_columns_may_be_absent_entirely() {
    let csv = "Disease,Drug_Name,Orphan,Category,Total Score\n5052B,LDN,No,StuffThatWorks,8.4\n";
    let records = read_records(csv.as_bytes()).expect("load catalog");
    assert_eq!(records.len(), 1);
    assert!(records[0].one_pager.is_none());
    assert_eq!(records[0].one_pager_text(), "No 1-Pager available.");
}

#[test]
fn missing_required_column_is_a_load_error() {
    let csv = "Disease,Drug_Name,Category,Total Score\n5052B,LDN,StuffThatWorks,8.4\n";
    let err = read_records(csv.as_bytes()).expect_err("must fail without Orphan column");
    match err {
        DataLoadError::MissingColumn(name) => assert_eq!(name, "Orphan"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unrecognized_orphan_value_is_a_load_error() {
    let csv = "Disease,Drug_Name,Orphan,Category,Total Score\n5052B,LDN,Maybe,StuffThatWorks,8.4\n";
    let err = read_records(csv.as_bytes()).expect_err("must fail on bad orphan flag");
    match err {
        DataLoadError::InvalidOrphanFlag { row, value } => {
            assert_eq!(row, 1);
            assert_eq!(value, "Maybe");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn headers_only_source_is_an_empty_catalog() {
    let csv = "Disease,Drug_Name,Orphan,Category,Total Score\n";
    let records = read_records(csv.as_bytes()).expect("empty catalog is valid");
    assert!(records.is_empty());
}

#[test]
fn blank_rows_are_skipped() {
    let csv = "Disease,Drug_Name,Orphan,Category,Total Score\n,,,,\n5052B,LDN,No,StuffThatWorks,8.4\n";
    let records = read_records(csv.as_bytes()).expect("load catalog");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, RecordId(0));
}

#[test]
fn bom_in_header_row_is_tolerated() {
    let csv = "\u{feff}Disease,Drug_Name,Orphan,Category,Total Score\n5052B,LDN,No,StuffThatWorks,8.4\n";
    let records = read_records(csv.as_bytes()).expect("load catalog");
    assert_eq!(records.len(), 1);
}

#[test]
fn load_catalog_reads_from_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("data.csv");
    let mut file = std::fs::File::create(&path).expect("create csv");
    file.write_all(FULL_CSV.as_bytes()).expect("write csv");

    let records = load_catalog(&path).expect("load catalog from disk");
    assert_eq!(records.len(), 3);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = load_catalog(&dir.path().join("absent.csv")).expect_err("must fail");
    assert!(matches!(err, DataLoadError::Io(_)));
}
