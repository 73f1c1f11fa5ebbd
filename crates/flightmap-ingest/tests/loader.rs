//! Integration tests for schedule table loading.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use flightmap_ingest::{IngestError, load_records, load_records_from_reader};

fn load_str(contents: &str) -> flightmap_ingest::Result<flightmap_ingest::LoadedRecords> {
    load_records_from_reader(Cursor::new(contents.to_string()), Path::new("test.csv"))
}

#[test]
fn loads_valid_rows_in_input_order() {
    let loaded = load_str(
        "number,callsign,airline_iata,airline_icao\n\
         LS239,EXS3CM,LS,EXS\n\
         2777,baw2777,BA,BAW\n",
    )
    .expect("load");

    assert_eq!(loaded.rows_read, 2);
    assert_eq!(loaded.records.len(), 2);
    assert_eq!(loaded.skipped.total(), 0);

    let first = &loaded.records[0];
    assert_eq!(first.callsign, "EXS3CM");
    assert_eq!(first.full_iata, "LS239");

    let second = &loaded.records[1];
    assert_eq!(second.callsign, "BAW2777");
    assert_eq!(second.airline_iata, "BA");
    assert_eq!(second.digits, 2777);
    assert_eq!(second.suffix, "");
}

#[test]
fn column_order_is_irrelevant_and_extra_columns_are_ignored() {
    let loaded = load_str(
        " airline_icao ,notes,callsign,number,airline_iata\n\
         EXS,hello,EXS3CM,239,LS\n",
    )
    .expect("load");
    assert_eq!(loaded.records.len(), 1);
    assert_eq!(loaded.records[0].full_iata, "LS239");
}

#[test]
fn missing_columns_are_fatal_and_all_listed() {
    let err = load_str("callsign,airline_iata\nEXS3CM,LS\n").expect_err("missing columns");
    match err {
        IngestError::MissingColumns { columns, .. } => {
            assert_eq!(columns, vec!["airline_icao", "number"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn header_names_must_match_exactly_after_trimming() {
    let err = load_str("Number,callsign,airline_iata,airline_icao\n").expect_err("case matters");
    assert!(matches!(err, IngestError::MissingColumns { ref columns, .. } if columns == &["number"]));
}

#[test]
fn unparseable_rows_are_skipped_and_counted() {
    let loaded = load_str(
        "number,callsign,airline_iata,airline_icao\n\
         LS239,EXS3CM,LS,EXS\n\
         LS240,N12345,LS,EXS\n\
         240,EXS4CM,,EXS\n\
         ,EXS5CM,LS,EXS\n",
    )
    .expect("load");
    assert_eq!(loaded.rows_read, 4);
    assert_eq!(loaded.records.len(), 1);
    assert_eq!(loaded.skipped.invalid_callsign, 1);
    assert_eq!(loaded.skipped.invalid_designator, 2);
}

#[test]
fn short_rows_read_missing_fields_as_empty() {
    let loaded = load_str(
        "callsign,number,airline_iata,airline_icao\n\
         EXS3CM,LS239\n\
         EXS4CM\n",
    )
    .expect("load");
    assert_eq!(loaded.records.len(), 1);
    assert_eq!(loaded.records[0].callsign, "EXS3CM");
    assert_eq!(loaded.skipped.invalid_designator, 1);
}

#[test]
fn airline_column_disagreements_are_counted_but_parsed_values_win() {
    let loaded = load_str(
        "number,callsign,airline_iata,airline_icao\n\
         LS239,EXS3CM,LS,EXS\n\
         BA100,SHT100,BA,BAW\n\
         U2100,EZY100,EC,EZY\n",
    )
    .expect("load");
    assert_eq!(loaded.records.len(), 3);
    assert_eq!(loaded.icao_mismatches, 1);
    assert_eq!(loaded.iata_mismatches, 1);
    assert_eq!(loaded.records[1].airline_icao, "SHT");
    assert_eq!(loaded.records[2].airline_iata, "U2");
}

#[test]
fn header_only_table_yields_no_records() {
    let loaded = load_str("number,callsign,airline_iata,airline_icao\n").expect("load");
    assert!(loaded.records.is_empty());
    assert_eq!(loaded.rows_read, 0);
}

#[test]
fn loads_from_file_with_bom() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("schedules.csv");
    fs::write(
        &path,
        "\u{feff}number,callsign,airline_iata,airline_icao\nLS239,EXS3CM,LS,EXS\n",
    )
    .expect("write input");
    let loaded = load_records(&path).expect("load");
    assert_eq!(loaded.records.len(), 1);
}

#[test]
fn missing_file_is_fatal() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = load_records(&dir.path().join("absent.csv")).expect_err("no file");
    assert!(matches!(err, IngestError::Open { .. }));
}
