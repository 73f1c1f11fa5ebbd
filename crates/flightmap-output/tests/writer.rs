//! Integration tests for model table output.

use std::fs;

use flightmap_model::{AirlineConstant, ExactMapping, NumSuffixRule, RuleModel, SuffixDeltaRule};
use flightmap_output::{ModelTable, OutputError, write_model, write_table};

fn sample_model() -> RuleModel {
    RuleModel {
        confirmed_mappings: vec![ExactMapping {
            airline_icao: "EXS".to_string(),
            airline_iata: "LS".to_string(),
            callsign: "EXS3CM".to_string(),
            iata_flight: "LS239".to_string(),
            digits: 239,
        }],
        num_suffix_rules: vec![NumSuffixRule {
            airline_icao: "EXS".to_string(),
            airline_iata: "LS".to_string(),
            num: 3,
            suffix: "CM".to_string(),
            digits: 239,
            support: 3,
            purity: 1.0,
        }],
        suffix_delta_rules: vec![],
        airline_constants: vec![AirlineConstant {
            airline_icao: "EXS".to_string(),
            airline_iata: "LS".to_string(),
            constant_delta: Some(236),
            constant_delta_purity: 2.0 / 3.0,
            constant_prefix: None,
            identity_rate: 0.0,
            rows_seen: 3,
            ns_rules_learned: 1,
            ns_rules_candidates: 1,
        }],
    }
}

#[test]
fn writes_all_tables_with_fixed_headers() {
    let dir = tempfile::tempdir().expect("temp dir");
    let out = dir.path().join("model");
    let paths = write_model(&out, &sample_model()).expect("write model");

    assert_eq!(paths.confirmed_mappings, out.join("confirmed_mappings.csv"));
    for path in paths.all() {
        assert!(path.is_file(), "{} missing", path.display());
    }

    let mappings = fs::read_to_string(&paths.confirmed_mappings).expect("read");
    insta::assert_snapshot!(mappings, @r"
    airline_icao,airline_iata,callsign,iata_flight,digits
    EXS,LS,EXS3CM,LS239,239
    ");

    let constants = fs::read_to_string(&paths.airline_constants).expect("read");
    insta::assert_snapshot!(constants, @r"
    airline_icao,airline_iata,constant_delta,constant_delta_purity,constant_prefix,identity_rate,rows_seen,ns_rules_learned,ns_rules_candidates
    EXS,LS,236,0.6667,,0.0000,3,1,1
    ");
}

#[test]
fn empty_tables_still_have_headers() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_table::<SuffixDeltaRule>(dir.path(), &[]).expect("write table");
    let contents = fs::read_to_string(path).expect("read");
    assert_eq!(
        contents,
        "airline_icao,airline_iata,suffix,delta,support,purity\n"
    );
}

#[test]
fn rows_follow_the_column_order() {
    let dir = tempfile::tempdir().expect("temp dir");
    let model = sample_model();
    let path = write_table(dir.path(), &model.num_suffix_rules).expect("write table");
    let contents = fs::read_to_string(path).expect("read");
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some(NumSuffixRule::COLUMNS.join(",").as_str()));
    assert_eq!(lines.next(), Some("EXS,LS,3,CM,239,3,1.0000"));
    assert_eq!(lines.next(), None);
}

#[test]
fn staging_files_do_not_remain() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_model(dir.path(), &sample_model()).expect("write model");
    let mut names: Vec<String> = fs::read_dir(dir.path())
        .expect("list")
        .map(|entry| entry.expect("entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(
        names,
        vec![
            "airline_constants.csv",
            "confirmed_mappings.csv",
            "num_suffix_rules.csv",
            "suffix_delta_rules.csv",
        ]
    );
}

#[test]
fn output_dir_blocked_by_a_file_is_fatal() {
    let dir = tempfile::tempdir().expect("temp dir");
    let blocker = dir.path().join("model");
    fs::write(&blocker, "").expect("write blocker");
    let err = write_model(&blocker, &sample_model()).expect_err("not a directory");
    assert!(matches!(err, OutputError::CreateDir { .. }));
}
