//! Tests for composition and batch report files.

use std::fs;
use std::path::PathBuf;

use compo_model::DocumentVariant;
use compo_report::{
    FileOutcome, VerificationOutcome, output_path, write_batch_report, write_composition,
};
use serde_json::{Value, json};
use tempfile::TempDir;

#[test]
fn writes_composition_into_nested_output_dir() {
    let temp = TempDir::new().expect("temp dir");
    let output_dir = temp.path().join("out/run1");
    let path = output_path(&output_dir, &PathBuf::from("data/sample.json")).expect("path");
    let composition = json!({ "cohort_report": { "cohort": [] } });

    write_composition(&path, &composition).expect("write");

    assert_eq!(path, output_dir.join("COMPOSITION_FROMsample.json"));
    let written: Value =
        serde_json::from_str(&fs::read_to_string(&path).expect("read")).expect("parse");
    assert_eq!(written, composition);
}

#[test]
fn batch_report_counts_outcomes() {
    let temp = TempDir::new().expect("temp dir");
    let report_path = temp.path().join("report.json");
    let outcomes = vec![
        FileOutcome::converted(
            PathBuf::from("a.json"),
            DocumentVariant::Interpretation,
            PathBuf::from("COMPOSITION_FROMa.json"),
            VerificationOutcome::Compared {
                added: 0,
                removed: 1,
                changed: 0,
            },
        ),
        FileOutcome::failed(PathBuf::from("b.json"), None, "missing ctxinfo".to_string()),
    ];

    write_batch_report(&report_path, &outcomes).expect("write report");

    let report: Value =
        serde_json::from_str(&fs::read_to_string(&report_path).expect("read")).expect("parse");
    assert_eq!(report["schema"], "compo.batch-report");
    assert_eq!(report["schema_version"], 1);
    assert_eq!(report["converted"], 1);
    assert_eq!(report["failed"], 1);
    assert!(report["generated_at"].as_str().is_some());
    assert_eq!(report["files"][0]["verification"]["removed"], 1);
    assert_eq!(report["files"][1]["error"], "missing ctxinfo");
}
