//! Batch pipeline tests over files on disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use compo_cli::pipeline::{BatchOptions, convert_file, discover, run_batch};
use compo_model::{ConversionOptions, DocumentVariant, FillMode};
use compo_report::VerificationOutcome;
use serde_json::{Value, json};
use tempfile::TempDir;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

const COHORT: &str = r#"{
    "id": "C1",
    "members": [{ "id": "P1", "metaData": {} }],
    "metaData": { "created": "2021-01-01T00:00:00Z", "createdBy": "curator", "resources": [] }
}"#;

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent");
    }
    fs::write(&path, contents).expect("write file");
    path
}

const MALFORMED_COHORT: &str = r#"{
    "id": "C2",
    "members": [{
        "id": "P1",
        "phenotypicFeatures": [{ "type": { "id": "no-colon", "label": "broken" } }]
    }],
    "metaData": {}
}"#;

fn write_sample(dir: &Path) -> PathBuf {
    write_input(dir, "sample", COHORT)
}

fn write_input(dir: &Path, stem: &str, document: &str) -> PathBuf {
    write(dir, &format!("{stem}.ctxinfo"), r#"{ "ctx": { "language": "en" } }"#);
    write(dir, &format!("{stem}.context"), r#"{ "language": [{ "|code": "en" }] }"#);
    write(dir, &format!("{stem}.json"), document)
}

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("lock logs")).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("lock logs").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn options(output_dir: &Path) -> BatchOptions {
    BatchOptions {
        conversion: ConversionOptions::new().with_fill_mode(FillMode::Skip),
        output_dir: output_dir.to_path_buf(),
        ..BatchOptions::default()
    }
}

fn read_output(path: &Path) -> Value {
    let raw = fs::read_to_string(path).expect("read output");
    serde_json::from_str(&raw).expect("output is json")
}

#[test]
fn converts_cohort_with_overlays() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_sample(&temp.path().join("data"));
    let out = temp.path().join("out");

    let converted = convert_file(&input, &options(&out)).expect("convert");
    assert_eq!(converted.variant, DocumentVariant::Cohort);
    assert_eq!(converted.output, out.join("COMPOSITION_FROMsample.json"));
    assert_eq!(converted.verification, VerificationOutcome::NotRequested);

    let composition = read_output(&converted.output);
    insta::assert_json_snapshot!(composition, @r#"
    {
      "cohort_report": {
        "cohort": [
          {
            "id": [
              {
                "|id": "C1"
              }
            ],
            "metadata": [
              {
                "created": [
                  "2021-01-01T00:00:00Z"
                ],
                "created_by": [
                  "curator"
                ],
                "resource": []
              }
            ],
            "phenopacket": [
              {
                "id": [
                  {
                    "|id": "P1"
                  }
                ]
              }
            ]
          }
        ],
        "language": [
          {
            "|code": "en"
          }
        ]
      },
      "ctx": {
        "language": "en"
      }
    }
    "#);
}

#[test]
fn output_uses_four_space_indent_without_trailing_newline() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_sample(temp.path());
    let converted = convert_file(&input, &options(temp.path())).expect("convert");

    let raw = fs::read_to_string(&converted.output).expect("read output");
    assert!(raw.starts_with("{\n    \"cohort_report\""));
    assert!(raw.ends_with('}'));
}

#[test]
fn missing_context_fails_before_parsing() {
    let temp = TempDir::new().expect("temp dir");
    write(temp.path(), "lonely.ctxinfo", "{}");
    let input = write(temp.path(), "lonely.json", "not json at all");

    let error = convert_file(&input, &options(temp.path())).unwrap_err();
    let message = format!("{error:#}");
    assert!(message.contains("lonely.context"), "{message}");
    assert!(!temp.path().join("COMPOSITION_FROMlonely.json").exists());
}

#[test]
fn check_reports_differences_against_target() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_sample(temp.path());
    let mut target = read_output(
        &convert_file(&input, &options(&temp.path().join("first")))
            .expect("convert")
            .output,
    );
    target["cohort_report"]["language"] = json!([{ "|code": "de" }]);
    target["extra"] = json!(true);
    write(temp.path(), "sample.target", &target.to_string());

    let verified = BatchOptions {
        verify: true,
        ..options(temp.path())
    };
    let converted = convert_file(&input, &verified).expect("convert");
    assert_eq!(
        converted.verification,
        VerificationOutcome::Compared {
            added: 1,
            removed: 0,
            changed: 1,
        }
    );
}

#[test]
fn check_without_target_is_not_a_failure() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_sample(temp.path());
    let verified = BatchOptions {
        verify: true,
        ..options(temp.path())
    };
    let converted = convert_file(&input, &verified).expect("convert");
    assert_eq!(converted.verification, VerificationOutcome::MissingTarget);
    assert!(converted.output.is_file());
}

#[test]
fn pathfile_roots_are_combined_with_arguments() {
    let temp = TempDir::new().expect("temp dir");
    let listed = write_sample(&temp.path().join("listed"));
    let direct = write(&temp.path().join("direct"), "other.json", COHORT);
    let pathfile = write(
        temp.path(),
        "roots.txt",
        &format!("\n{}\n\n", temp.path().join("listed").display()),
    );

    let found = discover(&[direct.clone()], Some(&pathfile)).expect("discover");
    assert_eq!(found, vec![direct, listed]);
}

#[test]
fn unparsable_target_keeps_the_file_converted() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_sample(temp.path());
    write(temp.path(), "sample.target", "{ truncated");
    let verified = BatchOptions {
        verify: true,
        ..options(temp.path())
    };

    let converted = convert_file(&input, &verified).expect("convert");
    assert_eq!(converted.verification, VerificationOutcome::InvalidTarget);
    assert!(converted.output.is_file());

    let run = run_batch(&[input], &verified);
    assert!(!run.has_errors());
    assert_eq!(run.outcomes[0].verification, VerificationOutcome::InvalidTarget);
    assert!(run.outcomes[0].output.is_some());
}

fn batch_with_failure_in_the_middle(dir: &Path) -> Vec<PathBuf> {
    vec![
        write_input(dir, "a", COHORT),
        write_input(dir, "b", MALFORMED_COHORT),
        write_input(dir, "c", COHORT),
    ]
}

#[test]
fn fail_fast_stops_after_first_failure() {
    let temp = TempDir::new().expect("temp dir");
    let files = batch_with_failure_in_the_middle(temp.path());

    let run = run_batch(&files, &options(temp.path()));
    let converted = run.outcomes.iter().filter(|o| o.is_success()).count();
    assert_eq!(converted, 1);
    assert_eq!(run.outcomes.len() - converted, 1);
    assert_eq!(run.skipped, 1);
    assert!(run.has_errors());
    assert!(!temp.path().join("COMPOSITION_FROMc.json").exists());
}

#[test]
fn continue_on_error_converts_the_rest() {
    let temp = TempDir::new().expect("temp dir");
    let files = batch_with_failure_in_the_middle(temp.path());
    let continuing = BatchOptions {
        fail_fast: false,
        ..options(temp.path())
    };

    let run = run_batch(&files, &continuing);
    let converted = run.outcomes.iter().filter(|o| o.is_success()).count();
    assert_eq!(converted, 2);
    assert_eq!(run.outcomes.len(), 3);
    assert_eq!(run.skipped, 0);
    assert!(run.has_errors());
    assert!(temp.path().join("COMPOSITION_FROMc.json").is_file());
}

#[test]
fn failed_conversion_keeps_classified_variant() {
    let temp = TempDir::new().expect("temp dir");
    let files = batch_with_failure_in_the_middle(temp.path());

    let run = run_batch(&files, &options(temp.path()));
    let failed = &run.outcomes[1];
    assert_eq!(failed.input, files[1]);
    assert_eq!(failed.variant, Some(DocumentVariant::Cohort));
    assert!(failed.output.is_none());
    let message = failed.error.as_deref().expect("error message");
    assert!(message.contains("no-colon"), "{message}");
}

#[test]
fn error_message_names_each_cause_once() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_input(temp.path(), "broken", "{ \"id\": ");

    let run = run_batch(&[input], &options(temp.path()));
    let failed = &run.outcomes[0];
    assert_eq!(failed.variant, None);
    let message = failed.error.as_deref().expect("error message");
    let cause = serde_json::from_str::<Value>("{ \"id\": ")
        .expect_err("truncated json")
        .to_string();
    assert_eq!(message.matches(cause.as_str()).count(), 1, "{message}");
    assert!(message.starts_with("load input: invalid JSON in"), "{message}");
}

#[test]
fn rerun_in_output_directory_ignores_earlier_compositions() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_sample(temp.path());
    convert_file(&input, &options(temp.path())).expect("first run");
    assert!(temp.path().join("COMPOSITION_FROMsample.json").is_file());

    let found = discover(&[temp.path().to_path_buf()], None).expect("discover");
    assert_eq!(found, vec![input]);
}

#[test]
fn converted_composition_is_logged_at_debug() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_sample(temp.path());
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        convert_file(&input, &options(temp.path())).expect("convert");
    });
    let contents = logs.contents();
    assert!(contents.contains("composition content"), "{contents}");
    assert!(contents.contains("\"cohort_report\""), "{contents}");
}
