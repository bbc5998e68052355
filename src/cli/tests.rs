use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

use lib::cli::{Output, OutputKind};
use log::LevelFilter;
use tempfile::NamedTempFile;

use super::{run, Opts, Summary, DEFAULT_INPUT};
use crate::similarity::Scoring;
use crate::LoadError;

fn args(args: &[&str]) -> Vec<OsString> {
    args.iter().map(OsString::from).collect()
}

fn example() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n")
        .unwrap();
    file
}

fn run_with(opts: &Opts) -> (anyhow::Result<Summary>, String) {
    let mut o = Output::new(Vec::new(), opts.output_kind());
    let result = run(opts, &mut o);
    (result, String::from_utf8(o.into_inner()).unwrap())
}

#[test]
fn test_default_opts() {
    let opts = Opts::parse_from(args(&[])).unwrap();
    assert_eq!(opts.input, PathBuf::from(DEFAULT_INPUT));
    assert_eq!(opts.scoring, Scoring::Distinct);
    assert!(!opts.distance);
    assert_eq!(opts.output_kind(), OutputKind::Normal);
    assert_eq!(opts.log_level(), LevelFilter::Info);
}

#[test]
fn test_all_opts() {
    let opts = Opts::parse_from(args(&[
        "--input",
        "other.txt",
        "--distance",
        "--per-occurrence",
        "--verbose",
        "--",
        "--ignored",
    ]))
    .unwrap();

    assert_eq!(opts.input, PathBuf::from("other.txt"));
    assert!(opts.distance);
    assert_eq!(opts.scoring, Scoring::PerOccurrence);
    assert_eq!(opts.log_level(), LevelFilter::Debug);
}

#[test]
fn test_json_keeps_logging() {
    let opts = Opts::parse_from(args(&["--json", "--verbose"])).unwrap();
    assert_eq!(opts.output_kind(), OutputKind::Json);
    assert_eq!(opts.log_level(), LevelFilter::Debug);
}

#[test]
fn test_bad_opts() {
    let error = Opts::parse_from(args(&["--bogus"])).unwrap_err();
    assert_eq!(error.to_string(), "unsupported argument: --bogus");

    let error = Opts::parse_from(args(&["--input"])).unwrap_err();
    assert_eq!(error.to_string(), "missing argument to `--input`");

    let error = Opts::parse_from(args(&["--input", "a", "--input", "b"])).unwrap_err();
    assert_eq!(error.to_string(), "duplicate `--input` arguments");
}

#[test]
fn test_run_text() {
    let file = example();

    let opts = Opts {
        input: file.path().to_owned(),
        ..Opts::default()
    };

    let (summary, out) = run_with(&opts);

    assert_eq!(
        summary.unwrap(),
        Summary {
            similarity: 13,
            distance: None,
            scoring: Scoring::Distinct,
        }
    );

    assert_eq!(
        out,
        "Left values: [3, 4, 2, 1, 3, 3]\nRight values: [4, 3, 5, 3, 9, 3]\nSimilarity score: 13\n"
    );
}

#[test]
fn test_run_distance_per_occurrence() {
    let file = example();

    let opts = Opts {
        input: file.path().to_owned(),
        distance: true,
        scoring: Scoring::PerOccurrence,
        ..Opts::default()
    };

    let (summary, out) = run_with(&opts);
    let summary = summary.unwrap();
    assert_eq!(summary.similarity, 31);
    assert_eq!(summary.distance, Some(11));
    assert!(out.ends_with("Total distance between lists: 11\nSimilarity score: 31\n"));
}

#[test]
fn test_run_json() {
    let file = example();

    let opts = Opts {
        input: file.path().to_owned(),
        json: true,
        ..Opts::default()
    };

    let (summary, out) = run_with(&opts);
    assert!(summary.is_ok());

    let lines = out
        .lines()
        .map(serde_json::from_str::<serde_json::Value>)
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    assert_eq!(
        lines,
        [
            serde_json::json!({
                "type": "lists",
                "data": {"left": [3, 4, 2, 1, 3, 3], "right": [4, 3, 5, 3, 9, 3]},
            }),
            serde_json::json!({
                "type": "summary",
                "data": {"similarity": 13, "distance": null, "scoring": "distinct"},
            }),
        ]
    );
}

#[test]
fn test_run_missing_file() {
    let dir = tempfile::tempdir().unwrap();

    let opts = Opts {
        input: dir.path().join("missing.txt"),
        ..Opts::default()
    };

    let (result, out) = run_with(&opts);
    let error = result.unwrap_err();
    assert!(matches!(
        error.downcast_ref::<LoadError>(),
        Some(LoadError::Access { .. })
    ));
    assert!(out.is_empty());
}
