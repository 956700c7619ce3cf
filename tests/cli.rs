use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn write_dataset(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("data.json");
    let value = json!({
        "groupMapping": {
            "NO_GROUP": [
                {"categoryId": "q-01-North", "dataRowId": "r1"},
                {"categoryId": "q-02-South", "dataRowId": "r2"},
                {"categoryId": "q-03-East",  "dataRowId": "r3"}
            ],
            "TOTAL_GROUP": [
                {"categoryId": "t-All", "dataRowId": "r1"}
            ]
        },
        "dataRowMapping": {
            "r1": {"AC": 9_000_000.0},
            "r2": {"AC": 16_000_000.0},
            "r3": {"AC": 25_000_000.0}
        }
    });
    fs::write(&path, value.to_string()).unwrap();
    path
}

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("spc-chart").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("spc-chart"));
}

#[test]
fn groups_lists_keys() {
    let dir = tempdir().unwrap();
    let input = write_dataset(dir.path());

    let mut cmd = Command::cargo_bin("spc-chart").unwrap();
    cmd.args(["groups", "--input"]).arg(&input);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("NO_GROUP").and(predicate::str::contains("TOTAL_GROUP")));
}

#[test]
fn render_writes_png_and_csv() {
    let dir = tempdir().unwrap();
    let input = write_dataset(dir.path());
    let out = dir.path().join("chart.png");
    let csv = dir.path().join("series.csv");

    let mut cmd = Command::cargo_bin("spc-chart").unwrap();
    cmd.args(["render", "--chart-type", "i", "--group", "NO_GROUP"])
        .arg("--input")
        .arg(&input)
        .arg("--out")
        .arg(&out)
        .arg("--csv")
        .arg(&csv);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Wrote chart to"));

    assert!(fs::metadata(&out).unwrap().len() > 0);
    let text = fs::read_to_string(&csv).unwrap();
    assert!(text.starts_with("label,value,cl,ucl,lcl,out_of_control"));
    assert_eq!(text.lines().count(), 4);
}

#[test]
fn render_fails_for_absent_group() {
    let dir = tempdir().unwrap();
    let input = write_dataset(dir.path());
    let out = dir.path().join("chart.png");

    let mut cmd = Command::cargo_bin("spc-chart").unwrap();
    cmd.args(["render", "--group", "NOT_A_GROUP"])
        .arg("--input")
        .arg(&input)
        .arg("--out")
        .arg(&out);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not present"));
    assert!(!out.exists());
}
