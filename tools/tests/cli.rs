use assert_cmd::Command;
use predicates::prelude::*;
use std::{fs, path::PathBuf};
use tempfile::TempDir;

const CHART: &str = "osu file format v14\r\n\
    \r\n\
    [Metadata]\r\n\
    Title:Test\r\n\
    Version:Normal\r\n\
    \r\n\
    [Difficulty]\r\n\
    CircleSize:4\r\n\
    \r\n\
    [HitObjects]\r\n\
    100,192,1000,1,0,0:0:0:0:\r\n\
    192,192,1250,1,0,0:0:0:0:\r\n\
    320,192,1500,128,0,2000:0:0:0:0:\r\n\
    448,192,1750,1,0,0:0:0:0:\r\n";

fn setup(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    (dir, path)
}

fn tools() -> Command {
    Command::cargo_bin("mania-tools").unwrap()
}

#[test]
fn apply_writes_rearranged_chart() {
    let (dir, path) = setup("chart.osu", CHART);

    tools()
        .arg("apply")
        .arg(&path)
        .arg("21/43")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote chart [2143].osu"));

    let written = fs::read_to_string(dir.path().join("chart [2143].osu")).unwrap();
    assert_eq!(
        written,
        CHART
            .replace("Version:Normal", "Version:Normal [2143]")
            .replace("100,192,1000", "192,192,1000")
            .replace("192,192,1250", "64,192,1250")
            .replace("320,192,1500", "448,192,1500")
            .replace("448,192,1750", "320,192,1750")
    );

    // The original is untouched
    assert_eq!(fs::read_to_string(&path).unwrap(), CHART);
}

#[test]
fn apply_rejects_invalid_order() {
    let (dir, path) = setup("chart.osu", CHART);

    tools()
        .args(["apply", path.to_str().unwrap(), "1124"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("try e.g. 2134"))
        .stderr(predicate::str::contains("valid permutation of digits 1-4"));

    tools()
        .args(["apply", path.to_str().unwrap(), "new"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exactly 4 digits"));

    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn apply_rejects_unsupported_column_count() {
    let (dir, path) = setup("chart.osu", &CHART.replace("CircleSize:4", "CircleSize:1"));

    tools()
        .args(["apply", path.to_str().unwrap(), "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported column count 1K"));

    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn apply_with_custom_range() {
    let (dir, path) = setup("chart.osu", &CHART.replace("CircleSize:4", "CircleSize:2"));

    tools()
        .args(["apply", path.to_str().unwrap(), "21", "--min-columns", "2"])
        .assert()
        .success();

    let written = fs::read_to_string(dir.path().join("chart [21].osu")).unwrap();
    assert!(written.contains("\r\n384,192,1000,1,0,0:0:0:0:\r\n"));

    tools()
        .args(["apply", path.to_str().unwrap(), "21", "--min-columns", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --min-columns/--max-columns"));
}

#[test]
fn apply_rejects_bad_paths() {
    let (_dir, path) = setup("chart.txt", CHART);

    tools()
        .args(["apply", path.to_str().unwrap(), "2143"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File must have .osu extension"));

    tools()
        .args(["apply", "does-not-exist.osu", "2143"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn inspect_shows_chart_details() {
    let (_dir, path) = setup("chart.osu", CHART);

    tools()
        .arg("inspect")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("chart.osu"))
        .stdout(predicate::str::contains("Columns     4K"))
        .stdout(predicate::str::contains("Difficulty  Normal"))
        .stdout(predicate::str::contains("Notes       4"))
        .stdout(predicate::str::contains("Example     2134"));
}

#[test]
fn edit_session() {
    let (dir, path) = setup("chart.osu", CHART);
    let input = format!("\n{}\n12\nnew\n{}\n4321\nexit\n", path.display(), path.display());

    tools()
        .arg("edit")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Column Editor for osu!mania ==="))
        .stdout(predicate::str::contains("Path cannot be empty."))
        .stdout(predicate::str::contains("Detected column count: 4K"))
        .stdout(predicate::str::contains("Order must have exactly 4 digits."))
        .stdout(predicate::str::contains("Example: 2134"))
        .stdout(predicate::str::contains("Successfully created: chart [4321].osu"))
        .stdout(predicate::str::contains("Thank you for using Column Editor!"));

    // Only the order applied after picking the chart again was written
    let mut files: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    files.sort();
    assert_eq!(files, ["chart [4321].osu", "chart.osu"]);
}

#[test]
fn edit_opens_path_argument() {
    let (dir, path) = setup("chart.osu", CHART);

    tools()
        .arg("edit")
        .arg(&path)
        .write_stdin("2143\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("File found: chart.osu"))
        .stdout(predicate::str::contains("Successfully created: chart [2143].osu"))
        .stdout(predicate::str::contains("Thank you for using Column Editor!"));

    assert!(dir.path().join("chart [2143].osu").exists());
}

#[test]
fn edit_recovers_from_invalid_utf8() {
    let (dir, path) = setup("chart.osu", CHART);

    let mut input = b"caf\xe9.osu\n".to_vec();
    input.extend_from_slice(format!("{}\n2143\nexit\n", path.display()).as_bytes());

    tools()
        .arg("edit")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("File not found."))
        .stdout(predicate::str::contains("Successfully created: chart [2143].osu"))
        .stdout(predicate::str::contains("Thank you for using Column Editor!"));

    assert!(dir.path().join("chart [2143].osu").exists());
}

#[test]
fn edit_ends_on_end_of_input() {
    tools()
        .arg("edit")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("File path: "));
}

#[test]
fn invalid_log_filter() {
    tools()
        .args(["inspect", "chart.osu", "--log", "mania=notalevel"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid log filter"));
}
