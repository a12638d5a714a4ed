//! End-to-end tests running the polygon-wheel binary

use std::fs;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

const SAMPLE: &str = "\
# triangle A-B-C joined to the pentagon C-D-E-F-G
A B 1
B C 2
C A 3
C D 1
D E 1
E F 1
F G 1
G C 1
";

fn polygon_wheel() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("polygon-wheel"));
    cmd.env_remove("RUST_LOG").env_remove("CLICOLOR_FORCE");
    cmd
}

fn sample_dir() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("Sample.txt"), SAMPLE).unwrap();
    fs::write(temp_dir.path().join("Tree.txt"), "A B 1\nB C 1\n").unwrap();
    temp_dir
}

#[test]
fn test_inspect_human_report() {
    let temp_dir = sample_dir();

    polygon_wheel()
        .arg("inspect")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Triangles: 1")
                .and(predicate::str::contains("Pentagons: 1"))
                .and(predicate::str::contains("Cycle 1: 3 edges, length: 6, ABC"))
                .and(predicate::str::contains("Cycle 2: 5 edges, length: 5, CDEFG"))
                .and(predicate::str::contains("Shapes found: 2"))
                .and(predicate::str::contains("No cycles in this graph"))
                .and(predicate::str::contains("1 of 2 graphs contain polygons.")),
        );
}

#[test]
fn test_inspect_error_on_cycles_sets_exit_code() {
    let temp_dir = sample_dir();

    polygon_wheel()
        .arg("inspect")
        .arg(temp_dir.path())
        .arg("--error-on-cycles")
        .assert()
        .code(1);

    polygon_wheel()
        .arg("inspect")
        .arg(temp_dir.path().join("Tree.txt"))
        .arg("--error-on-cycles")
        .assert()
        .success();
}

#[test]
fn test_inspect_json_report() {
    let temp_dir = sample_dir();

    let assert = polygon_wheel()
        .arg("inspect")
        .arg(temp_dir.path())
        .args(["--format", "json"])
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(json["graph_count"], 2);
    assert_eq!(json["graphs"][0]["census"]["pentagons"], 1);
    assert_eq!(json["graphs"][1]["has_cycle"], false);
}

#[test]
fn test_spotlight_keeps_cycles_through_vertex() {
    let temp_dir = sample_dir();

    polygon_wheel()
        .args(["spotlight", "E"])
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("CDEFG")
                .and(predicate::str::contains("length: 6, ABC").not())
                .and(predicate::str::contains("Triangles: 0")),
        );
}

#[test]
fn test_spotlight_rejects_invalid_vertex() {
    polygon_wheel()
        .args(["spotlight", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid vertex label '7'"));
}

#[test]
fn test_spectacle_writes_dot_file() {
    let temp_dir = sample_dir();
    let out_file = temp_dir.path().join("graph.dot");

    polygon_wheel()
        .arg("spectacle")
        .arg(temp_dir.path().join("Sample.txt"))
        .args(["--format", "dot", "--output"])
        .arg(&out_file)
        .assert()
        .success();

    let dot = fs::read_to_string(&out_file).unwrap();
    assert!(dot.starts_with("// "));
    assert!(predicate::str::contains("graph polygons {").eval(&dot));
    assert!(predicate::str::contains(r#""F" -- "G" [label="1""#).eval(&dot));
}

#[test]
fn test_malformed_file_is_reported_and_skipped() {
    let temp_dir = sample_dir();
    fs::write(temp_dir.path().join("Broken.txt"), "A B\n").unwrap();

    polygon_wheel()
        .arg("inspect")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Broken.txt"))
        .stdout(predicate::str::contains("1 of 2 graphs contain polygons."));
}

#[test]
fn test_strict_mode_self_loop_fails_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("Loop.txt"), "A B 1\nB C 1\nC A 1\nC C 2\n").unwrap();

    polygon_wheel()
        .arg("inspect")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Loop.txt"));

    polygon_wheel()
        .arg("inspect")
        .arg(temp_dir.path())
        .arg("--skip-invalid-edges")
        .assert()
        .success()
        .stdout(predicate::str::contains("Triangles: 1"));
}
