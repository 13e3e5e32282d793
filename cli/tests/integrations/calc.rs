use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_cli_calc_square() {
    let mut cmd = Command::cargo_bin("geotutor").unwrap();
    cmd.arg("calc").arg("square").arg("side=5");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Shape: Square"))
        .stdout(predicate::str::contains("= 25.00"))
        .stdout(predicate::str::contains("= 20.00"))
        .stdout(predicate::str::contains("Great job!"));
}

#[test]
fn test_cli_calc_rectangle_hint() {
    let mut cmd = Command::cargo_bin("geotutor").unwrap();
    cmd.arg("calc")
        .arg("Rectangle")
        .arg("length=4")
        .arg("width=4");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("= 16.00"))
        .stdout(predicate::str::contains("actually a square"));
}

#[test]
fn test_cli_calc_invalid_triangle() {
    let mut cmd = Command::cargo_bin("geotutor").unwrap();
    cmd.arg("calc").arg("triangle").args([
        "base=3", "height=4", "side1=1", "side2=1", "side3=5",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("= 6.00"))
        .stdout(predicate::str::contains("= 7.00"))
        .stdout(predicate::str::contains("Invalid triangle!"));
}

#[test]
fn test_cli_calc_circle_classroom_pi() {
    let mut cmd = Command::cargo_bin("geotutor").unwrap();
    cmd.arg("calc")
        .arg("circle")
        .arg("radius=60")
        .arg("--classroom-pi");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("= 11304.00"))
        .stdout(predicate::str::contains("= 376.80"))
        .stdout(predicate::str::contains("diameter"));
}

#[test]
fn test_cli_calc_negative_value() {
    let mut cmd = Command::cargo_bin("geotutor").unwrap();
    cmd.arg("calc").arg("square").arg("side=-2");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Side length must be greater than zero.",
        ));
}

#[test]
fn test_cli_calc_json() {
    let mut cmd = Command::cargo_bin("geotutor").unwrap();
    cmd.arg("calc").arg("square").arg("side=5").arg("--json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["shape"], "square");
    assert_eq!(json["area"], 25.0);
    assert_eq!(json["perimeter"], 20.0);
}

#[test]
fn test_cli_calc_trace() {
    let mut cmd = Command::cargo_bin("geotutor").unwrap();
    cmd.arg("calc").arg("circle").arg("radius=60").arg("--trace");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Hint rules checked:"))
        .stdout(predicate::str::contains("diameter_confusion"));
}

#[test]
fn test_cli_calc_missing_shape() {
    let mut cmd = Command::cargo_bin("geotutor").unwrap();
    cmd.arg("calc");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Please select a shape!"));
}

#[test]
fn test_cli_calc_unknown_shape() {
    let mut cmd = Command::cargo_bin("geotutor").unwrap();
    cmd.arg("calc").arg("hexagon").arg("side=5");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shape 'hexagon'"));
}

#[test]
fn test_cli_calc_missing_field() {
    let mut cmd = Command::cargo_bin("geotutor").unwrap();
    cmd.arg("calc").arg("rectangle").arg("length=4");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a value for Width!"));
}

#[test]
fn test_cli_calc_invalid_number() {
    let mut cmd = Command::cargo_bin("geotutor").unwrap();
    cmd.arg("calc").arg("circle").arg("radius=abc");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid number for Radius"));
}

#[test]
fn test_cli_calc_with_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("tutor.json");

    fs::write(
        &config_file,
        r#"{ "pi": "classroom", "decimals": 1, "hints": { "max_square_side": 10 } }"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("geotutor").unwrap();
    cmd.arg("calc")
        .arg("square")
        .arg("side=12")
        .arg("--config")
        .arg(&config_file);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("= 144.0"))
        .stdout(predicate::str::contains("very large square"));
}

#[test]
fn test_cli_calc_with_invalid_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("tutor.json");
    fs::write(&config_file, "not json").unwrap();

    let mut cmd = Command::cargo_bin("geotutor").unwrap();
    cmd.arg("calc")
        .arg("square")
        .arg("side=5")
        .arg("--config")
        .arg(&config_file);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn test_cli_calc_invalid_number_after_non_ascii_argument() {
    let mut cmd = Command::cargo_bin("geotutor").unwrap();
    cmd.arg("calc")
        .arg("rectangle")
        .arg("length=４")
        .arg("width=abc");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid number for"))
        .stderr(predicate::str::contains("not a number"));
}
