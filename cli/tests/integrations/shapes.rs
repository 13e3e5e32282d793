use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_shapes_lists_all_four() {
    let mut cmd = Command::cargo_bin("geotutor").unwrap();
    cmd.arg("shapes");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Square"))
        .stdout(predicate::str::contains("Rectangle"))
        .stdout(predicate::str::contains("Triangle"))
        .stdout(predicate::str::contains("Circle"))
        .stdout(predicate::str::contains("radius"));
}
