use assert_cmd::Command;

#[test]
fn test_interactive_mode_help() {
    // Interactive mode needs a terminal, so only check the command is wired up
    let mut cmd = Command::cargo_bin("geotutor").unwrap();
    cmd.arg("interactive").arg("--help");

    let output = cmd.assert().success();
    output.stdout(predicates::str::contains("--trace"));
}

#[test]
fn test_top_level_help_lists_commands() {
    let mut cmd = Command::cargo_bin("geotutor").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("calc"))
        .stdout(predicates::str::contains("interactive"))
        .stdout(predicates::str::contains("shapes"));
}
