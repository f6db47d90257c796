use assert_cmd::Command;
use predicates::str::contains;
use tempfile::tempdir;

fn script_command(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("budget_report_cli").unwrap();
    cmd.env("BUDGET_REPORT_CLI_SCRIPT", "1")
        .env("BUDGET_REPORT_HOME", home);
    cmd
}

#[test]
fn script_mode_runs_basic_flow() {
    let home = tempdir().unwrap();
    let input = "add 2567 A 1000 400 100\nsummary\nlist\nexit\n";

    script_command(home.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Added entry for `A`"))
        .stdout(contains("Total budget"))
        .stdout(contains("1,000"))
        .stdout(contains("40.00%"));

    let json = std::fs::read_to_string(home.path().join("budget_data.json")).unwrap();
    assert!(json.contains("\"projectName\": \"A\""));
}

#[test]
fn entries_persist_across_runs() {
    let home = tempdir().unwrap();

    script_command(home.path())
        .write_stdin("add 2567 A 1000 400 100\nexit\n")
        .assert()
        .success();

    script_command(home.path())
        .write_stdin("summary\nexit\n")
        .assert()
        .success()
        .stdout(contains("1,000"))
        .stdout(contains("1 entries in view."));
}

#[test]
fn filters_narrow_summary_and_chart() {
    let home = tempdir().unwrap();
    let input = "add 2567 A 1000 400 100\nadd 2568 B 200 50 0\nyear 2568\nsummary\nchart\nexit\n";

    script_command(home.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Year filter set to `2568`"))
        .stdout(contains("1 entries in view."))
        .stdout(contains("Budget vs spent"));
}

#[test]
fn malformed_snapshot_recovers_to_an_empty_shell() {
    let home = tempdir().unwrap();
    std::fs::write(home.path().join("budget_data.json"), "{ not json").unwrap();

    script_command(home.path())
        .write_stdin("summary\nexit\n")
        .assert()
        .success()
        .stdout(contains("0 entries in view."));
}

#[test]
fn unknown_command_keeps_the_shell_alive() {
    let home = tempdir().unwrap();

    script_command(home.path())
        .write_stdin("sumary\nsummary\nexit\n")
        .assert()
        .success()
        .stdout(contains("Did you mean `summary`?"))
        .stdout(contains("Total budget"));
}

#[test]
fn non_numeric_amounts_are_coerced_not_rejected() {
    let home = tempdir().unwrap();

    script_command(home.path())
        .write_stdin("add 2568 B abc 50 0\nlist\nexit\n")
        .assert()
        .success()
        .stdout(contains("Added entry for `B`"))
        .stdout(contains("N/A"))
        .stdout(contains("-50"));
}
