use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

/// Helper function to create a Command with --no-color and a fixed start
/// date so output is deterministic
fn tour_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tour").expect("Failed to find tour binary");
    cmd.args(["--no-color", "--start-date", "2025-03-01"]);
    cmd
}

#[test]
fn test_cli_add_day() {
    tour_cmd()
        .write_stdin("day\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added day 1 (3/1)"));
}

#[test]
fn test_cli_day_dates_follow_start_date() {
    tour_cmd()
        .write_stdin("day\nday\nday\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added day 2 (3/2)"))
        .stdout(predicate::str::contains("Added day 3 (3/3)"));
}

#[test]
fn test_cli_empty_plan() {
    tour_cmd()
        .write_stdin("plan\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No days planned yet."));
}

#[test]
fn test_cli_add_place_before_any_day_fails() {
    tour_cmd()
        .write_stdin("pick palace\nadd 09:00\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: No days in the itinerary yet",
        ));
}

#[test]
fn test_cli_add_place_without_pick_fails() {
    tour_cmd()
        .write_stdin("day\nadd 09:00\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: No place is selected on the map",
        ));
}

#[test]
fn test_cli_places_render_sorted_by_time() {
    let script = "day\n\
                  pick palace\nadd 14:00\n\
                  pick market\nadd 09:00\n\
                  pick tower\nadd 11:00\n\
                  show\nquit\n";

    let assert = tour_cmd().write_stdin(script).assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();

    let market = stdout.find("09:00 Gwangjang Market").expect("market shown");
    let tower = stdout.find("11:00 N Seoul Tower").expect("tower shown");
    let palace = stdout
        .find("14:00 Gyeongbokgung Palace")
        .expect("palace shown");
    assert!(market < tower && tower < palace);
}

#[test]
fn test_cli_edit_moves_place() {
    let script = "day\n\
                  pick palace\nadd 09:00\n\
                  edit 1 18:30\n\
                  show\nquit\n";

    tour_cmd()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated place 1"))
        .stdout(predicate::str::contains("18:30 Gyeongbokgung Palace (ID: 1)"));
}

#[test]
fn test_cli_remove_is_idempotent() {
    let script = "day\n\
                  pick palace\nadd 09:00\n\
                  rm 1\nrm 1\n\
                  quit\n";

    tour_cmd()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed place 1"))
        .stdout(predicate::str::contains(
            "Place 1 was not in the current day",
        ));
}

#[test]
fn test_cli_goto_out_of_range() {
    tour_cmd()
        .write_stdin("day\ngoto 5\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Day 5 is out of range"));
}

#[test]
fn test_cli_places_land_on_the_active_day() {
    let script = "day\nday\n\
                  pick forest\nadd 10:00\n\
                  goto 1\n\
                  pick market\nadd 09:00\n\
                  plan\nquit\n";

    let assert = tour_cmd().write_stdin(script).assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();

    let day1 = stdout.find("## Day 1").expect("day 1 header");
    let day2 = stdout.rfind("## Day 2").expect("day 2 header");
    let market = stdout.rfind("Gwangjang Market").expect("market shown");
    let forest = stdout.rfind("Seoul Forest").expect("forest shown");
    assert!(day1 < market && market < day2 && day2 < forest);
}

#[test]
fn test_cli_custom_gazetteer_file() {
    let mut file = NamedTempFile::new().expect("temp gazetteer");
    write!(
        file,
        r#"[{{"name": "Trevi Fountain", "address": "Piazza di Trevi, Rome", "latitude": 41.9009, "longitude": 12.4833}}]"#
    )
    .expect("write gazetteer");

    tour_cmd()
        .args(["--gazetteer", file.path().to_str().expect("utf-8 path")])
        .write_stdin("day\npick trevi\nadd 09:00\nshow\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Trevi Fountain"));
}

#[test]
fn test_cli_rejects_bad_start_date() {
    Command::cargo_bin("tour")
        .expect("Failed to find tour binary")
        .args(["--no-color", "--start-date", "not-a-date"])
        .write_stdin("quit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid start date"));
}

#[test]
fn test_cli_spots_lists_builtin_catalog() {
    tour_cmd()
        .write_stdin("spots\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Places to pick"))
        .stdout(predicate::str::contains("Gyeongbokgung Palace"))
        .stdout(predicate::str::contains("Seoul Forest"));
}

#[test]
fn test_cli_unknown_command() {
    tour_cmd()
        .write_stdin("frobnicate\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command: frobnicate"));
}
