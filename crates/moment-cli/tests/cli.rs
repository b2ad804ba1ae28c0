use assert_cmd::Command;
use predicates::prelude::*;

fn moment() -> Command {
    Command::cargo_bin("moment").unwrap()
}

fn json_output(args: &[&str]) -> serde_json::Value {
    let output = moment().args(args).output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_fields_prints_breakdown() {
    let json = json_output(&[
        "fields", "--year", "2012", "--month", "12", "--day", "24", "--hour", "15", "--offset",
        "60",
    ]);
    assert_eq!(json["iso"], "2012-12-24T15:00:00+01:00");
    assert_eq!(json["epoch_seconds"], 1_356_357_600_i64);
    assert_eq!(json["weekday"], "Monday");
    assert_eq!(json["day_of_year"], 359);
}

#[test]
fn test_fields_invalid_day_fails() {
    moment()
        .args(["fields", "--year", "2021", "--month", "2", "--day", "29"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid component"))
        .stderr(predicate::str::contains("day_of_month"));
}

#[test]
fn test_epoch_with_negative_offset() {
    let json = json_output(&["epoch", "1356363045", "--offset", "-300"]);
    assert_eq!(json["iso"], "2012-12-24T10:30:45-05:00");
    assert_eq!(json["offset"], -300);
}

#[test]
fn test_epoch_negative_seconds() {
    let json = json_output(&["epoch", "-1"]);
    assert_eq!(json["iso"], "1969-12-31T23:59:59Z");
}

#[test]
fn test_shift_months_clamps() {
    // 2012-01-31T00:00:00Z
    let json = json_output(&["shift", "--epoch", "1327968000", "--unit", "months", "--amount", "1"]);
    assert_eq!(json["iso"], "2012-02-29T00:00:00Z");
}

#[test]
fn test_shift_negative_amount_subtracts() {
    let json = json_output(&["shift", "--epoch", "0", "--unit", "ms", "--amount", "-1"]);
    assert_eq!(json["iso"], "1969-12-31T23:59:59.999Z");
}

#[test]
fn test_shift_overflow_reports_error() {
    moment()
        .args(["shift", "--epoch", "0", "--unit", "years", "--amount", "10001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Overflow"));
}

#[test]
fn test_shift_unknown_unit_is_usage_error() {
    moment()
        .args(["shift", "--epoch", "0", "--unit", "fortnights", "--amount", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("fortnights"));
}

#[test]
fn test_now_utc() {
    let json = json_output(&["now", "--utc"]);
    assert_eq!(json["offset"], 0);
    assert!(json["iso"].as_str().unwrap().ends_with('Z'));
}

#[test]
fn test_holidays_1997() {
    moment()
        .args(["holidays", "1997"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1997-01-01\tNew Year's Day\n"))
        .stdout(predicate::str::contains("1997-01-20\tBirthday of Martin Luther King, Jr.\n"))
        .stdout(predicate::str::contains("1997-11-27\tThanksgiving Day\n"))
        .stdout(predicate::str::contains("Inauguration").not());
}

#[test]
fn test_holidays_out_of_range_year() {
    moment()
        .args(["holidays", "10000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Out of range"));
}
