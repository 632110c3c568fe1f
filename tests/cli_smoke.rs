use assert_cmd::Command;

fn base_cmd() -> Command {
    let mut cmd = Command::cargo_bin("trinorm").unwrap();
    cmd.args([
        "--swim",
        "1.9",
        "--swim-time",
        "33:00",
        "--bike",
        "90",
        "--bike-time",
        "2:33:00",
        "--run",
        "21.1",
        "--run-time",
        "1:28:00",
        "--tier",
        "70.3",
        "--units",
        "metric",
    ]);
    cmd
}

#[test]
fn report_shows_normalized_total() {
    let assert = base_cmd().assert().success();
    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(out.contains("Half Ironman (70.3)"), "missing tier: {out}");
    assert!(out.contains("4:38:00"), "missing total: {out}");
    assert!(out.contains("Timeline"), "missing timeline: {out}");
}

#[test]
fn json_output_is_parseable() {
    let assert = base_cmd().arg("--json").assert().success();
    let out = assert.get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["tier"], "70.3");
    assert_eq!(value["units"], "metric");
    assert_eq!(value["transition1_mins"], 2.0);
}

#[test]
fn zero_distance_fails_with_field_message() {
    let mut cmd = Command::cargo_bin("trinorm").unwrap();
    cmd.args([
        "--swim",
        "0",
        "--swim-time",
        "33:00",
        "--bike",
        "90",
        "--bike-time",
        "2:33:00",
        "--run",
        "21.1",
        "--run-time",
        "1:28:00",
        "--tier",
        "70.3",
        "--units",
        "metric",
    ]);
    let assert = cmd.assert().failure();
    let err = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(
        err.contains("swim-distance must be greater than zero"),
        "unexpected stderr: {err}"
    );
}

#[test]
fn malformed_duration_fails_with_field_message() {
    let mut cmd = Command::cargo_bin("trinorm").unwrap();
    cmd.args([
        "--swim",
        "1.9",
        "--swim-time",
        "soon",
        "--bike",
        "90",
        "--bike-time",
        "2:33:00",
        "--run",
        "21.1",
        "--run-time",
        "1:28:00",
        "--tier",
        "70.3",
        "--units",
        "metric",
    ]);
    let assert = cmd.assert().failure();
    let err = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(err.contains("swim-time"), "unexpected stderr: {err}");
}
