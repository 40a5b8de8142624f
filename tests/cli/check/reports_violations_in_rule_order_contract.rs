use crate::harness::TestContext;
use predicates::prelude::*;
use serde_json::Value;

#[test]
fn check_reports_every_violation_in_rule_order() {
    let ctx = TestContext::new();
    let project = ctx.project("OneDrive/Cégep/game");

    let output = ctx
        .cli()
        .arg("check")
        .arg(&project)
        .args(["--json", "--max-length", "400"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let report: Value = serde_json::from_slice(&output.stdout).expect("valid JSON report");
    assert_eq!(report["ok"], false);
    let tags: Vec<&str> = report["violations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|violation| violation["tag"].as_str().unwrap())
        .collect();
    assert_eq!(tags, ["accented_characters", "cloud_folder"]);
    assert_eq!(report["violations"][1]["folder"], "onedrive");
}

#[test]
fn check_text_output_keeps_rule_order() {
    let ctx = TestContext::new();
    let project = ctx.project("Dropbox/Google/game");

    let assert =
        ctx.cli().arg("check").arg(&project).args(["--max-length", "400"]).assert().code(1);
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();

    let dropbox = stderr.find("synced by Dropbox").expect("Dropbox reported");
    let google = stderr.find("synced by Google Drive").expect("Google reported");
    assert!(dropbox < google);
    assert!(stderr.contains("Check failed: 2 problem(s)"));
}

#[test]
fn check_reports_long_path_with_measured_length() {
    let ctx = TestContext::new();

    let output = ctx.cli().args(["check", "--max-length", "5", "--json"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["max_path_length"], 5);
    assert_eq!(report["violations"][0]["tag"], "path_too_long");
    assert_eq!(report["violations"][0]["max"], 5);
    let path_len = report["path"].as_str().unwrap().chars().count() as u64;
    assert_eq!(report["violations"][0]["length"], path_len);
}

#[test]
fn check_json_success_is_ok() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["check", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"ok\":true"))
        .stdout(predicate::str::contains("\"success\""));
}
