use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn simulate_cloud_reports_provider() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["check", "--simulate-cloud", "icloud"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Project is in a folder synced by iCloud"));
}

#[test]
fn simulate_desktop_and_long_path_stack() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["check", "--simulate-desktop", "--simulate-long-path"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Project path is too long"))
        .stderr(predicate::str::contains("Project is on the Desktop"))
        .stderr(predicate::str::contains("Check failed: 2 problem(s)"));
}

#[test]
fn simulate_rejects_unknown_provider() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["check", "--simulate-cloud", "box"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid cloud folder 'box'"));
}
