use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn check_reports_project_on_desktop() {
    let ctx = TestContext::new();
    let desktop = ctx.home().to_str().expect("temp path is valid unicode").to_string();

    ctx.cli()
        .args(["check", "--desktop", &desktop])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("✅").not())
        .stderr(predicate::str::contains("[ERROR] Project is on the Desktop"))
        .stderr(predicate::str::contains("Check failed: 1 problem(s)"));
}

#[test]
fn check_ignores_desktop_that_is_not_a_prefix() {
    let ctx = TestContext::new();
    let project = ctx.project("game");
    let elsewhere = ctx.project("elsewhere");

    ctx.cli()
        .arg("check")
        .arg(&project)
        .arg("--desktop")
        .arg(&elsewhere)
        .assert()
        .success();
}
