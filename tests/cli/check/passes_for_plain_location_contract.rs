use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn check_passes_for_plain_location() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Project location looks good"))
        .stderr(predicate::str::contains("[ERROR]").not());
}

#[test]
fn check_accepts_explicit_project_path() {
    let ctx = TestContext::new();
    let project = ctx.project("game");

    ctx.cli_in(ctx.home())
        .arg("check")
        .arg(&project)
        .assert()
        .success()
        .stdout(predicate::str::contains("✅"));
}
