use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn check_rejects_missing_project_directory() {
    let ctx = TestContext::new();
    let missing = ctx.work_dir().join("missing");

    ctx.cli()
        .arg("check")
        .arg(&missing)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Project path unavailable"));
}
