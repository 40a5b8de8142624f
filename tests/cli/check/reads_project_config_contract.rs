use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn check_reads_projloc_toml_from_project() {
    let ctx = TestContext::new();
    ctx.write_config("max_path_length = 3\n");

    ctx.cli()
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("the limit is 3"));
}

#[test]
fn cli_flag_overrides_config() {
    let ctx = TestContext::new();
    ctx.write_config("max_path_length = 3\n");

    ctx.cli().args(["check", "--max-length", "400"]).assert().success();
}

#[test]
fn explicit_config_path_is_used() {
    let ctx = TestContext::new();
    let config = ctx.home().join("custom.toml");
    std::fs::write(&config, "[simulate]\ndocuments = true\n").unwrap();

    ctx.cli()
        .arg("check")
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Project is inside the Documents folder"));
}

#[test]
fn malformed_config_is_an_error() {
    let ctx = TestContext::new();
    ctx.write_config("max_path_length = \"long\"\n");

    ctx.cli()
        .arg("check")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error: TOML parse error"));
}

#[test]
fn zero_max_length_is_rejected() {
    let ctx = TestContext::new();
    ctx.write_config("max_path_length = 0\n");

    ctx.cli()
        .arg("check")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid max path length 0"));
}
