use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn check_speaks_french_on_request() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["check", "--lang", "fr", "--simulate-accented"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Le chemin du projet contient des caractères accentués",
        ));
}

#[test]
fn check_follows_french_locale() {
    let ctx = TestContext::new();

    ctx.cli()
        .env("LANG", "fr_CA.UTF-8")
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("L'emplacement du projet est correct"));
}

#[test]
fn check_rejects_unknown_language() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["check", "--lang", "de"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid language 'de'"));
}
