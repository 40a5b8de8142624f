use projloc::{CheckOptions, Language, Simulation, ViolationReason, check_at};
use tempfile::TempDir;

fn english() -> CheckOptions {
    CheckOptions { language: Some(Language::En), ..CheckOptions::default() }
}

#[test]
fn check_at_reports_success_for_plain_directory() {
    let temp = TempDir::new().unwrap();

    let report = check_at(temp.path(), &english()).expect("check failed");
    assert!(report.ok);
    assert_eq!(report.exit_code(), 0);
    assert_eq!(report.success.expect("success message").title, "Project location looks good");
}

#[test]
fn check_at_applies_overrides() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("game");
    std::fs::create_dir_all(&project).unwrap();

    let options = CheckOptions {
        desktop: Some(temp.path().to_str().unwrap().to_string()),
        simulate: Simulation { accented: true, ..Simulation::default() },
        ..english()
    };
    let report = check_at(&project, &options).expect("check failed");
    assert_eq!(
        report.reasons(),
        vec![ViolationReason::AccentedCharacters, ViolationReason::OnDesktop]
    );
    assert_eq!(report.exit_code(), 1);
}

#[test]
fn check_at_reads_project_config() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("projloc.toml"), "max_path_length = 4\n").unwrap();

    let report = check_at(temp.path(), &english()).expect("check failed");
    assert!(matches!(report.reasons().as_slice(), [ViolationReason::PathTooLong { max: 4, .. }]));
}
