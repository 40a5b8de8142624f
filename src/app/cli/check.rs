//! Check command implementation.

use crate::app::report;
use crate::domain::AppError;

use super::LocationArgs;

pub(super) fn run_check(location: &LocationArgs) -> Result<i32, AppError> {
    let options = location.options()?;
    let report = crate::app::api::check_at(location.project_dir()?, &options)?;
    report::emit(&report, location.json);
    Ok(report.exit_code())
}
