//! Watch command implementation.

use std::time::Duration;

use crate::app::api::{WatchEvent, WatchOptions};
use crate::app::report;
use crate::domain::AppError;

use super::LocationArgs;

pub(super) fn run_watch(
    location: &LocationArgs,
    interval: u64,
    max_checks: Option<usize>,
) -> Result<i32, AppError> {
    let options = location.options()?;
    let watch_options = WatchOptions { interval: Duration::from_secs(interval), max_checks };

    let summary =
        crate::app::api::watch_at(location.project_dir()?, &options, &watch_options, |event| {
            match event {
                WatchEvent::Violations(report) | WatchEvent::Success(report) => {
                    report::emit(report, location.json)
                }
                WatchEvent::Relocated { from, to } => {
                    if !location.json {
                        println!("↪ Project moved from {} to {}; checking again", from, to);
                    }
                }
            }
        })?;

    tracing::debug!(checks = summary.checks, successes = summary.successes, "watch finished");
    Ok(summary.exit_code())
}
