//! Watch command implementation.
//!
//! Re-checks the project location on an interval within one session. Once
//! the location passes, further ticks are skipped until the resolved project
//! path changes, which resets the session.

use std::time::Duration;

use crate::app::AppContext;
use crate::app::report::CheckReport;
use crate::domain::{AppError, PathCandidate, SessionState, ViolationReason};
use crate::ports::{MessageCatalog, ProjectLocator, SpecialFolderProvider};

/// Options for the watch command.
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Delay between two checks.
    pub interval: Duration,
    /// Stop after this many ticks; run until interrupted when absent.
    pub max_checks: Option<usize>,
}

/// Something the host should surface while watching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchEvent {
    /// The violation set changed since the last report.
    Violations(CheckReport),
    /// The session moved to `Succeeded` on this tick.
    Success(CheckReport),
    /// The resolved project path changed; the session was reset.
    Relocated { from: PathCandidate, to: PathCandidate },
}

/// Summary of a finished watch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchSummary {
    pub checks: usize,
    pub successes: usize,
    pub state: SessionState,
}

impl WatchSummary {
    pub fn exit_code(&self) -> i32 {
        if self.state == SessionState::Succeeded { 0 } else { 1 }
    }
}

/// Run the watch loop. `on_event` receives everything worth showing and
/// `sleep` is called between ticks.
pub fn execute<E, M>(
    ctx: &AppContext<E, M>,
    options: &WatchOptions,
    mut on_event: impl FnMut(&WatchEvent),
    mut sleep: impl FnMut(Duration),
) -> Result<WatchSummary, AppError>
where
    E: ProjectLocator + SpecialFolderProvider,
    M: MessageCatalog,
{
    let mut checks = 0;
    let mut successes = 0;
    let mut last_path: Option<PathCandidate> = None;
    let mut last_reported: Option<Vec<ViolationReason>> = None;

    while options.max_checks.is_none_or(|max| checks < max) {
        if checks > 0 {
            sleep(options.interval);
        }
        checks += 1;

        let path = match ctx.environment().project_path() {
            Ok(path) => path,
            Err(err) => {
                tracing::warn!(error = %err, "project location unavailable; retrying");
                continue;
            }
        };

        if let Some(previous) = last_path.take()
            && previous != path
        {
            tracing::info!(from = %previous, to = %path, "project location changed");
            ctx.session().force_reset();
            last_reported = None;
            on_event(&WatchEvent::Relocated { from: previous, to: path.clone() });
        }
        last_path = Some(path.clone());

        if !ctx.session().should_run() {
            continue;
        }

        let folders = ctx.environment().special_folders();
        let outcome = ctx.session().check_once(&path, &folders, ctx.max_path_length());
        let report = CheckReport::build(path, ctx.max_path_length(), outcome, ctx.catalog());

        if report.first_success {
            successes += 1;
            tracing::info!(path = %report.path, "project location passed");
            on_event(&WatchEvent::Success(report));
        } else if !report.ok {
            let reasons = report.reasons();
            if last_reported.as_ref() != Some(&reasons) {
                last_reported = Some(reasons);
                on_event(&WatchEvent::Violations(report));
            }
        }
    }

    Ok(WatchSummary { checks, successes, state: ctx.session().state() })
}
