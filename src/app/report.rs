//! Turning session outcomes into user-facing reports.

use std::io::Write;

use serde::Serialize;

use crate::domain::{AppError, PathCandidate, SessionOutcome, ViolationReason};
use crate::ports::{Message, MessageCatalog};

/// Schema version of the JSON report.
pub const REPORT_SCHEMA_VERSION: u32 = 1;

/// One violated rule with its rendered text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViolationView {
    pub tag: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<usize>,
    /// Absent when the catalog could not render this reason.
    #[serde(flatten)]
    pub message: Option<Message>,
    #[serde(skip)]
    pub reason: ViolationReason,
}

impl ViolationView {
    fn new(reason: ViolationReason, message: Option<Message>) -> Self {
        let (folder, length, max) = match reason {
            ViolationReason::PathTooLong { length, max } => (None, Some(length), Some(max)),
            ViolationReason::CloudFolder(folder) => (Some(folder.id()), None, None),
            _ => (None, None, None),
        };
        Self { tag: reason.tag(), folder, length, max, message, reason }
    }
}

/// Report for one gated check pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub schema_version: u32,
    pub path: PathCandidate,
    pub max_path_length: usize,
    pub ok: bool,
    /// True when the session had already reported success and nothing ran.
    pub skipped: bool,
    /// True when this pass moved the session to `Succeeded`.
    pub first_success: bool,
    pub violations: Vec<ViolationView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<Message>,
}

impl CheckReport {
    /// Render `outcome` with `catalog`. A message the catalog cannot render
    /// is logged and left out; the outcome itself is always reported.
    pub fn build(
        path: PathCandidate,
        max_path_length: usize,
        outcome: SessionOutcome,
        catalog: &impl MessageCatalog,
    ) -> Self {
        let mut report = Self {
            schema_version: REPORT_SCHEMA_VERSION,
            path,
            max_path_length,
            ok: true,
            skipped: false,
            first_success: false,
            violations: Vec::new(),
            success: None,
        };

        match outcome {
            SessionOutcome::Skipped => report.skipped = true,
            SessionOutcome::FirstSuccess => {
                report.first_success = true;
                report.success = rendered(catalog.success());
            }
            SessionOutcome::Violations(result) => {
                report.ok = false;
                for reason in result {
                    let message = rendered(catalog.violation(&reason));
                    report.violations.push(ViolationView::new(reason, message));
                }
            }
        }
        report
    }

    pub fn exit_code(&self) -> i32 {
        if self.ok { 0 } else { 1 }
    }

    pub fn reasons(&self) -> Vec<ViolationReason> {
        self.violations.iter().map(|view| view.reason).collect()
    }
}

fn rendered(message: Result<Message, AppError>) -> Option<Message> {
    message
        .inspect_err(|err| tracing::warn!(error = %err, "failed to render check message"))
        .ok()
}

/// Write the human-readable form. Successes go to `out`, violations to `err`.
pub fn write_text(
    report: &CheckReport,
    out: &mut impl Write,
    err: &mut impl Write,
) -> std::io::Result<()> {
    if report.first_success {
        match &report.success {
            Some(success) => {
                writeln!(out, "✅ {}", success.title)?;
                writeln!(out, "   {}", success.explanation)?;
            }
            None => writeln!(out, "✅ {}", report.path)?,
        }
        return Ok(());
    }

    if report.ok {
        return Ok(());
    }

    for view in &report.violations {
        let Some(message) = &view.message else {
            writeln!(err, "[ERROR] {}", view.tag)?;
            continue;
        };
        writeln!(err, "[ERROR] {}", message.title)?;
        writeln!(err, "  {}", message.explanation)?;
        for line in message.remediation.lines() {
            writeln!(err, "    {}", line)?;
        }
    }
    writeln!(
        err,
        "Check failed: {} problem(s) with project location {}",
        report.violations.len(),
        report.path
    )?;
    Ok(())
}

/// Write the report as a single JSON line.
pub fn write_json(report: &CheckReport, out: &mut impl Write) -> Result<(), AppError> {
    serde_json::to_writer(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

/// Print to the process streams. Display failures are logged, never raised:
/// the session has already recorded its outcome.
pub fn emit(report: &CheckReport, json: bool) {
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let result = if json {
        write_json(report, &mut stdout.lock())
    } else {
        write_text(report, &mut stdout.lock(), &mut stderr.lock()).map_err(AppError::from)
    };
    if let Err(err) = result {
        tracing::warn!(error = %err, "failed to display check report");
    }
}
