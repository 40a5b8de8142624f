//! Session-scoped bookkeeping for location checks.
//!
//! A session starts `Pending`, moves to `Succeeded` the first time a pass
//! comes back clean, and only returns to `Pending` through an explicit reset.

use std::sync::{Mutex, MutexGuard};

use super::{CheckResult, PathCandidate, SpecialFolders, ViolationReason, rules};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Pending,
    Succeeded,
}

/// What a host should surface after one gated pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Success was already reported earlier in this session.
    Skipped,
    /// The location violates at least one rule.
    Violations(CheckResult),
    /// This pass moved the session to `Succeeded`; report it once.
    FirstSuccess,
}

#[derive(Debug, Default)]
struct SessionInner {
    state: SessionState,
    violations: Vec<ViolationReason>,
}

/// Owns the "success already reported" flag for one host session.
#[derive(Debug, Default)]
pub struct CheckSession {
    inner: Mutex<SessionInner>,
}

impl CheckSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.lock().state
    }

    /// Violations held from the most recent failing pass.
    pub fn violations(&self) -> Vec<ViolationReason> {
        self.lock().violations.clone()
    }

    /// False once a clean pass has been recorded.
    pub fn should_run(&self) -> bool {
        self.lock().state == SessionState::Pending
    }

    /// Evaluate the rules and record success when the result is empty.
    pub fn run_check(
        &self,
        path: &PathCandidate,
        special_folders: &SpecialFolders,
        max_length: usize,
    ) -> CheckResult {
        let mut inner = self.lock();
        let result = rules::evaluate(path, special_folders, max_length);
        Self::record(&mut inner, &result);
        result
    }

    /// `should_run` and `run_check` as one step under the session lock.
    ///
    /// Two overlapping callers can never both observe `Pending` and both
    /// report success.
    pub fn check_once(
        &self,
        path: &PathCandidate,
        special_folders: &SpecialFolders,
        max_length: usize,
    ) -> SessionOutcome {
        let mut inner = self.lock();
        if inner.state == SessionState::Succeeded {
            return SessionOutcome::Skipped;
        }

        let result = rules::evaluate(path, special_folders, max_length);
        let transitioned = Self::record(&mut inner, &result);
        if transitioned {
            SessionOutcome::FirstSuccess
        } else {
            SessionOutcome::Violations(result)
        }
    }

    /// Clear the success flag and held violations. Does not re-run the check.
    pub fn force_reset(&self) {
        let mut inner = self.lock();
        if inner.state == SessionState::Succeeded {
            tracing::debug!("session reset to pending");
        }
        inner.state = SessionState::Pending;
        inner.violations.clear();
    }

    /// Returns true when this result moved the session to `Succeeded`.
    fn record(inner: &mut SessionInner, result: &CheckResult) -> bool {
        if result.is_success() {
            inner.violations.clear();
            if inner.state == SessionState::Pending {
                inner.state = SessionState::Succeeded;
                tracing::debug!("session moved to succeeded");
                return true;
            }
            return false;
        }

        inner.violations = result.reasons().to_vec();
        tracing::debug!(violations = result.len(), "check pass found violations");
        false
    }

    // State is a plain value updated in one step, so a poisoned lock still
    // holds a consistent snapshot.
    fn lock(&self) -> MutexGuard<'_, SessionInner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
