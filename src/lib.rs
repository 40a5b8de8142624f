//! projloc: check that a project lives in a portable, tooling-friendly location.
//!
//! The rule engine lives in [`domain`]: [`evaluate`] classifies a path and
//! [`CheckSession`] keeps the once-per-session success bookkeeping. Everything
//! under [`app`] and [`adapters`] is host integration for the `projloc` CLI.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    CheckReport, HostContext, ViolationView, WatchEvent, WatchOptions, WatchSummary, check,
    check_at, create_context, watch_at,
};
pub use app::config::CheckOptions;
pub use domain::{
    AppError, CheckResult, CheckSession, CheckerConfig, CloudFolder, DEFAULT_MAX_PATH_LENGTH,
    Language, PathCandidate, SessionOutcome, SessionState, Simulation, SpecialFolders,
    ViolationReason, evaluate,
};
pub use ports::{Message, MessageCatalog, ProjectLocator, SpecialFolderProvider};
