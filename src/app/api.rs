//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{MAIN_SEPARATOR_STR, PathBuf};

use crate::adapters::special_folders::home_dir;
use crate::adapters::{
    EmbeddedMessageCatalog, FilesystemProjectLocator, FixedSpecialFolders, OsSpecialFolders,
    SimulatedEnvironment,
};
use crate::app::config::{CheckOptions, resolve_settings};
use crate::app::AppContext;
use crate::app::commands;

pub use crate::app::commands::watch::{WatchEvent, WatchOptions, WatchSummary};
pub use crate::app::report::{CheckReport, ViolationView};
pub use crate::domain::AppError;

/// Environment used outside tests: the real filesystem and OS folders, with
/// any configured simulation layered on top.
pub type HostEnvironment = SimulatedEnvironment<FilesystemProjectLocator, FixedSpecialFolders>;

/// Context for one host session.
pub type HostContext = AppContext<HostEnvironment, EmbeddedMessageCatalog>;

/// Create an `AppContext` for the project at `path`.
pub fn create_context(path: PathBuf, options: &CheckOptions) -> Result<HostContext, AppError> {
    let locator = FilesystemProjectLocator::new(path);
    let settings = resolve_settings(options, locator.config_path())?;
    tracing::debug!(?settings, "resolved settings");

    let folders = FixedSpecialFolders::overriding(
        &OsSpecialFolders::new(),
        options.desktop.clone(),
        options.documents.clone(),
    );
    let home = home_dir().unwrap_or_else(|| MAIN_SEPARATOR_STR.to_string());
    let environment = SimulatedEnvironment::new(
        locator,
        folders,
        settings.simulation,
        settings.max_path_length,
        home,
    );
    let catalog = EmbeddedMessageCatalog::new(settings.language)?;
    Ok(AppContext::new(environment, catalog, settings.max_path_length))
}

/// Check the project in the current directory.
pub fn check(options: &CheckOptions) -> Result<CheckReport, AppError> {
    check_at(std::env::current_dir()?, options)
}

/// Check the project at the specified path.
pub fn check_at(path: impl Into<PathBuf>, options: &CheckOptions) -> Result<CheckReport, AppError> {
    let ctx = create_context(path.into(), options)?;
    commands::check::execute(&ctx)
}

/// Watch the project at the specified path, sleeping between checks.
pub fn watch_at(
    path: impl Into<PathBuf>,
    options: &CheckOptions,
    watch_options: &WatchOptions,
    on_event: impl FnMut(&WatchEvent),
) -> Result<WatchSummary, AppError> {
    let ctx = create_context(path.into(), options)?;
    commands::watch::execute(&ctx, watch_options, on_event, std::thread::sleep)
}
