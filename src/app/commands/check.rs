//! Check command implementation.
//!
//! Resolves the project location, runs one gated pass through the session,
//! and renders the outcome.

use crate::app::AppContext;
use crate::app::report::CheckReport;
use crate::domain::AppError;
use crate::ports::{MessageCatalog, ProjectLocator, SpecialFolderProvider};

/// Run one check pass in the context's session.
pub fn execute<E, M>(ctx: &AppContext<E, M>) -> Result<CheckReport, AppError>
where
    E: ProjectLocator + SpecialFolderProvider,
    M: MessageCatalog,
{
    let path = ctx.environment().project_path()?;
    let folders = ctx.environment().special_folders();
    tracing::debug!(
        path = %path,
        desktop = ?folders.desktop(),
        documents = ?folders.documents(),
        max = ctx.max_path_length(),
        "checking project location"
    );

    let outcome = ctx.session().check_once(&path, &folders, ctx.max_path_length());
    Ok(CheckReport::build(path, ctx.max_path_length(), outcome, ctx.catalog()))
}
