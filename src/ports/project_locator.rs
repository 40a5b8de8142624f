use crate::domain::{AppError, PathCandidate};

/// Port for resolving where the project under check lives.
pub trait ProjectLocator {
    /// Absolute project directory, separator-normalized for the host OS.
    fn project_path(&self) -> Result<PathCandidate, AppError>;
}
