pub mod config;
pub mod error;
mod path_candidate;
pub mod rules;
pub mod session;
mod special_folders;
mod violation;

pub use config::{CheckerConfig, Language, Simulation};
pub use error::AppError;
pub use path_candidate::PathCandidate;
pub use rules::{DEFAULT_MAX_PATH_LENGTH, evaluate};
pub use session::{CheckSession, SessionOutcome, SessionState};
pub use special_folders::SpecialFolders;
pub use violation::{CheckResult, CloudFolder, ViolationReason};
