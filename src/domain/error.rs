use std::io;

use thiserror::Error;

/// Library-wide error type for projloc operations.
///
/// The rule evaluator and the check session never fail; every variant here
/// belongs to host integration (configuration, path resolution, messages).
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration file could not be read.
    #[error("Failed to read config file '{path}': {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: io::Error,
    },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Language identifier is not one of the bundled catalogs.
    #[error("Invalid language '{0}': must be one of en, fr")]
    InvalidLanguage(String),

    /// Maximum path length must be a positive integer.
    #[error("Invalid max path length {0}: must be greater than 0")]
    InvalidMaxLength(usize),

    /// Cloud provider name is not recognized.
    #[error("Invalid cloud folder '{0}': must be one of onedrive, dropbox, google, icloud")]
    InvalidCloudFolder(String),

    /// The project path could not be resolved into a candidate string.
    #[error("Project path unavailable: {0}")]
    ProjectPathUnavailable(String),

    /// Message catalog entry is missing or failed to render.
    #[error("Message '{key}' ({language}) could not be rendered: {reason}")]
    MessageRender { key: String, language: String, reason: String },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Process exit code for this error when surfaced by the CLI.
    pub fn exit_code(&self) -> i32 {
        2
    }
}
