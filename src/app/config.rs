//! Configuration layering: defaults, `projloc.toml`, then CLI overrides.

use std::path::{Path, PathBuf};

use crate::adapters::ResolvedSimulation;
use crate::domain::{AppError, CheckerConfig, Language, Simulation};

/// Locale variables consulted for the message language, in priority order.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Caller-supplied overrides for one check or watch run.
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Explicit config file; otherwise `projloc.toml` in the project is used.
    pub config_path: Option<PathBuf>,
    pub max_length: Option<usize>,
    pub language: Option<Language>,
    /// Replace the OS-reported Desktop folder.
    pub desktop: Option<String>,
    /// Replace the OS-reported Documents folder.
    pub documents: Option<String>,
    /// Toggles merged over the config file's `[simulate]` table.
    pub simulate: Simulation,
}

/// Settings in force after every layer has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub max_path_length: usize,
    pub language: Language,
    pub simulation: ResolvedSimulation,
}

/// Load and parse a config file.
pub fn load_config(path: &Path) -> Result<CheckerConfig, AppError> {
    let content = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
        path: path.display().to_string(),
        source,
    })?;
    parse_config_content(&content)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<CheckerConfig, AppError> {
    let config: CheckerConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Apply defaults, the config file (if any), and `options` in that order.
pub fn resolve_settings(
    options: &CheckOptions,
    discovered_config: Option<PathBuf>,
) -> Result<Settings, AppError> {
    let config_path = options.config_path.clone().or(discovered_config);
    let mut config = match &config_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            load_config(path)?
        }
        None => CheckerConfig::default(),
    };

    if let Some(max_length) = options.max_length {
        config.max_path_length = max_length;
    }
    config.simulate.merge(&options.simulate);
    config.validate()?;

    let language = match options.language {
        Some(language) => language,
        None => config.language()?.unwrap_or_else(detect_language),
    };

    Ok(Settings {
        max_path_length: config.max_path_length,
        language,
        simulation: ResolvedSimulation::try_from(&config.simulate)?,
    })
}

/// Message language from the process locale, English when unset.
pub fn detect_language() -> Language {
    LOCALE_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.is_empty())
        .map(|locale| Language::from_locale(&locale))
        .unwrap_or_default()
}
