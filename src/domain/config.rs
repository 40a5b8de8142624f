//! Checker configuration models.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::rules::DEFAULT_MAX_PATH_LENGTH;
use super::{AppError, CloudFolder};

/// Language of the bundled message catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Fr];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
        }
    }

    pub fn parse(value: &str) -> Result<Language, AppError> {
        match value.to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "fr" | "french" | "français" => Ok(Language::Fr),
            _ => Err(AppError::InvalidLanguage(value.to_string())),
        }
    }

    /// Guess from a POSIX locale string such as `fr_CA.UTF-8`.
    pub fn from_locale(locale: &str) -> Language {
        if locale.to_lowercase().starts_with("fr") { Language::Fr } else { Language::En }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Location mutations applied before checking, to exercise each rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Simulation {
    #[serde(default)]
    pub long_path: bool,
    #[serde(default)]
    pub accented: bool,
    #[serde(default)]
    pub cloud: Option<String>,
    #[serde(default)]
    pub documents: bool,
    #[serde(default)]
    pub desktop: bool,
}

impl Simulation {
    pub fn is_active(&self) -> bool {
        self.long_path || self.accented || self.cloud.is_some() || self.documents || self.desktop
    }

    pub fn cloud_folder(&self) -> Result<Option<CloudFolder>, AppError> {
        match &self.cloud {
            None => Ok(None),
            Some(name) => CloudFolder::from_id(name)
                .map(Some)
                .ok_or_else(|| AppError::InvalidCloudFolder(name.clone())),
        }
    }

    /// Overlay enabled toggles from `other`.
    pub fn merge(&mut self, other: &Simulation) {
        self.long_path |= other.long_path;
        self.accented |= other.accented;
        self.documents |= other.documents;
        self.desktop |= other.desktop;
        if other.cloud.is_some() {
            self.cloud = other.cloud.clone();
        }
    }
}

/// Checker configuration loaded from `projloc.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckerConfig {
    /// Longest accepted project path, in characters.
    #[serde(default = "default_max_path_length")]
    pub max_path_length: usize,
    /// Message language; detected from the environment when absent.
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub simulate: Simulation,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            max_path_length: default_max_path_length(),
            language: None,
            simulate: Simulation::default(),
        }
    }
}

impl CheckerConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.max_path_length == 0 {
            return Err(AppError::InvalidMaxLength(self.max_path_length));
        }
        if let Some(language) = &self.language {
            Language::parse(language)?;
        }
        self.simulate.cloud_folder()?;
        Ok(())
    }

    pub fn language(&self) -> Result<Option<Language>, AppError> {
        self.language.as_deref().map(Language::parse).transpose()
    }
}

fn default_max_path_length() -> usize {
    DEFAULT_MAX_PATH_LENGTH
}
