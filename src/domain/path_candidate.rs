use std::fmt;

use serde::Serialize;

/// Absolute directory path of a project, fixed for one check pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PathCandidate(String);

impl PathCandidate {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in Unicode scalar values.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PathCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PathCandidate {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PathCandidate {
    fn from(value: String) -> Self {
        Self(value)
    }
}
