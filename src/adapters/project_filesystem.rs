use std::path::{Path, PathBuf};

use crate::domain::{AppError, PathCandidate};
use crate::ports::ProjectLocator;

/// Config file looked up inside the project directory.
pub const CONFIG_FILE: &str = "projloc.toml";

/// Filesystem-based project locator.
#[derive(Debug, Clone)]
pub struct FilesystemProjectLocator {
    root: PathBuf,
}

impl FilesystemProjectLocator {
    /// Create a locator for the given project directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// `projloc.toml` inside the project, when present.
    pub fn config_path(&self) -> Option<PathBuf> {
        let path = self.root.join(CONFIG_FILE);
        path.is_file().then_some(path)
    }
}

impl ProjectLocator for FilesystemProjectLocator {
    fn project_path(&self) -> Result<PathCandidate, AppError> {
        if !self.root.is_dir() {
            return Err(AppError::ProjectPathUnavailable(format!(
                "{} is not a directory",
                self.root.display()
            )));
        }

        let absolute = std::path::absolute(&self.root)?;
        // Containing directory plus folder name, with `.`/`..` segments folded.
        let resolved = match (absolute.parent(), absolute.file_name()) {
            (Some(parent), Some(name)) => lexical_normalize(parent).join(name),
            _ => lexical_normalize(&absolute),
        };

        let text = resolved.to_str().ok_or_else(|| {
            AppError::ProjectPathUnavailable(format!(
                "{} contains invalid unicode",
                resolved.display()
            ))
        })?;
        Ok(PathCandidate::new(normalize_separators(text)))
    }
}

fn lexical_normalize(path: &Path) -> PathBuf {
    use std::path::Component;

    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Rewrite separators to the host convention.
pub fn normalize_separators(path: &str) -> String {
    if cfg!(windows) { path.replace('/', "\\") } else { path.to_string() }
}
