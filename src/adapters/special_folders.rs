use std::path::PathBuf;

use crate::domain::SpecialFolders;
use crate::ports::SpecialFolderProvider;

use super::project_filesystem::normalize_separators;

/// Desktop and Documents as reported by the operating system.
///
/// Only Windows reports them; on other platforms the desktop and documents
/// rules are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSpecialFolders;

impl OsSpecialFolders {
    pub fn new() -> Self {
        Self
    }
}

impl SpecialFolderProvider for OsSpecialFolders {
    #[cfg(windows)]
    fn special_folders(&self) -> SpecialFolders {
        SpecialFolders {
            desktop: dirs::desktop_dir().and_then(path_string),
            documents: dirs::document_dir().and_then(path_string),
        }
    }

    #[cfg(not(windows))]
    fn special_folders(&self) -> SpecialFolders {
        SpecialFolders::none()
    }
}

/// Explicit folder values, overriding or replacing the OS lookup.
#[derive(Debug, Clone, Default)]
pub struct FixedSpecialFolders {
    folders: SpecialFolders,
}

impl FixedSpecialFolders {
    pub fn new(folders: SpecialFolders) -> Self {
        Self { folders }
    }

    /// Start from `base` and replace whichever values are given.
    pub fn overriding(
        base: &impl SpecialFolderProvider,
        desktop: Option<String>,
        documents: Option<String>,
    ) -> Self {
        let mut folders = base.special_folders();
        if let Some(desktop) = desktop {
            folders.desktop = Some(normalize_separators(&desktop));
        }
        if let Some(documents) = documents {
            folders.documents = Some(normalize_separators(&documents));
        }
        Self { folders }
    }
}

impl SpecialFolderProvider for FixedSpecialFolders {
    fn special_folders(&self) -> SpecialFolders {
        self.folders.clone()
    }
}

/// User home directory as a host-normalized string, if the OS reports one.
pub fn home_dir() -> Option<String> {
    dirs::home_dir().and_then(path_string)
}

fn path_string(path: PathBuf) -> Option<String> {
    path.to_str().map(normalize_separators)
}
