//! Location simulation for trying out each rule without moving a project.
//!
//! Wraps the real locator and folder provider and rewrites what they report.
//! The rule evaluator never sees anything but the rewritten values.

use std::path::MAIN_SEPARATOR;

use crate::domain::{AppError, CloudFolder, PathCandidate, Simulation, SpecialFolders};
use crate::ports::{ProjectLocator, SpecialFolderProvider};

const ACCENTED_SEGMENT: &str = "Projé";
const FALLBACK_NAME: &str = "Project";

/// Simulation toggles with the cloud provider already parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedSimulation {
    pub long_path: bool,
    pub accented: bool,
    pub cloud: Option<CloudFolder>,
    pub documents: bool,
    pub desktop: bool,
}

impl TryFrom<&Simulation> for ResolvedSimulation {
    type Error = AppError;

    fn try_from(simulation: &Simulation) -> Result<Self, Self::Error> {
        Ok(Self {
            long_path: simulation.long_path,
            accented: simulation.accented,
            cloud: simulation.cloud_folder()?,
            documents: simulation.documents,
            desktop: simulation.desktop,
        })
    }
}

/// Locator and folder provider that apply simulated mutations.
pub struct SimulatedEnvironment<L, F> {
    locator: L,
    folders: F,
    simulation: ResolvedSimulation,
    max_length: usize,
    home: String,
}

impl<L: ProjectLocator, F: SpecialFolderProvider> SimulatedEnvironment<L, F> {
    pub fn new(
        locator: L,
        folders: F,
        simulation: ResolvedSimulation,
        max_length: usize,
        home: impl Into<String>,
    ) -> Self {
        Self { locator, folders, simulation, max_length, home: home.into() }
    }

    /// The wrapped, unsimulated locator.
    pub fn locator(&self) -> &L {
        &self.locator
    }

    fn synthetic(&self, reported: Option<&str>, name: &str) -> String {
        reported.map(str::to_string).unwrap_or_else(|| join(&self.home, name))
    }
}

impl<L: ProjectLocator, F: SpecialFolderProvider> SpecialFolderProvider
    for SimulatedEnvironment<L, F>
{
    fn special_folders(&self) -> SpecialFolders {
        let mut folders = self.folders.special_folders();
        if self.simulation.documents {
            folders.documents = Some(self.synthetic(folders.documents(), "Documents"));
        }
        if self.simulation.desktop {
            folders.desktop = Some(self.synthetic(folders.desktop(), "Desktop"));
        }
        folders
    }
}

impl<L: ProjectLocator, F: SpecialFolderProvider> ProjectLocator for SimulatedEnvironment<L, F> {
    fn project_path(&self) -> Result<PathCandidate, AppError> {
        let real = self.locator.project_path()?;
        let name = folder_name(real.as_str()).unwrap_or(FALLBACK_NAME).to_string();
        let mut path = trim_trailing(real.as_str()).to_string();

        let folders = self.special_folders();
        if self.simulation.documents
            && let Some(documents) = folders.documents()
        {
            path = join(documents, &name);
        }
        if self.simulation.desktop
            && let Some(desktop) = folders.desktop()
        {
            path = join(desktop, &name);
        }

        if let Some(cloud) = self.simulation.cloud {
            let parent = parent_of(&path).unwrap_or(self.home.as_str()).to_string();
            path = join(&join(&parent, cloud_dir_name(cloud)), &name);
        }

        if self.simulation.accented {
            path = join(&path, ACCENTED_SEGMENT);
        }

        if self.simulation.long_path {
            let length = path.chars().count();
            if length <= self.max_length {
                let padding = "x".repeat(self.max_length - length + 1);
                path = join(&path, &padding);
            }
        }

        tracing::debug!(real = %real, simulated = %path, "applied location simulation");
        Ok(PathCandidate::new(path))
    }
}

/// Directory name the client creates locally; contains the rule's marker.
fn cloud_dir_name(cloud: CloudFolder) -> &'static str {
    match cloud {
        CloudFolder::OneDrive => "OneDrive",
        CloudFolder::Dropbox => "Dropbox",
        CloudFolder::Google => "Google Drive",
        CloudFolder::ICloud => "com~apple~CloudDocs",
    }
}

fn is_separator(c: char) -> bool {
    c == MAIN_SEPARATOR || c == '/'
}

fn trim_trailing(path: &str) -> &str {
    let trimmed = path.trim_end_matches(is_separator);
    if trimmed.is_empty() { path } else { trimmed }
}

fn folder_name(path: &str) -> Option<&str> {
    path.split(is_separator).rfind(|segment| !segment.is_empty())
}

fn parent_of(path: &str) -> Option<&str> {
    let trimmed = trim_trailing(path);
    let index = trimmed.rfind(is_separator)?;
    Some(if index == 0 { &trimmed[..1] } else { &trimmed[..index] })
}

fn join(base: &str, name: &str) -> String {
    let base = trim_trailing(base);
    if base.ends_with(is_separator) {
        format!("{}{}", base, name)
    } else {
        format!("{}{}{}", base, MAIN_SEPARATOR, name)
    }
}
