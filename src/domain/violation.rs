use std::fmt;

/// Cloud-sync clients whose folders are rejected, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CloudFolder {
    OneDrive,
    Dropbox,
    Google,
    ICloud,
}

impl CloudFolder {
    /// All providers in the order the cloud rule checks them.
    pub const ALL: [CloudFolder; 4] =
        [CloudFolder::OneDrive, CloudFolder::Dropbox, CloudFolder::Google, CloudFolder::ICloud];

    /// Substring matched case-insensitively against the project path.
    ///
    /// iCloud Drive stores its local mirror under `com~apple~CloudDocs`, so
    /// `apple~Cloud` is the marker rather than the brand name.
    pub fn marker(&self) -> &'static str {
        match self {
            CloudFolder::OneDrive => "OneDrive",
            CloudFolder::Dropbox => "Dropbox",
            CloudFolder::Google => "Google",
            CloudFolder::ICloud => "apple~Cloud",
        }
    }

    /// Human-readable product name.
    pub fn display_name(&self) -> &'static str {
        match self {
            CloudFolder::OneDrive => "OneDrive",
            CloudFolder::Dropbox => "Dropbox",
            CloudFolder::Google => "Google Drive",
            CloudFolder::ICloud => "iCloud",
        }
    }

    /// Stable identifier used in config files, CLI flags, and JSON output.
    pub fn id(&self) -> &'static str {
        match self {
            CloudFolder::OneDrive => "onedrive",
            CloudFolder::Dropbox => "dropbox",
            CloudFolder::Google => "google",
            CloudFolder::ICloud => "icloud",
        }
    }

    pub fn from_id(name: &str) -> Option<CloudFolder> {
        match name.to_lowercase().as_str() {
            "onedrive" => Some(CloudFolder::OneDrive),
            "dropbox" => Some(CloudFolder::Dropbox),
            "google" | "googledrive" | "google-drive" => Some(CloudFolder::Google),
            "icloud" => Some(CloudFolder::ICloud),
            _ => None,
        }
    }
}

impl fmt::Display for CloudFolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A single violated location rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationReason {
    /// Measured length and the maximum in force when the check ran.
    PathTooLong { length: usize, max: usize },
    AccentedCharacters,
    CloudFolder(CloudFolder),
    DocumentsFolder,
    OnDesktop,
}

impl ViolationReason {
    /// Message lookup key.
    pub fn tag(&self) -> &'static str {
        match self {
            ViolationReason::PathTooLong { .. } => "path_too_long",
            ViolationReason::AccentedCharacters => "accented_characters",
            ViolationReason::CloudFolder(_) => "cloud_folder",
            ViolationReason::DocumentsFolder => "documents_folder",
            ViolationReason::OnDesktop => "on_desktop",
        }
    }
}

impl fmt::Display for ViolationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationReason::PathTooLong { length, max } => {
                write!(f, "path too long ({} > {})", length, max)
            }
            ViolationReason::AccentedCharacters => f.write_str("accented characters"),
            ViolationReason::CloudFolder(folder) => write!(f, "inside {} folder", folder),
            ViolationReason::DocumentsFolder => f.write_str("inside Documents"),
            ViolationReason::OnDesktop => f.write_str("on Desktop"),
        }
    }
}

/// Ordered outcome of one evaluation pass. Empty means the location is fine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckResult {
    reasons: Vec<ViolationReason>,
}

impl CheckResult {
    pub fn new(reasons: Vec<ViolationReason>) -> Self {
        Self { reasons }
    }

    pub fn is_success(&self) -> bool {
        self.reasons.is_empty()
    }

    pub fn reasons(&self) -> &[ViolationReason] {
        &self.reasons
    }

    pub fn len(&self) -> usize {
        self.reasons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reasons.is_empty()
    }

    pub fn contains(&self, reason: &ViolationReason) -> bool {
        self.reasons.contains(reason)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ViolationReason> {
        self.reasons.iter()
    }

    pub fn into_reasons(self) -> Vec<ViolationReason> {
        self.reasons
    }
}

impl IntoIterator for CheckResult {
    type Item = ViolationReason;
    type IntoIter = std::vec::IntoIter<ViolationReason>;

    fn into_iter(self) -> Self::IntoIter {
        self.reasons.into_iter()
    }
}

impl<'a> IntoIterator for &'a CheckResult {
    type Item = &'a ViolationReason;
    type IntoIter = std::slice::Iter<'a, ViolationReason>;

    fn into_iter(self) -> Self::IntoIter {
        self.reasons.iter()
    }
}
