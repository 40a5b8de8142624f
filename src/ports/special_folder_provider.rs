use crate::domain::SpecialFolders;

/// Port for OS-reported Desktop and Documents locations.
pub trait SpecialFolderProvider {
    /// Both values are absent on platforms without the concept.
    fn special_folders(&self) -> SpecialFolders;
}
