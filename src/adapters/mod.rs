pub mod embedded_message_catalog;
pub mod project_filesystem;
pub mod simulation;
pub mod special_folders;

pub use embedded_message_catalog::EmbeddedMessageCatalog;
pub use project_filesystem::{CONFIG_FILE, FilesystemProjectLocator};
pub use simulation::{ResolvedSimulation, SimulatedEnvironment};
pub use special_folders::{FixedSpecialFolders, OsSpecialFolders};
