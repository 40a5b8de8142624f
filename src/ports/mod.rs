mod message_catalog;
mod project_locator;
mod special_folder_provider;

pub use message_catalog::{Message, MessageCatalog};
pub use project_locator::ProjectLocator;
pub use special_folder_provider::SpecialFolderProvider;
