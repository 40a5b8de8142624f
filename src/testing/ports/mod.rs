mod message_catalog_stub;

pub use self::message_catalog_stub::StubMessageCatalog;
pub use self::project_locator_stub::FixedProjectLocator;
