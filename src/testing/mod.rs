pub mod ports;

#[allow(unused_imports)]
pub use ports::FixedProjectLocator;
#[allow(unused_imports)]
pub use ports::StubMessageCatalog;
