use crate::domain::CheckSession;
use crate::ports::{MessageCatalog, ProjectLocator, SpecialFolderProvider};

/// Application context holding dependencies for command execution.
///
/// One context is one session: the success flag lives as long as the context.
pub struct AppContext<E, M>
where
    E: ProjectLocator + SpecialFolderProvider,
    M: MessageCatalog,
{
    environment: E,
    catalog: M,
    session: CheckSession,
    max_path_length: usize,
}

impl<E, M> AppContext<E, M>
where
    E: ProjectLocator + SpecialFolderProvider,
    M: MessageCatalog,
{
    /// Create a new application context with a fresh `Pending` session.
    pub fn new(environment: E, catalog: M, max_path_length: usize) -> Self {
        Self { environment, catalog, session: CheckSession::new(), max_path_length }
    }

    /// Where the project is and which special folders apply.
    pub fn environment(&self) -> &E {
        &self.environment
    }

    pub fn catalog(&self) -> &M {
        &self.catalog
    }

    pub fn session(&self) -> &CheckSession {
        &self.session
    }

    pub fn max_path_length(&self) -> usize {
        self.max_path_length
    }
}
