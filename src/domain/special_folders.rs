use serde::Serialize;

/// OS-reported well-known folders.
///
/// Either value may be absent on platforms without the concept; an empty
/// string is treated the same as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SpecialFolders {
    pub desktop: Option<String>,
    pub documents: Option<String>,
}

impl SpecialFolders {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_desktop(mut self, desktop: impl Into<String>) -> Self {
        self.desktop = Some(desktop.into());
        self
    }

    pub fn with_documents(mut self, documents: impl Into<String>) -> Self {
        self.documents = Some(documents.into());
        self
    }

    pub fn desktop(&self) -> Option<&str> {
        present(self.desktop.as_deref())
    }

    pub fn documents(&self) -> Option<&str> {
        present(self.documents.as_deref())
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
