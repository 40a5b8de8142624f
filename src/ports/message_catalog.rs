use serde::Serialize;

use crate::domain::{AppError, ViolationReason};

/// Rendered user-facing text for one outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub title: String,
    pub explanation: String,
    pub remediation: String,
}

/// Port for turning check outcomes into localized text.
pub trait MessageCatalog {
    /// Text for a violated rule, keyed by the reason's tag.
    fn violation(&self, reason: &ViolationReason) -> Result<Message, AppError>;

    /// One-time confirmation shown when the location passes every rule.
    fn success(&self) -> Result<Message, AppError>;
}
