use std::cell::RefCell;

use crate::domain::{AppError, ViolationReason};
use crate::ports::{Message, MessageCatalog};

/// Catalog echoing reason tags, optionally failing every lookup.
#[derive(Debug, Default)]
pub struct StubMessageCatalog {
    should_fail: RefCell<bool>,
}

#[allow(dead_code)]
impl StubMessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let catalog = Self::default();
        *catalog.should_fail.borrow_mut() = true;
        catalog
    }

    fn message(&self, key: &str) -> Result<Message, AppError> {
        if *self.should_fail.borrow() {
            return Err(AppError::MessageRender {
                key: key.to_string(),
                language: "stub".to_string(),
                reason: "stub failure".to_string(),
            });
        }
        Ok(Message {
            title: format!("title:{}", key),
            explanation: format!("explanation:{}", key),
            remediation: format!("remediation:{}", key),
        })
    }
}

impl MessageCatalog for StubMessageCatalog {
    fn violation(&self, reason: &ViolationReason) -> Result<Message, AppError> {
        self.message(reason.tag())
    }

    fn success(&self) -> Result<Message, AppError> {
        self.message("success")
    }
}
