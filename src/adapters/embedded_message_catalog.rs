use std::collections::BTreeMap;
use std::sync::OnceLock;

use include_dir::{Dir, include_dir};
use minijinja::{Environment, UndefinedBehavior, context};
use serde::Deserialize;

use crate::domain::{AppError, Language, ViolationReason};
use crate::ports::{Message, MessageCatalog};

static MESSAGES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/messages");

const SUCCESS_KEY: &str = "success";

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct MessageTemplate {
    title: String,
    explanation: String,
    remediation: String,
}

/// Message catalog backed by the TOML tables embedded in the binary.
#[derive(Debug, Clone)]
pub struct EmbeddedMessageCatalog {
    language: Language,
    entries: BTreeMap<String, MessageTemplate>,
}

impl EmbeddedMessageCatalog {
    pub fn new(language: Language) -> Result<Self, AppError> {
        let file_name = format!("{}.toml", language.code());
        let content = MESSAGES_DIR
            .get_file(&file_name)
            .and_then(|file| file.contents_utf8())
            .ok_or_else(|| AppError::MessageRender {
                key: file_name.clone(),
                language: language.code().to_string(),
                reason: "catalog not embedded".to_string(),
            })?;
        let entries: BTreeMap<String, MessageTemplate> = toml::from_str(content)?;
        Ok(Self { language, entries })
    }

    fn render(&self, key: &str, vars: minijinja::Value) -> Result<Message, AppError> {
        let template = self.entries.get(key).ok_or_else(|| self.error(key, "missing entry"))?;
        let render = |text: &str| {
            env().render_str(text, &vars).map_err(|err| self.error(key, err))
        };
        Ok(Message {
            title: render(&template.title)?,
            explanation: render(&template.explanation)?,
            remediation: render(&template.remediation)?,
        })
    }

    fn error(&self, key: &str, reason: impl std::fmt::Display) -> AppError {
        AppError::MessageRender {
            key: key.to_string(),
            language: self.language.code().to_string(),
            reason: reason.to_string(),
        }
    }
}

impl MessageCatalog for EmbeddedMessageCatalog {
    fn violation(&self, reason: &ViolationReason) -> Result<Message, AppError> {
        let vars = match reason {
            ViolationReason::PathTooLong { length, max } => context! { length, max },
            ViolationReason::CloudFolder(folder) => context! { folder => folder.display_name() },
            _ => context! {},
        };
        self.render(reason.tag(), vars)
    }

    fn success(&self) -> Result<Message, AppError> {
        self.render(SUCCESS_KEY, context! {})
    }
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn env() -> &'static Environment<'static> {
    ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env
    })
}
