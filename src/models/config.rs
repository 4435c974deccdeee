//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::domain::client::DocumentMatch;
use crate::forms::rules::{FieldRules, MessageCatalog};

pub const DEFAULT_PAGE_SIZE: usize = 15;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    #[serde(default)]
    pub registry: RegistrySettings,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
/// Behaviour of the client registry: field rules, messages, duplicate matching
/// and list defaults.
pub struct RegistrySettings {
    pub rules: FieldRules,
    /// Always the built-in catalog; not read from configuration.
    #[serde(skip)]
    pub messages: MessageCatalog,
    pub document_match: DocumentMatch,
    pub default_page_size: usize,
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            rules: FieldRules::default(),
            messages: MessageCatalog::default(),
            document_match: DocumentMatch::Exact,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_section_is_optional() {
        let config: ServerConfig = serde_json::from_str(
            r#"{"address": "127.0.0.1", "port": 8080, "database_url": "app.db"}"#,
        )
        .unwrap();
        assert_eq!(config.registry, RegistrySettings::default());
    }

    #[test]
    fn registry_overrides_are_applied() {
        let settings: RegistrySettings =
            serde_json::from_str(r#"{"document_match": "partial", "default_page_size": 30}"#)
                .unwrap();
        assert_eq!(settings.document_match, DocumentMatch::Partial);
        assert_eq!(settings.default_page_size, 30);
        assert_eq!(settings.messages, MessageCatalog::default());
    }
}
