use std::collections::BTreeMap;
use std::io::Read;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Locale;

#[derive(Debug, Error)]
pub enum MessageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Default locale {0} has no message table")]
    MissingDefaultLocale(Locale),
    #[error("Missing message {key} for locale {locale}")]
    Missing { locale: Locale, key: String },
}

/// Read-only `locale -> key -> text` lookup table.
///
/// Built once and passed by reference into whatever renders pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MessagesFile", into = "MessagesFile")]
pub struct LocaleMessages {
    default_locale: Locale,
    tables: BTreeMap<Locale, BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct MessagesFile {
    default_locale: Locale,
    messages: BTreeMap<Locale, BTreeMap<String, String>>,
}

impl LocaleMessages {
    pub fn new(
        default_locale: Locale,
        tables: BTreeMap<Locale, BTreeMap<String, String>>,
    ) -> Result<Self, MessageError> {
        if !tables.contains_key(&default_locale) {
            return Err(MessageError::MissingDefaultLocale(default_locale));
        }
        Ok(Self {
            default_locale,
            tables,
        })
    }

    pub fn from_json_str(s: &str) -> Result<Self, MessageError> {
        let file: MessagesFile = serde_json::from_str(s)?;
        Self::try_from(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, MessageError> {
        let file: MessagesFile = serde_json::from_reader(reader)?;
        Self::try_from(file)
    }

    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    pub fn locales(&self) -> impl Iterator<Item = &Locale> {
        self.tables.keys()
    }

    /// Look `key` up for `locale`, falling back to the default locale.
    pub fn get(&self, locale: &Locale, key: &str) -> Result<&str, MessageError> {
        self.tables
            .get(locale)
            .and_then(|t| t.get(key))
            .or_else(|| self.tables.get(&self.default_locale).and_then(|t| t.get(key)))
            .map(String::as_str)
            .ok_or_else(|| MessageError::Missing {
                locale: locale.clone(),
                key: key.to_string(),
            })
    }
}

impl TryFrom<MessagesFile> for LocaleMessages {
    type Error = MessageError;

    fn try_from(file: MessagesFile) -> Result<Self, Self::Error> {
        LocaleMessages::new(file.default_locale, file.messages)
    }
}

impl From<LocaleMessages> for MessagesFile {
    fn from(messages: LocaleMessages) -> Self {
        MessagesFile {
            default_locale: messages.default_locale,
            messages: messages.tables,
        }
    }
}
