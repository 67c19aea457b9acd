use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::types::Locale;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Base URL must be http or https: {0}")]
    InvalidBaseUrl(Url),
    #[error("Default locale {0} is not in the locale list")]
    DefaultLocaleNotListed(Locale),
    #[error("Duplicate locale: {0}")]
    DuplicateLocale(Locale),
    #[error("Purge batch size must be at least 1")]
    InvalidPurgeBatchSize,
}

/// Site-wide settings. `v0()` spells out every default; JSON input may
/// omit the fields that have one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub base_url: Url,
    pub default_locale: Locale,
    pub locales: Vec<Locale>,
    #[serde(default = "default_nearby_limit")]
    pub nearby_limit: usize,
    #[serde(default = "default_purge_batch_size")]
    pub purge_batch_size: usize,
}

fn default_nearby_limit() -> usize {
    6
}

// Cloudflare accepts at most 30 URLs per purge-by-URL call on most plans.
fn default_purge_batch_size() -> usize {
    30
}

impl SiteConfig {
    pub fn v0(base_url: Url) -> Self {
        Self {
            base_url,
            default_locale: Locale::default(),
            locales: vec![Locale::default()],
            nearby_limit: default_nearby_limit(),
            purge_batch_size: default_purge_batch_size(),
        }
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let f = fs::File::open(path)?;
        let config: SiteConfig = serde_json::from_reader(f)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !matches!(self.base_url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl(self.base_url.clone()));
        }

        let mut seen = BTreeSet::new();
        for locale in &self.locales {
            if !seen.insert(locale) {
                return Err(ConfigError::DuplicateLocale(locale.clone()));
            }
        }
        if !seen.contains(&self.default_locale) {
            return Err(ConfigError::DefaultLocaleNotListed(self.default_locale.clone()));
        }

        if self.purge_batch_size == 0 {
            return Err(ConfigError::InvalidPurgeBatchSize);
        }
        Ok(())
    }
}
