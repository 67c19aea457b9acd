use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A single normalized URL path segment.
///
/// Invariants:
/// - non-empty
/// - lowercase alphanumerics separated by single `-`
/// - no leading or trailing `-`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlugError {
    #[error("Slug source contains no alphanumeric characters: {0:?}")]
    Empty(String),
    #[error("Slug is not normalized: {0:?}")]
    NotNormalized(String),
}

impl Slug {
    /// Derive a slug from a display name, e.g. `"St. Louis"` -> `"st-louis"`.
    pub fn from_name(name: &str) -> Result<Self, SlugError> {
        let mut out = String::with_capacity(name.len());
        let mut pending_dash = false;

        for c in name.chars() {
            // "O'Fallon" -> "ofallon", not "o-fallon"
            if c == '\'' || c == '\u{2019}' {
                continue;
            }
            if c.is_alphanumeric() {
                // Keep only what `parse` accepts: 'İ' lowercases to
                // "i\u{307}" and 'ϒ' has no lowercase form.
                let lowered = c
                    .to_lowercase()
                    .filter(|l| l.is_alphanumeric() && !l.is_uppercase());
                for l in lowered {
                    if pending_dash && !out.is_empty() {
                        out.push('-');
                    }
                    pending_dash = false;
                    out.push(l);
                }
            } else {
                pending_dash = true;
            }
        }

        if out.is_empty() {
            return Err(SlugError::Empty(name.to_string()));
        }
        Ok(Slug(out))
    }

    /// Accept a string that is already a normalized slug.
    pub fn parse(s: &str) -> Result<Self, SlugError> {
        if s.is_empty() {
            return Err(SlugError::Empty(String::new()));
        }
        let valid_chars = s
            .chars()
            .all(|c| c == '-' || (c.is_alphanumeric() && !c.is_uppercase()));
        if !valid_chars || s.starts_with('-') || s.ends_with('-') || s.contains("--") {
            return Err(SlugError::NotNormalized(s.to_string()));
        }
        Ok(Slug(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Slug {
    type Error = SlugError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Slug::parse(&value)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lowercase locale code: `en`, `es`, `es-mx`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocaleError {
    #[error("Invalid locale code: {0:?}")]
    Invalid(String),
}

impl Locale {
    /// Parse a locale code. Case and `_` separators are normalized,
    /// so `"en_US"` becomes `"en-us"`.
    pub fn parse(s: &str) -> Result<Self, LocaleError> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");

        let mut parts = normalized.split('-');
        let language = parts.next().unwrap_or_default();
        let region = parts.next();
        let extra = parts.next();

        let language_ok = (2..=3).contains(&language.len())
            && language.chars().all(|c| c.is_ascii_lowercase());
        let region_ok = match region {
            None => true,
            Some(r) => r.len() == 2 && r.chars().all(|c| c.is_ascii_alphanumeric()),
        };

        if !language_ok || !region_ok || extra.is_some() {
            return Err(LocaleError::Invalid(s.to_string()));
        }
        Ok(Locale(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale("en".to_string())
    }
}

impl TryFrom<String> for Locale {
    type Error = LocaleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Locale::parse(&value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
