use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;

use serde::{Deserialize, Serialize};

use super::SiteError;
use crate::types::Locale;
use crate::variation::VariantSet;

/// Variant templates per locale for one slot of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedVariants(BTreeMap<Locale, VariantSet>);

impl LocalizedVariants {
    pub fn new(variants: BTreeMap<Locale, VariantSet>) -> Self {
        Self(variants)
    }

    /// Variants for `locale`, else those of `default_locale`.
    pub fn for_locale(&self, locale: &Locale, default_locale: &Locale) -> Option<&VariantSet> {
        self.0.get(locale).or_else(|| self.0.get(default_locale))
    }

    fn has(&self, locale: &Locale) -> bool {
        self.0.contains_key(locale)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Heading,
    Paragraph,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    pub kind: SectionKind,
    pub variants: LocalizedVariants,
}

/// All template text a city x category page is assembled from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionLibrary {
    pub title: LocalizedVariants,
    pub meta_description: LocalizedVariants,
    pub sections: Vec<Section>,
}

impl SectionLibrary {
    pub fn from_json_str(s: &str) -> Result<Self, SiteError> {
        let library: SectionLibrary = serde_json::from_str(s)?;
        Ok(library)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SiteError> {
        let library: SectionLibrary = serde_json::from_reader(reader)?;
        Ok(library)
    }

    /// Section names must be unique and every slot needs default-locale text.
    pub fn validate(&self, default_locale: &Locale) -> Result<(), SiteError> {
        let mut seen = BTreeSet::new();
        for section in &self.sections {
            if !seen.insert(section.name.as_str()) {
                return Err(SiteError::DuplicateSection(section.name.clone()));
            }
        }

        let slots = [("title", &self.title), ("meta_description", &self.meta_description)]
            .into_iter()
            .chain(self.sections.iter().map(|s| (s.name.as_str(), &s.variants)));
        for (name, variants) in slots {
            if !variants.has(default_locale) {
                return Err(SiteError::MissingLocaleVariants {
                    section: name.to_string(),
                    locale: default_locale.clone(),
                });
            }
        }
        Ok(())
    }
}
