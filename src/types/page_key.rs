use serde::{Deserialize, Serialize};

/// The identity of a generated page as seen by the variation selector.
///
/// One page always supplies the same key; two distinct pages should
/// supply different keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PageKey {
    pub location: String,
    pub category: String,
    pub locale: String,
}

impl PageKey {
    pub fn new(
        location: impl Into<String>,
        category: impl Into<String>,
        locale: impl Into<String>,
    ) -> Self {
        Self {
            location: location.into(),
            category: category.into(),
            locale: locale.into(),
        }
    }

    /// Key for one named section of this page.
    ///
    /// Sections of the same page pick their variants independently of
    /// each other because the section name is folded into the category key.
    pub fn for_section(&self, section: &str) -> Self {
        Self {
            location: self.location.clone(),
            category: format!("{}/{}", self.category, section),
            locale: self.locale.clone(),
        }
    }
}
