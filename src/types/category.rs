use serde::{Deserialize, Serialize};

use super::identifiers::{Slug, SlugError};

/// A service offered on city pages, e.g. plumbing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCategory {
    pub slug: Slug,
    pub name: String,
}

impl ServiceCategory {
    pub fn new(name: impl Into<String>) -> Result<Self, SlugError> {
        let name = name.into();
        Ok(Self {
            slug: Slug::from_name(&name)?,
            name,
        })
    }
}
