use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VariationError {
    #[error("Variant set is empty")]
    EmptyVariantSet,
    #[error("Seed {index} out of range for {len} variants")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Candidate phrasings for one page section.
///
/// Never empty; order only defines index positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct VariantSet {
    variants: Vec<String>,
}

impl VariantSet {
    pub fn new<I, S>(variants: I) -> Result<Self, VariationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let variants: Vec<String> = variants.into_iter().map(Into::into).collect();
        if variants.is_empty() {
            return Err(VariationError::EmptyVariantSet);
        }
        Ok(Self { variants })
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    // Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.variants
    }

    pub fn get(&self, seed: usize) -> Result<&str, VariationError> {
        pick_variant(&self.variants, seed)
    }
}

impl TryFrom<Vec<String>> for VariantSet {
    type Error = VariationError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        VariantSet::new(value)
    }
}

impl From<VariantSet> for Vec<String> {
    fn from(set: VariantSet) -> Self {
        set.variants
    }
}

/// Return `variants[seed]`.
///
/// An out-of-range seed means the seed was computed for a different
/// variant count. It is reported, never wrapped.
pub fn pick_variant<S: AsRef<str>>(variants: &[S], seed: usize) -> Result<&str, VariationError> {
    variants
        .get(seed)
        .map(|v| v.as_ref())
        .ok_or(VariationError::IndexOutOfRange {
            index: seed,
            len: variants.len(),
        })
}
