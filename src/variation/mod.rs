pub mod hashing;
pub mod variants;

use crate::types::PageKey;
pub use hashing::{PolynomialSeedHasher, SeedHasher, Sha256SeedHasher, KEY_SEPARATOR};
pub use variants::{pick_variant, VariantSet, VariationError};

/// Deterministic variant picker.
///
/// Same page key and same variant count always give the same index;
/// different pages spread across the available variants.
#[derive(Debug, Clone, Copy)]
pub struct VariationSelector<H> {
	hasher: H,
}

impl Default for VariationSelector<Sha256SeedHasher> {
	fn default() -> Self {
		Self {
			hasher: Sha256SeedHasher,
		}
	}
}

impl<H> VariationSelector<H>
where
	H: SeedHasher,
{
	pub fn new(hasher: H) -> Self {
		Self { hasher }
	}

	/// Seed in `[0, variant_count)` for the given keys.
	pub fn compute_seed(
		&self,
		location: &str,
		category: &str,
		locale: &str,
		variant_count: usize,
	) -> Result<usize, VariationError> {
		if variant_count == 0 {
			return Err(VariationError::EmptyVariantSet);
		}
		let hash = self.hasher.hash_keys(location, category, locale);
		// u64 % n < n <= usize::MAX, so the narrowing is lossless
		let seed = (hash % variant_count as u64) as usize;
		debug_assert!(seed < variant_count);
		Ok(seed)
	}

	pub fn seed_for(&self, key: &PageKey, variant_count: usize) -> Result<usize, VariationError> {
		self.compute_seed(&key.location, &key.category, &key.locale, variant_count)
	}

	/// Pick the variant for `key` out of `variants`.
	pub fn select<'v>(&self, key: &PageKey, variants: &'v VariantSet) -> &'v str {
		// VariantSet is never empty, so the seed exists and is in range
		let seed = self.seed_for(key, variants.len()).unwrap_or_default();
		let picked = pick_variant(variants.as_slice(), seed);
		debug_assert!(picked.is_ok());
		picked.unwrap_or_default()
	}
}

/// Seed with the default SHA-256 hasher.
pub fn compute_seed(
	location: &str,
	category: &str,
	locale: &str,
	variant_count: usize,
) -> Result<usize, VariationError> {
	VariationSelector::default().compute_seed(location, category, locale, variant_count)
}
