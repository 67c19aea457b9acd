use sha2::{Digest, Sha256};

/// Separator placed between seed keys before hashing.
/// Keeps `("ab", "c")` and `("a", "bc")` apart.
pub const KEY_SEPARATOR: char = '\u{1f}';

pub trait SeedHasher {
    /// Stable hash of the three page-identity keys.
    ///
    /// Must depend on nothing but its arguments.
    fn hash_keys(&self, location: &str, category: &str, locale: &str) -> u64;
}

/// v0: SHA-256 over the joined keys, first 8 bytes big-endian.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256SeedHasher;

impl SeedHasher for Sha256SeedHasher {
    fn hash_keys(&self, location: &str, category: &str, locale: &str) -> u64 {
        let joined = join_keys(location, category, locale);

        let mut hasher = Sha256::new();
        hasher.update(joined.as_bytes());
        let digest = hasher.finalize();

        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&digest[..8]);
        u64::from_be_bytes(prefix)
    }
}

/// 32-bit polynomial rolling hash, `h = h * 31 + unit` over UTF-16 code units.
///
/// Produces the same values as the `(h << 5) - h + charCodeAt(i)` loop
/// found on JavaScript sites, so seeds line up with pages built that way.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolynomialSeedHasher;

impl SeedHasher for PolynomialSeedHasher {
    fn hash_keys(&self, location: &str, category: &str, locale: &str) -> u64 {
        let joined = join_keys(location, category, locale);

        let mut h: i32 = 0;
        for unit in joined.encode_utf16() {
            h = h.wrapping_mul(31).wrapping_add(i32::from(unit));
        }
        u64::from(h.unsigned_abs())
    }
}

fn join_keys(location: &str, category: &str, locale: &str) -> String {
    let mut joined = String::with_capacity(location.len() + category.len() + locale.len() + 2);
    joined.push_str(location);
    joined.push(KEY_SEPARATOR);
    joined.push_str(category);
    joined.push(KEY_SEPARATOR);
    joined.push_str(locale);
    joined
}
