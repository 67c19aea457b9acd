pub mod category;
pub mod identifiers;
pub mod page_key;

pub use category::ServiceCategory;
pub use identifiers::{Locale, LocaleError, Slug, SlugError};
pub use page_key::PageKey;
