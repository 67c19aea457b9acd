pub mod builder;
pub mod config;
pub mod library;
pub mod manifest;
pub mod page;
pub mod sitemap;

use thiserror::Error;

use crate::content::{ContentError, MessageError, TemplateError};
use crate::geo::GeoError;
use crate::routing::RouteError;
use crate::types::{Locale, Slug};
use crate::variation::VariationError;

pub use builder::SiteBuilder;
pub use config::{ConfigError, SiteConfig};
pub use library::{LocalizedVariants, Section, SectionKind, SectionLibrary};
pub use manifest::{ManifestPageEntry, SiteManifest};
pub use page::{truncate_description, GeneratedPage, NearbyLink, META_DESCRIPTION_MAX_CHARS};
pub use sitemap::{route_weight, ChangeFreq, Sitemap, SitemapEntry};

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Variation error: {0}")]
    Variation(#[from] VariationError),
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),
    #[error("Content error: {0}")]
    Content(#[from] ContentError),
    #[error("Message error: {0}")]
    Message(#[from] MessageError),
    #[error("Route error: {0}")]
    Route(#[from] RouteError),
    #[error("Geo error: {0}")]
    Geo(#[from] GeoError),
    #[error("Duplicate section name: {0}")]
    DuplicateSection(String),
    #[error("Section {section} has no variants for locale {locale}")]
    MissingLocaleVariants { section: String, locale: Locale },
    #[error("Unknown service category: {0}")]
    UnknownCategory(Slug),
    #[error("Locale {0} is not configured for this site")]
    UnsupportedLocale(Locale),
    #[error("Duplicate page path: {0}")]
    DuplicatePath(String),
}
