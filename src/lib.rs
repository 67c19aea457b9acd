//! Deterministic content variation and geo routing for programmatic SEO sites.
//!
//! `pseo-core` picks per-page text variants from stable page-identity
//! hashes, models a country -> state -> city hierarchy, builds localized
//! paths, breadcrumbs and nearby-city links, and emits sitemaps and CDN purge
//! payloads. Every operation is pure: identical inputs always produce
//! identical pages, byte-for-byte.

pub mod cdn;
pub mod content;
pub mod geo;
pub mod routing;
pub mod site;
pub mod types;
pub mod variation;
