use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use super::config::SiteConfig;
use super::page::GeneratedPage;
use super::SiteError;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ManifestPageEntry {
    pub path: String,
    pub content_hash: String,
}

/// Summary of one site build.
///
/// `site_version` depends only on the config and page contents, so two
/// builds of identical input agree on it whatever their `created_at`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SiteManifest {
    pub site_version: String,
    pub build_config: SiteConfig,
    pub created_at: DateTime<Utc>, // informational only
    pub page_count: usize,
    pub pages: Vec<ManifestPageEntry>,
}

impl SiteManifest {
    pub fn from_pages(config: &SiteConfig, pages: &[GeneratedPage]) -> Result<Self, SiteError> {
        let mut entries: Vec<ManifestPageEntry> = pages
            .iter()
            .map(|p| ManifestPageEntry {
                path: p.path.clone(),
                content_hash: p.content_hash.clone(),
            })
            .collect();
        entries.sort_by(|a, b| a.path.cmp(&b.path));

        for pair in entries.windows(2) {
            if pair[0].path == pair[1].path {
                return Err(SiteError::DuplicatePath(pair[0].path.clone()));
            }
        }

        let mut version_hasher = Sha256::new();
        version_hasher.update(serde_json::to_vec(config)?);
        for entry in &entries {
            let line = format!("{}:{}", entry.path, entry.content_hash);
            version_hasher.update(line.as_bytes());
        }
        let site_version = format!("sha256:{}", hex::encode(version_hasher.finalize()));

        Ok(Self {
            site_version,
            build_config: config.clone(),
            created_at: Utc::now(),
            page_count: entries.len(),
            pages: entries,
        })
    }

    /// Paths whose content differs from `previous`, plus paths that are new.
    ///
    /// These are the URLs a CDN needs to drop after deploying this build.
    /// `previous` may come from a stored file in any page order.
    pub fn changed_since(&self, previous: &SiteManifest) -> Vec<&str> {
        let before: BTreeMap<&str, &str> = previous
            .pages
            .iter()
            .map(|p| (p.path.as_str(), p.content_hash.as_str()))
            .collect();

        self.pages
            .iter()
            .filter(|entry| before.get(entry.path.as_str()) != Some(&entry.content_hash.as_str()))
            .map(|entry| entry.path.as_str())
            .collect()
    }
}
