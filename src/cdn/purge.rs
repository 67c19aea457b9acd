use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use url::Url;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PurgeError {
    #[error("No URLs to purge")]
    Empty,
    #[error("Batch size must be at least 1")]
    InvalidBatchSize,
    #[error("Not an absolute http(s) URL: {0}")]
    InvalidUrl(String),
}

/// Body of a Cloudflare `purge_cache` call.
///
/// Serializes to either `{"files": [...]}` or `{"purge_everything": true}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PurgeRequest {
    Files { files: Vec<String> },
    Everything { purge_everything: bool },
}

impl PurgeRequest {
    pub fn purge_everything() -> Self {
        PurgeRequest::Everything {
            purge_everything: true,
        }
    }

    /// Split `urls` into payloads of at most `batch_size` files each.
    ///
    /// Duplicates are dropped (first occurrence wins); order is kept.
    pub fn batches<I, S>(urls: I, batch_size: usize) -> Result<Vec<PurgeRequest>, PurgeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if batch_size == 0 {
            return Err(PurgeError::InvalidBatchSize);
        }

        let mut seen = BTreeSet::new();
        let mut files = Vec::new();
        for raw in urls {
            let raw = raw.as_ref();
            let parsed = Url::parse(raw).map_err(|_| PurgeError::InvalidUrl(raw.to_string()))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(PurgeError::InvalidUrl(raw.to_string()));
            }
            if seen.insert(raw.to_string()) {
                files.push(raw.to_string());
            }
        }

        if files.is_empty() {
            return Err(PurgeError::Empty);
        }

        let requests: Vec<PurgeRequest> = files
            .chunks(batch_size)
            .map(|chunk| PurgeRequest::Files {
                files: chunk.to_vec(),
            })
            .collect();

        debug!(urls = files.len(), batches = requests.len(), "purge batches prepared");
        Ok(requests)
    }

    pub fn files(&self) -> &[String] {
        match self {
            PurgeRequest::Files { files } => files,
            PurgeRequest::Everything { .. } => &[],
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
