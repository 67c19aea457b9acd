use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::content::{render_blocks, ContentBlock, ContentError};
use crate::routing::{Breadcrumb, Route};
use crate::types::Locale;

/// Search engines cut meta descriptions at roughly this many characters.
pub const META_DESCRIPTION_MAX_CHARS: usize = 160;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NearbyLink {
    pub label: String,
    pub path: String,
}

/// A fully assembled landing page, ready for a template layer to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPage {
    pub route: Route,
    pub locale: Locale,
    pub path: String,
    pub url: String,
    pub title: String,
    pub meta_description: String,
    pub blocks: Vec<ContentBlock>,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub nearby: Vec<NearbyLink>,
    /// `sha256:` hash of the visible content; changes whenever the page would.
    pub content_hash: String,
}

impl GeneratedPage {
    /// Escaped HTML for the page body.
    pub fn body_html(&self) -> Result<String, ContentError> {
        render_blocks(&self.blocks)
    }
}

/// Hash the parts of a page that end up on screen.
pub fn content_hash(
    title: &str,
    meta_description: &str,
    blocks: &[ContentBlock],
    breadcrumbs: &[Breadcrumb],
    nearby: &[NearbyLink],
) -> Result<String, serde_json::Error> {
    let mut hasher = Sha256::new();
    hasher.update(title.as_bytes());
    hasher.update([0u8]);
    hasher.update(meta_description.as_bytes());
    hasher.update([0u8]);
    hasher.update(serde_json::to_vec(blocks)?);
    hasher.update(serde_json::to_vec(breadcrumbs)?);
    hasher.update(serde_json::to_vec(nearby)?);

    let hash = hasher.finalize();
    Ok(format!("sha256:{}", hex::encode(hash)))
}

/// Trim to at most `max_chars` characters, cutting at a word boundary
/// and appending an ellipsis when anything was removed.
pub fn truncate_description(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if max_chars == 0 {
        return String::new();
    }
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    // Leave room for the ellipsis.
    let budget = max_chars.saturating_sub(1);
    let cut: String = text.chars().take(budget).collect();
    let at_boundary = text.chars().nth(budget).map_or(true, char::is_whitespace);
    let trimmed = match cut.rfind(char::is_whitespace) {
        Some(idx) if idx > 0 && !at_boundary => &cut[..idx],
        _ => cut.as_str(),
    };
    format!("{}…", trimmed.trim_end_matches(|c: char| c.is_whitespace() || c == ',' || c == '.'))
}
