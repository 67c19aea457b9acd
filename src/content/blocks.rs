use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("Heading level must be 1-6, got {0}")]
    InvalidHeadingLevel(u8),
    #[error("Refusing to render link target: {0}")]
    UnsafeHref(String),
}

/// One typed piece of page content.
///
/// Pages are sequences of blocks, never pre-built markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Heading { level: u8, text: String },
    Paragraph { text: String },
    List { items: Vec<String> },
    Faq { question: String, answer: String },
    CallToAction { label: String, href: String },
}

impl ContentBlock {
    pub fn to_html(&self) -> Result<String, ContentError> {
        let html = match self {
            ContentBlock::Heading { level, text } => {
                if !(1..=6).contains(level) {
                    return Err(ContentError::InvalidHeadingLevel(*level));
                }
                format!("<h{level}>{}</h{level}>", escape_html(text))
            }
            ContentBlock::Paragraph { text } => format!("<p>{}</p>", escape_html(text)),
            ContentBlock::List { items } => {
                let mut out = String::from("<ul>");
                for item in items {
                    out.push_str("<li>");
                    out.push_str(&escape_html(item));
                    out.push_str("</li>");
                }
                out.push_str("</ul>");
                out
            }
            ContentBlock::Faq { question, answer } => format!(
                "<details><summary>{}</summary><p>{}</p></details>",
                escape_html(question),
                escape_html(answer)
            ),
            ContentBlock::CallToAction { label, href } => {
                if !is_safe_href(href) {
                    return Err(ContentError::UnsafeHref(href.clone()));
                }
                format!(
                    "<a class=\"cta\" href=\"{}\">{}</a>",
                    escape_html(href),
                    escape_html(label)
                )
            }
        };
        Ok(html)
    }

    /// Visible text of the block, without markup.
    pub fn plain_text(&self) -> String {
        match self {
            ContentBlock::Heading { text, .. } | ContentBlock::Paragraph { text } => text.clone(),
            ContentBlock::List { items } => items.join(" "),
            ContentBlock::Faq { question, answer } => format!("{question} {answer}"),
            ContentBlock::CallToAction { label, .. } => label.clone(),
        }
    }
}

pub fn render_blocks(blocks: &[ContentBlock]) -> Result<String, ContentError> {
    let mut out = String::new();
    for block in blocks {
        out.push_str(&block.to_html()?);
        out.push('\n');
    }
    Ok(out)
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// Site-relative paths (but not protocol-relative `//host`) or https URLs.
fn is_safe_href(href: &str) -> bool {
    (href.starts_with('/') && !href.starts_with("//")) || href.starts_with("https://")
}
