pub mod blocks;
pub mod messages;
pub mod template;

pub use blocks::{escape_html, render_blocks, ContentBlock, ContentError};
pub use messages::{LocaleMessages, MessageError};
pub use template::{render_template, TemplateContext, TemplateError};
