use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Unknown placeholder {{{0}}}")]
    UnknownPlaceholder(String),
    #[error("Unclosed placeholder starting at byte {0}")]
    Unclosed(usize),
}

/// Values available to section templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateContext {
    pub city: String,
    pub state: String,
    pub state_code: String,
    pub country: String,
    pub category: String,
}

impl TemplateContext {
    fn lookup(&self, name: &str) -> Option<&str> {
        match name {
            "city" => Some(&self.city),
            "state" => Some(&self.state),
            "state_code" => Some(&self.state_code),
            "country" => Some(&self.country),
            "category" => Some(&self.category),
            _ => None,
        }
    }
}

/// Substitute `{name}` placeholders. `{{` and `}}` produce literal braces.
pub fn render_template(template: &str, ctx: &TemplateContext) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        match c {
            '{' => {
                if matches!(chars.peek(), Some((_, '{'))) {
                    chars.next();
                    out.push('{');
                    continue;
                }
                let mut name = String::new();
                let mut closed = false;
                for (_, n) in chars.by_ref() {
                    if n == '}' {
                        closed = true;
                        break;
                    }
                    name.push(n);
                }
                if !closed {
                    return Err(TemplateError::Unclosed(pos));
                }
                let value = ctx
                    .lookup(name.trim())
                    .ok_or(TemplateError::UnknownPlaceholder(name))?;
                out.push_str(value);
            }
            '}' => {
                if matches!(chars.peek(), Some((_, '}'))) {
                    chars.next();
                }
                out.push('}');
            }
            _ => out.push(c),
        }
    }

    Ok(out)
}
