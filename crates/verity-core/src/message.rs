//! User supplied check messages: fixed text or a positional template.

use serde::{Deserialize, Serialize};

use crate::errors::{CheckError, SignalInfo};

/// Message attached to a check, covering the bare / fixed / template call
/// shapes: `None` for bare, [`Message::Text`] for fixed, and
/// [`Message::Template`] for template plus positional arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    /// Fixed message used verbatim.
    Text(String),
    /// Template with `{0}`-style positional placeholders.
    Template {
        /// Template text; `{{` and `}}` escape literal braces.
        template: String,
        /// Pre-rendered positional arguments substituted into the template.
        args: Vec<String>,
    },
}

impl Message {
    /// Creates a fixed message.
    pub fn text(text: impl Into<String>) -> Self {
        Message::Text(text.into())
    }

    /// Creates a template message with positional arguments.
    pub fn template<I, S>(template: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Message::Template {
            template: template.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Renders the message to its final text.
    ///
    /// Templates are not pre-validated; an unclosed placeholder, a
    /// non-numeric index, or an index with no matching argument surfaces as
    /// [`CheckError::InvalidArgument`] at render time.
    pub fn render(&self) -> Result<String, CheckError> {
        match self {
            Message::Text(text) => Ok(text.clone()),
            Message::Template { template, args } => render_template(template, args),
        }
    }
}

fn render_template(template: &str, args: &[String]) -> Result<String, CheckError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '{' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    out.push('{');
                    continue;
                }
                let mut index_text = String::new();
                let mut closed = false;
                for inner in chars.by_ref() {
                    if inner == '}' {
                        closed = true;
                        break;
                    }
                    index_text.push(inner);
                }
                if !closed {
                    return Err(template_error(template, "unclosed placeholder"));
                }
                let index: usize = index_text
                    .parse()
                    .map_err(|_| template_error(template, "placeholder index is not numeric"))?;
                let arg = args.get(index).ok_or_else(|| {
                    template_error(template, format!("no argument for placeholder {{{index}}}"))
                })?;
                out.push_str(arg);
            }
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                    out.push('}');
                } else {
                    return Err(template_error(template, "stray closing brace"));
                }
            }
            other => out.push(other),
        }
    }
    Ok(out)
}

fn template_error(template: &str, reason: impl Into<String>) -> CheckError {
    CheckError::InvalidArgument(
        SignalInfo::new(format!("malformed message template: {}", reason.into()))
            .with_actual(template.to_string()),
    )
}
