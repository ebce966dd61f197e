use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{NotebookError, Result};

/// A MIME type to payload mapping, the shape shared by output `data` and
/// cell attachments.
///
/// Payloads are kept as raw JSON values: text payloads may be stored either as a
/// single string or as a list of line fragments, and the bundle does not decide
/// which one a caller needs until [`MimeBundle::text`] is asked for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MimeBundle(Map<String, Value>);

impl MimeBundle {
    pub fn get(&self, mime: &str) -> Option<&Value> {
        self.0.get(mime)
    }

    /// Returns the payload stored under `mime` joined into a single string,
    /// or `None` when the bundle has no such entry.
    pub fn text(&self, mime: &str) -> Result<Option<Cow<'_, str>>> {
        self.0
            .get(mime)
            .map(|value| join_text(mime, value))
            .transpose()
    }
}

impl FromIterator<(String, Value)> for MimeBundle {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Normalizes a text payload into one string.
///
/// Only two shapes are accepted: a string, or an array whose elements are all
/// strings (concatenated without separators). Anything else is rejected.
pub fn join_text<'a>(mime: &str, value: &'a Value) -> Result<Cow<'a, str>> {
    match value {
        Value::String(text) => Ok(Cow::Borrowed(text)),
        Value::Array(fragments) => {
            let mut joined = String::new();
            for (idx, fragment) in fragments.iter().enumerate() {
                let Value::String(fragment) = fragment else {
                    return Err(NotebookError::Payload {
                        mime: mime.to_string(),
                        reason: format!(
                            "fragment {} is {}, expected a string",
                            idx,
                            value_kind(fragment)
                        ),
                    });
                };
                joined.push_str(fragment);
            }
            Ok(Cow::Owned(joined))
        }
        other => Err(NotebookError::Payload {
            mime: mime.to_string(),
            reason: format!(
                "expected a string or a list of strings, found {}",
                value_kind(other)
            ),
        }),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
