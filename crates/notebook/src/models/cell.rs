use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::MimeBundle;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cell {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<Output>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<IndexMap<String, MimeBundle>>,
}

impl Cell {
    /// Execution outputs in document order. Absent and `null` both read as empty.
    pub fn outputs(&self) -> &[Output] {
        self.outputs.as_deref().unwrap_or(&[])
    }

    /// Named attachments in the order they appear in the source file.
    pub fn attachments(&self) -> impl Iterator<Item = (&str, &MimeBundle)> {
        self.attachments
            .iter()
            .flatten()
            .map(|(name, bundle)| (name.as_str(), bundle))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Output {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<MimeBundle>,
}

impl Output {
    pub fn data(&self) -> Option<&MimeBundle> {
        self.data.as_ref()
    }
}
