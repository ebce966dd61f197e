use std::path::Path;

use tracing::{debug, info};

use crate::{Document, NotebookError, Result};

/// The only nbformat major version the document model understands.
pub const SUPPORTED_MAJOR_VERSION: u32 = 4;

pub struct NotebookReader;

impl NotebookReader {
    /// Loads a notebook and checks that its format can be handled.
    pub fn read(path: &Path) -> Result<Document> {
        let document = Self::load(path)?;
        Self::probe(&document)?;
        Ok(document)
    }

    pub fn load(path: &Path) -> Result<Document> {
        if !path.exists() {
            return Err(NotebookError::MissingInput(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        debug!("Read notebook file: {} ({} bytes)", path.display(), content.len());

        let document = Document::from_json_str(&content)?;
        info!(
            "Loaded notebook {} ({} cells, nbformat {})",
            path.display(),
            document.cell_count(),
            document
                .nbformat
                .map_or_else(|| "unspecified".to_string(), |v| v.to_string())
        );
        Ok(document)
    }

    /// Fails fast when the document declares a format this model cannot read.
    /// A missing version is accepted as the current one.
    pub fn probe(document: &Document) -> Result<()> {
        match document.nbformat {
            None => Ok(()),
            Some(SUPPORTED_MAJOR_VERSION) => Ok(()),
            Some(major) => Err(NotebookError::UnsupportedFormat { major }),
        }
    }
}
