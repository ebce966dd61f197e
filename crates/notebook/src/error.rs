use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotebookError {
    #[error("Notebook not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse notebook JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(
        "Unsupported notebook format v{major}. Convert it first with: \
         jupyter nbconvert --to notebook --nbformat 4 <notebook>"
    )]
    UnsupportedFormat { major: u32 },

    #[error("Invalid {mime} payload: {reason}")]
    Payload { mime: String, reason: String },
}

pub type Result<T> = std::result::Result<T, NotebookError>;

impl NotebookError {
    pub fn is_missing_input(&self) -> bool {
        matches!(self, NotebookError::MissingInput(_))
    }

    pub fn is_payload(&self) -> bool {
        matches!(self, NotebookError::Payload { .. })
    }
}
