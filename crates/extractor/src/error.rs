use std::path::PathBuf;

use notebook::NotebookError;
use thiserror::Error;

use crate::extractors::decode::DecodeError;

pub type Result<T> = std::result::Result<T, ExtractorError>;

#[derive(Error, Debug)]
pub enum ExtractorError {
    #[error(transparent)]
    Notebook(#[from] NotebookError),

    #[error("Failed to decode {mime} payload in {label}: {source}")]
    Decode {
        label: String,
        mime: String,
        #[source]
        source: DecodeError,
    },

    #[error(
        "Fingerprint collision on {fingerprint}: {label} differs from an earlier blob with the same prefix"
    )]
    FingerprintCollision { fingerprint: String, label: String },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExtractorError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, ExtractorError::Decode { .. })
    }
}
