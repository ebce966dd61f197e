use std::path::{Path, PathBuf};

use crate::Result;

/// Destination for extracted blobs.
pub trait BlobSink {
    /// Makes the sink ready to accept writes. Must be idempotent.
    fn prepare(&mut self) -> Result<()>;

    /// Persists `bytes` under `file_name` and returns where it was written.
    fn write(&mut self, file_name: &str, bytes: &[u8]) -> Result<PathBuf>;

    fn location(&self) -> &Path;
}
