use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{ExtractorError, Result, traits::BlobSink};

/// Writes blobs as plain files inside one output directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl BlobSink for DirectorySink {
    fn prepare(&mut self) -> Result<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| ExtractorError::io(&self.dir, e))
    }

    fn write(&mut self, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
        let path = self.dir.join(file_name);
        std::fs::write(&path, bytes).map_err(|e| ExtractorError::io(&path, e))?;
        debug!("Wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(path)
    }

    fn location(&self) -> &Path {
        &self.dir
    }
}
