use std::path::PathBuf;

use tracing::debug;

use crate::{
    Admission, ExtractorError, FingerprintRegistry, Result, report::ExtractionReport,
    traits::BlobSink,
};

/// Per-run state: the fingerprint registry, the saved-file list and the sink
/// they are written through. Created at the start of a run and consumed into
/// a report at the end.
pub struct ExtractionContext<'a, S: BlobSink + ?Sized> {
    sink: &'a mut S,
    registry: FingerprintRegistry,
    saved: Vec<PathBuf>,
    duplicates: usize,
}

impl<'a, S: BlobSink + ?Sized> ExtractionContext<'a, S> {
    pub fn new(sink: &'a mut S) -> Self {
        Self {
            sink,
            registry: FingerprintRegistry::new(),
            saved: Vec::new(),
            duplicates: 0,
        }
    }

    /// Writes `blob` as `<label>_<fingerprint>.<extension>` unless identical
    /// bytes were already saved during this run.
    pub fn save(&mut self, blob: &[u8], extension: &str, label: &str) -> Result<Option<PathBuf>> {
        let fingerprint = match self.registry.admit(blob) {
            Admission::New(fingerprint) => fingerprint,
            Admission::Duplicate(fingerprint) => {
                debug!("Skipping {}.{}: duplicate of {}", label, extension, fingerprint);
                self.duplicates += 1;
                return Ok(None);
            }
            Admission::Collision(fingerprint) => {
                return Err(ExtractorError::FingerprintCollision {
                    fingerprint,
                    label: label.to_string(),
                });
            }
        };

        let file_name = format!("{}_{}.{}", label, fingerprint, extension);
        let path = self.sink.write(&file_name, blob)?;
        self.saved.push(path.clone());
        Ok(Some(path))
    }

    pub fn into_report(self) -> ExtractionReport {
        ExtractionReport::new(
            self.sink.location().to_path_buf(),
            self.saved,
            self.duplicates,
        )
    }
}
