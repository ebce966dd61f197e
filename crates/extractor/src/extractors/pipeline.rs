use notebook::{Cell, Document, MimeBundle};
use tracing::{debug, info};

use super::{
    context::ExtractionContext,
    decode::{base64_to_bytes, payload_bytes},
    html::scan_data_uris,
};
use crate::{ExtractorError, ImageKind, Result, report::ExtractionReport, traits::BlobSink};

const HTML_MIME: &str = "text/html";

/// Pulls embedded images out of a notebook's outputs and attachments and
/// writes each distinct blob once through a [`BlobSink`].
pub struct ImageExtractor<S> {
    sink: S,
}

impl<S: BlobSink> ImageExtractor<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    #[cfg(test)]
    fn sink(&self) -> &S {
        &self.sink
    }

    /// Walks cells in order: outputs first, then attachments. Every call is an
    /// independent run with its own fingerprint registry.
    pub fn extract(&mut self, document: &Document) -> Result<ExtractionReport> {
        info!("Starting image extraction ({} cells)", document.cell_count());
        self.sink.prepare()?;

        let mut ctx = ExtractionContext::new(&mut self.sink);
        for (cell_idx, cell) in document.indexed_cells() {
            extract_from_outputs(cell, cell_idx, &mut ctx)?;
            extract_from_attachments(cell, cell_idx, &mut ctx)?;
        }

        let report = ctx.into_report();
        info!(
            "Extraction complete: {} saved, {} duplicates skipped",
            report.count(),
            report.duplicates()
        );
        Ok(report)
    }
}

pub fn output_label(cell_idx: usize, out_idx: usize) -> String {
    format!("cell{:04}_out{:02}", cell_idx, out_idx)
}

pub fn attachment_label(cell_idx: usize, name: &str) -> String {
    let name: String = name
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("cell{:04}_att_{}", cell_idx, name)
}

fn extract_from_outputs<S: BlobSink + ?Sized>(
    cell: &Cell,
    cell_idx: usize,
    ctx: &mut ExtractionContext<'_, S>,
) -> Result<()> {
    for (out_idx, output) in cell.outputs().iter().enumerate() {
        let Some(data) = output.data() else {
            continue;
        };
        let label = output_label(cell_idx, out_idx);
        save_bundle(data, &label, ctx)?;

        let html = data
            .text(HTML_MIME)
            .map_err(|e| decode_error(&label, HTML_MIME, e.into()))?;
        if let Some(html) = html {
            let html_label = format!("{}_html", label);
            for uri in scan_data_uris(&html) {
                let blob = base64_to_bytes(uri.payload)
                    .map_err(|e| decode_error(&html_label, uri.mime, e))?;
                ctx.save(&blob, uri.extension(), &html_label)?;
            }
        }
    }
    Ok(())
}

fn extract_from_attachments<S: BlobSink + ?Sized>(
    cell: &Cell,
    cell_idx: usize,
    ctx: &mut ExtractionContext<'_, S>,
) -> Result<()> {
    for (name, bundle) in cell.attachments() {
        save_bundle(bundle, &attachment_label(cell_idx, name), ctx)?;
    }
    Ok(())
}

fn save_bundle<S: BlobSink + ?Sized>(
    bundle: &MimeBundle,
    label: &str,
    ctx: &mut ExtractionContext<'_, S>,
) -> Result<()> {
    for kind in ImageKind::ALL {
        let Some(payload) = bundle.get(kind.mime()) else {
            continue;
        };
        let blob = payload_bytes(kind, payload).map_err(|e| decode_error(label, kind.mime(), e))?;
        if let Some(path) = ctx.save(&blob, kind.extension(), label)? {
            debug!("Saved {} from {}", path.display(), label);
        }
    }
    Ok(())
}

fn decode_error(label: &str, mime: &str, source: super::DecodeError) -> ExtractorError {
    ExtractorError::Decode {
        label: label.to_string(),
        mime: mime.to_string(),
        source,
    }
}
