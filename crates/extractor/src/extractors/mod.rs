pub mod context;
pub mod decode;
pub mod html;
pub mod pipeline;

pub use context::ExtractionContext;
pub use decode::{DecodeError, base64_to_bytes, payload_bytes};
pub use html::{DataUri, scan_data_uris};
pub use pipeline::{ImageExtractor, attachment_label, output_label};
