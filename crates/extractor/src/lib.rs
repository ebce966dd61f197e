pub mod error;
pub mod extractors;
pub mod fingerprint;
pub mod kind;
pub mod report;
pub mod sink;
pub mod traits;

pub use error::{ExtractorError, Result};
pub use extractors::{ExtractionContext, ImageExtractor};
pub use fingerprint::{Admission, FingerprintRegistry};
pub use kind::ImageKind;
pub use report::{DEFAULT_PREVIEW_LIMIT, ExtractionReport, Summary};
pub use sink::DirectorySink;
pub use traits::BlobSink;
