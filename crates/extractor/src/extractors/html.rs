use lazy_static::lazy_static;
use regex::Regex;

use crate::ImageKind;

lazy_static! {
    static ref DATA_URI_RE: Regex = Regex::new(
        r"data:(?P<mime>image/(?:png|jpeg|jpg|gif|svg\+xml));base64,(?P<b64>[A-Za-z0-9+/=]+)"
    )
    .expect("data URI pattern is valid");
}

/// Extension for data URI types outside the recognized MIME types, such as
/// the non-standard `image/jpg`.
pub const FALLBACK_EXTENSION: &str = "bin";

/// An inline `data:image/...;base64,...` reference found in HTML.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataUri<'a> {
    pub mime: &'a str,
    pub payload: &'a str,
}

impl DataUri<'_> {
    pub fn kind(&self) -> Option<ImageKind> {
        ImageKind::from_mime(self.mime)
    }

    pub fn extension(&self) -> &'static str {
        self.kind().map_or(FALLBACK_EXTENSION, ImageKind::extension)
    }
}

/// Yields every image data URI in `html`, left to right. The payload is
/// always base64, SVG included.
pub fn scan_data_uris(html: &str) -> impl Iterator<Item = DataUri<'_>> {
    DATA_URI_RE.captures_iter(html).filter_map(|caps| {
        let mime = caps.name("mime")?.as_str();
        let payload = caps.name("b64")?.as_str();
        Some(DataUri { mime, payload })
    })
}
