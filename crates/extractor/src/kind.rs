use std::fmt;

/// Image encodings the extractor knows how to save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageKind {
    Png,
    Jpeg,
    Svg,
    Gif,
}

impl ImageKind {
    /// Probe order used for every MIME bundle.
    pub const ALL: [ImageKind; 4] = [
        ImageKind::Png,
        ImageKind::Jpeg,
        ImageKind::Svg,
        ImageKind::Gif,
    ];

    pub fn mime(self) -> &'static str {
        match self {
            ImageKind::Png => "image/png",
            ImageKind::Jpeg => "image/jpeg",
            ImageKind::Svg => "image/svg+xml",
            ImageKind::Gif => "image/gif",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ImageKind::Png => "png",
            ImageKind::Jpeg => "jpg",
            ImageKind::Svg => "svg",
            ImageKind::Gif => "gif",
        }
    }

    /// SVG is stored in bundles as markup, everything else as base64.
    pub fn is_text(self) -> bool {
        matches!(self, ImageKind::Svg)
    }

    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "image/png" => Some(ImageKind::Png),
            "image/jpeg" => Some(ImageKind::Jpeg),
            "image/svg+xml" => Some(ImageKind::Svg),
            "image/gif" => Some(ImageKind::Gif),
            _ => None,
        }
    }
}

impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime())
    }
}
