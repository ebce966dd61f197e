use base64::{
    Engine, alphabet,
    engine::{GeneralPurpose, GeneralPurposeConfig},
};
use notebook::{NotebookError, join_text};
use serde_json::Value;
use thiserror::Error;

use crate::ImageKind;

// Tolerates non-zero trailing bits, which some notebook writers leave behind.
const BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error(transparent)]
    Shape(#[from] NotebookError),

    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Turns a MIME bundle payload into raw bytes.
///
/// SVG payloads are markup and are encoded as-is; every other kind is base64.
pub fn payload_bytes(kind: ImageKind, value: &Value) -> Result<Vec<u8>, DecodeError> {
    let text = join_text(kind.mime(), value)?;
    if kind.is_text() {
        Ok(text.into_owned().into_bytes())
    } else {
        base64_to_bytes(&text)
    }
}

/// Decodes base64 after dropping every whitespace character.
pub fn base64_to_bytes(text: &str) -> Result<Vec<u8>, DecodeError> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    Ok(BASE64.decode(compact)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_base64_single_string() {
        let bytes = payload_bytes(ImageKind::Png, &json!("QUFB")).unwrap();
        assert_eq!(bytes, b"AAA");
    }

    #[test]
    fn test_base64_fragments_with_newlines() {
        let bytes = payload_bytes(ImageKind::Gif, &json!(["QUFB\n", "QkJC\n"])).unwrap();
        assert_eq!(bytes, b"AAABBB");

        let bytes = base64_to_bytes(" QU\tFB\r\nQkJC ").unwrap();
        assert_eq!(bytes, b"AAABBB");
    }

    #[test]
    fn test_svg_is_text_verbatim() {
        let value = json!(["<svg>\n", " <g/> ", "</svg>\n"]);
        let bytes = payload_bytes(ImageKind::Svg, &value).unwrap();
        assert_eq!(bytes, b"<svg>\n <g/> </svg>\n");
    }

    #[test]
    fn test_malformed_base64() {
        let err = payload_bytes(ImageKind::Png, &json!("not base64!")).unwrap_err();
        assert!(matches!(err, DecodeError::Base64(_)));

        let err = payload_bytes(ImageKind::Jpeg, &json!("QUF")).unwrap_err();
        assert!(matches!(err, DecodeError::Base64(_)));
    }

    #[test]
    fn test_stray_characters_are_not_dropped() {
        assert!(matches!(base64_to_bytes("QUFB!"), Err(DecodeError::Base64(_))));
        assert!(matches!(base64_to_bytes("QUFB===="), Err(DecodeError::Base64(_))));
        assert_eq!(base64_to_bytes("QU\nFB").unwrap(), b"AAA");
    }

    #[test]
    fn test_non_text_payload() {
        let err = payload_bytes(ImageKind::Png, &json!({"b64": "QUFB"})).unwrap_err();
        assert!(matches!(err, DecodeError::Shape(_)));

        let err = payload_bytes(ImageKind::Svg, &json!(7)).unwrap_err();
        assert!(matches!(err, DecodeError::Shape(_)));
    }
}
