use std::collections::HashMap;

use sha1::{Digest, Sha1};

/// Number of hex characters of the SHA-1 digest kept as the fingerprint.
pub const FINGERPRINT_LEN: usize = 10;

/// Full SHA-1 digest of `bytes` as lowercase hex.
pub fn sha1_hex(bytes: &[u8]) -> String {
    hex::encode(Sha1::digest(bytes))
}

#[cfg(test)]
pub(crate) fn fingerprint(bytes: &[u8]) -> String {
    let mut digest = sha1_hex(bytes);
    digest.truncate(FINGERPRINT_LEN);
    digest
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    /// First time this content is seen in the run.
    New(String),
    /// Identical content was already admitted.
    Duplicate(String),
    /// Different content already owns this fingerprint.
    Collision(String),
}

/// Fingerprints seen during one extraction run.
///
/// Each fingerprint remembers the full digest it was truncated from, so two
/// different blobs that happen to share the short prefix are told apart from
/// a genuine duplicate.
#[derive(Debug, Default)]
pub struct FingerprintRegistry {
    seen: HashMap<String, String>,
}

impl FingerprintRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn admit(&mut self, bytes: &[u8]) -> Admission {
        let digest = sha1_hex(bytes);
        let short = digest[..FINGERPRINT_LEN].to_string();

        match self.seen.get(&short) {
            Some(existing) if *existing == digest => Admission::Duplicate(short),
            Some(_) => Admission::Collision(short),
            None => {
                self.seen.insert(short.clone(), digest);
                Admission::New(short)
            }
        }
    }

    /// Claims `fingerprint` for a digest without writing anything.
    #[cfg(test)]
    pub(crate) fn seed(&mut self, fingerprint: &str, digest: &str) {
        self.seen.insert(fingerprint.to_string(), digest.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_is_sha1_prefix() {
        // sha1("AAA") = 606ec6e9bd8a8ff2ad14e5fade3f264471e82251
        assert_eq!(fingerprint(b"AAA"), "606ec6e9bd");
        assert_eq!(fingerprint(b"AAA").len(), FINGERPRINT_LEN);
    }

    #[test]
    fn test_admit_dedups() {
        let mut registry = FingerprintRegistry::new();

        let first = registry.admit(b"AAA");
        assert_eq!(first, Admission::New(fingerprint(b"AAA")));
        assert_eq!(registry.admit(b"AAA"), Admission::Duplicate(fingerprint(b"AAA")));
        assert_eq!(registry.admit(b"BBB"), Admission::New(fingerprint(b"BBB")));
        assert_eq!(registry.admit(b"BBB"), Admission::Duplicate(fingerprint(b"BBB")));
    }

    #[test]
    fn test_admit_detects_collision() {
        let mut registry = FingerprintRegistry::new();
        let short = fingerprint(b"AAA");
        registry.seed(&short, &"0".repeat(40));

        assert_eq!(registry.admit(b"AAA"), Admission::Collision(short));
    }

    #[test]
    fn test_registries_are_independent() {
        let mut first = FingerprintRegistry::new();
        let mut second = FingerprintRegistry::new();
        first.admit(b"AAA");

        assert!(matches!(second.admit(b"AAA"), Admission::New(_)));
    }
}
