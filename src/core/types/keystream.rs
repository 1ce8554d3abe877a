//! `Keystream` - purpose-scoped expansion output.
//!
//! A keystream is the output of one purpose-scoped expansion of a site key.
//! It is consumed either by a word encoder (passphrase body) or by the
//! deterministic sampler (digit tail), then discarded.

use core::fmt::{self, Debug};

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Purpose-scoped keystream bytes.
///
/// # Security
///
/// - Zeroized on drop
/// - Debug output redacts the bytes
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Keystream {
    bytes: Vec<u8>,
}

impl Keystream {
    /// Creates a new `Keystream` from raw bytes.
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Returns a reference to the raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the keystream length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the keystream is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<Vec<u8>> for Keystream {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl AsRef<[u8]> for Keystream {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl Debug for Keystream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keystream")
            .field("len", &self.bytes.len())
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_bytes_roundtrip() {
        let stream = Keystream::new(vec![0xda, 0xdf, 0x4b]);
        assert_eq!(stream.as_bytes(), &[0xda, 0xdf, 0x4b]);
        assert_eq!(stream.len(), 3);
    }

    #[test]
    fn test_debug_redacts() {
        let stream = Keystream::new(vec![0xab; 10]);
        let debug_str = format!("{stream:?}");
        assert!(debug_str.contains("[REDACTED]"));
        assert!(!debug_str.contains("ab"));
    }
}
