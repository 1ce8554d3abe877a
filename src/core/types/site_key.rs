//! `SiteKey` - the stretched per-application secret.
//!
//! A site key is the output of the key stretcher: a fixed-length secret
//! derived from the master passphrase and the application label. It exists
//! only for the duration of one derivation call and is never persisted.

use core::fmt::{self, Debug};

use zeroize::{Zeroize, ZeroizeOnDrop};

/// The stretched per-application secret.
///
/// # Security
///
/// - Key material is zeroized on drop
/// - Debug output redacts the key
/// - Equality comparison uses constant-time comparison
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SiteKey {
    key: Vec<u8>,
}

impl SiteKey {
    /// Creates a new `SiteKey` from raw key bytes.
    #[must_use]
    pub fn new(key: Vec<u8>) -> Self {
        Self { key }
    }

    /// Returns a reference to the raw key bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.key
    }

    /// Returns the key length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.key.len()
    }

    /// Returns `true` if the key is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }
}

impl From<Vec<u8>> for SiteKey {
    fn from(key: Vec<u8>) -> Self {
        Self::new(key)
    }
}

impl AsRef<[u8]> for SiteKey {
    fn as_ref(&self) -> &[u8] {
        &self.key
    }
}

// =============================================================================
// Debug (security: don't expose key material)
// =============================================================================

impl Debug for SiteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SiteKey")
            .field("len", &self.key.len())
            .field("key", &"[REDACTED]")
            .finish()
    }
}

// =============================================================================
// PartialEq (constant-time)
// =============================================================================

impl PartialEq for SiteKey {
    fn eq(&self, other: &Self) -> bool {
        use subtle::ConstantTimeEq;
        self.key.ct_eq(&other.key).into()
    }
}

impl Eq for SiteKey {}
