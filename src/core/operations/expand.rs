//! Purpose-scoped key expansion.
//!
//! Expands a [`SiteKey`] into an arbitrary-length [`Keystream`] for one
//! purpose, via HKDF-SHA-256 (RFC 5869). The extraction salt is the
//! deterministic per-label digest `SHA256("hkdf|" + label)`; the purpose
//! string is the HKDF info parameter, so keystreams expanded for different
//! purposes from the same site key are computationally independent.
//!
//! Each derivation invokes this once per purpose: once for the passphrase
//! body and once for the digit tail.

use tracing::instrument;

use crate::core::backend::CryptoBackend;
use crate::core::config::ExpandParams;
use crate::core::error::{KeyphraseError, KeyphraseResult};
use crate::core::types::{Keystream, SiteKey};

/// Domain-separation prefix for the HKDF extraction salt.
pub const HKDF_DOMAIN: &str = "hkdf|";

/// Maximum HKDF-SHA-256 output length per RFC 5869 (255 * 32 bytes).
pub const MAX_EXPAND_LENGTH: usize = 255 * 32;

/// Computes the deterministic HKDF salt: `SHA256("hkdf|" + label)`.
#[must_use]
pub fn expansion_salt<B: CryptoBackend>(backend: &B, label: &str) -> [u8; 32] {
    let mut input = Vec::with_capacity(HKDF_DOMAIN.len() + label.len());
    input.extend_from_slice(HKDF_DOMAIN.as_bytes());
    input.extend_from_slice(label.as_bytes());
    backend.digest(&input)
}

/// Expands a site key into a purpose-scoped keystream.
///
/// # Errors
///
/// Returns [`KeyphraseError::InvalidParameter`] for a zero or over-maximum
/// output length, and [`KeyphraseError::CryptoError`] if the backend rejects
/// the operation.
#[instrument(
    level = "debug",
    skip(backend, site_key, label),
    fields(label_len = label.len(), purpose = %params.purpose, length = params.length)
)]
pub fn expand_keystream<B: CryptoBackend>(
    backend: &B,
    site_key: &SiteKey,
    label: &str,
    params: &ExpandParams,
) -> KeyphraseResult<Keystream> {
    params.validate()?;
    if params.length > MAX_EXPAND_LENGTH {
        return Err(KeyphraseError::InvalidParameter(format!(
            "expansion length {} exceeds the HKDF-SHA-256 maximum of {}",
            params.length, MAX_EXPAND_LENGTH
        )));
    }

    let salt = expansion_salt(backend, label);
    let mut bytes = vec![0u8; params.length];
    backend.expand_key(
        site_key.as_bytes(),
        &salt,
        params.purpose.as_bytes(),
        &mut bytes,
    )?;

    Ok(Keystream::new(bytes))
}
