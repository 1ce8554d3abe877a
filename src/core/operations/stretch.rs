//! Password-based key stretching.
//!
//! Derives the per-application [`SiteKey`] from the master passphrase:
//! PBKDF2-HMAC-SHA-256 over the passphrase, salted with a deterministic
//! per-label salt. The salt is public — it exists only so that two labels
//! sharing one master passphrase cannot be attacked with one precomputed
//! table — and is itself a digest, so identical labels always produce
//! identical salts.
//!
//! The iteration count is a published parameter of the scheme, not a
//! secret. See [`StretchParams::standard`](crate::StretchParams::standard).

use tracing::instrument;

use crate::core::backend::CryptoBackend;
use crate::core::config::StretchParams;
use crate::core::error::KeyphraseResult;
use crate::core::types::SiteKey;

/// Domain-separation prefix for per-label salt derivation.
pub const SALT_DOMAIN: &str = "salt|";

/// Computes the deterministic per-label salt: `SHA256("salt|" + label)`.
#[must_use]
pub fn label_salt<B: CryptoBackend>(backend: &B, label: &str) -> [u8; 32] {
    let mut input = Vec::with_capacity(SALT_DOMAIN.len() + label.len());
    input.extend_from_slice(SALT_DOMAIN.as_bytes());
    input.extend_from_slice(label.as_bytes());
    backend.digest(&input)
}

/// Stretches the master passphrase into a [`SiteKey`].
///
/// An empty master passphrase is accepted here and produces a key; rejecting
/// it is the caller layer's job (the pipeline in
/// [`derive_passphrase`](crate::derive_passphrase) does so). The label is
/// consumed verbatim — see [`crate::core::label`] for the normalization
/// boundary.
///
/// # Errors
///
/// Returns [`KeyphraseError::InvalidParameter`](crate::KeyphraseError::InvalidParameter)
/// for a zero iteration count or output length, and
/// [`KeyphraseError::KeyDerivationFailed`](crate::KeyphraseError::KeyDerivationFailed)
/// if the backend rejects the operation.
#[instrument(
    level = "debug",
    skip(backend, master, label),
    fields(label_len = label.len(), iterations = params.iterations, output_length = params.output_length)
)]
pub fn stretch_site_key<B: CryptoBackend>(
    backend: &B,
    master: &str,
    label: &str,
    params: &StretchParams,
) -> KeyphraseResult<SiteKey> {
    params.validate()?;

    let salt = label_salt(backend, label);
    let mut key = vec![0u8; params.output_length];
    backend.stretch_key(master.as_bytes(), &salt, params.iterations, &mut key)?;

    Ok(SiteKey::new(key))
}
