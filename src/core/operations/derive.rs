//! The full derivation pipeline.
//!
//! stretch → expand (body purpose) → expand (tail purpose) → word-encode →
//! append digit tail. A pure function of `(master, label, config)`: for
//! fixed inputs the output is byte-identical across runs, platforms and
//! conforming implementations. Nothing is cached, stored, or shared between
//! calls, so concurrent derivations on separate inputs need no coordination.

use tracing::instrument;

use crate::core::backend::{CryptoBackend, RustCryptoBackend};
use crate::core::config::DeriveConfig;
use crate::core::encoder::{Proquint, WordEncoder};
use crate::core::error::{KeyphraseError, KeyphraseResult};
use crate::core::operations::expand::expand_keystream;
use crate::core::operations::stretch::stretch_site_key;
use crate::core::operations::tail::append_tail;

/// Derives a passphrase with the default backend and word encoder.
///
/// This is the pipeline's caller layer: unlike the low-level operations it
/// rejects empty inputs up front, mirroring a UI that shows a placeholder
/// until both fields are present.
///
/// # Example
///
/// ```rust
/// use keyphrase::{derive_passphrase, DeriveConfig, StretchParams};
///
/// // A fast test profile; the published default is 3,000,000 iterations.
/// let config = DeriveConfig {
///     stretch: StretchParams { iterations: 1000, output_length: 32 },
///     ..DeriveConfig::default()
/// };
///
/// let passphrase = derive_passphrase("correct horse battery staple", "example", &config)?;
/// assert_eq!(passphrase, "toriz-hotos-zorum-holuk-8616");
/// # Ok::<(), keyphrase::KeyphraseError>(())
/// ```
///
/// # Errors
///
/// Returns [`KeyphraseError::EmptyPassphrase`] / [`KeyphraseError::EmptyLabel`]
/// for missing inputs, [`KeyphraseError::InvalidParameter`] for out-of-range
/// configuration, and a primitive-failure variant if the backend fails.
pub fn derive_passphrase(
    master: &str,
    label: &str,
    config: &DeriveConfig,
) -> KeyphraseResult<String> {
    derive_passphrase_with(&RustCryptoBackend, &Proquint, master, label, config)
}

/// Derives a passphrase with an explicit backend and word encoder.
///
/// The label is consumed verbatim; callers accepting free-form input should
/// normalize it first (see [`normalize_label`](crate::normalize_label)).
///
/// # Errors
///
/// As [`derive_passphrase`].
#[instrument(
    level = "debug",
    skip_all,
    fields(label_len = label.len(), iterations = config.stretch.iterations)
)]
pub fn derive_passphrase_with<B: CryptoBackend, W: WordEncoder>(
    backend: &B,
    encoder: &W,
    master: &str,
    label: &str,
    config: &DeriveConfig,
) -> KeyphraseResult<String> {
    if master.is_empty() {
        return Err(KeyphraseError::EmptyPassphrase);
    }
    if label.is_empty() {
        return Err(KeyphraseError::EmptyLabel);
    }
    config.validate()?;

    let site_key = stretch_site_key(backend, master, label, &config.stretch)?;
    let body_stream = expand_keystream(backend, &site_key, label, &config.body)?;
    let tail_stream = expand_keystream(backend, &site_key, label, &config.tail)?;

    let body = encoder.encode(body_stream.as_bytes());
    append_tail(&body, tail_stream.as_bytes(), config.digits, &config.separator)
}
