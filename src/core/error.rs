//! Error types for passphrase derivation.
//!
//! This module provides a unified error type for all derivation operations.
//! Primitive-failure messages are intentionally vague to avoid leaking
//! information about the inputs being derived from.

use thiserror::Error;

/// Errors that can occur while deriving a passphrase.
#[derive(Debug, Error)]
pub enum KeyphraseError {
    /// The master passphrase is empty.
    ///
    /// Only the top-level pipeline rejects this; the low-level stretcher
    /// accepts an empty secret and derives a key from it.
    #[error("Master passphrase is empty")]
    EmptyPassphrase,

    /// The application label is empty.
    #[error("Application label is empty")]
    EmptyLabel,

    /// A configuration value is out of range (zero iteration count, zero
    /// output length, degenerate sampling range, ...). Never clamped.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Password-based key stretching failed in the cryptographic backend.
    /// Intentionally vague.
    #[error("Key derivation failed")]
    KeyDerivationFailed,

    /// Generic cryptographic backend failure.
    /// Intentionally vague.
    #[error("Cryptographic operation failed")]
    CryptoError,
}

/// Result type alias for derivation operations.
pub type KeyphraseResult<T> = Result<T, KeyphraseError>;
