//! Cryptographic backend capability interface.
//!
//! The derivation logic never calls a cryptographic library directly; it
//! goes through [`CryptoBackend`], a small capability trait exposing the
//! three primitives the pipeline needs. This keeps the derivation logic
//! independent of the concrete library backing it, so an audited
//! platform-specific implementation can be substituted without touching the
//! pipeline.
//!
//! A backend must never substitute a weaker primitive on failure: the
//! pipeline's whole contract is reproducibility, and a silent fallback would
//! silently change every derived passphrase. Backends report failure through
//! the error channel instead.

use crate::core::error::{KeyphraseError, KeyphraseResult};

/// Capability interface over the platform's cryptographic subsystem.
///
/// All three operations are deterministic pure functions of their inputs.
pub trait CryptoBackend {
    /// SHA-256 digest of `data`.
    fn digest(&self, data: &[u8]) -> [u8; 32];

    /// Password-based key stretching: PBKDF2-HMAC-SHA-256 over `secret`
    /// with `salt` for `iterations` rounds, filling `output`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyphraseError::KeyDerivationFailed`] if the backend
    /// rejects the operation.
    fn stretch_key(
        &self,
        secret: &[u8],
        salt: &[u8],
        iterations: u32,
        output: &mut [u8],
    ) -> KeyphraseResult<()>;

    /// Extract-and-expand key derivation: HKDF-SHA-256 with `ikm` as input
    /// keying material, `salt` as extraction salt, and `info` as the
    /// context-separation string, filling `output`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyphraseError::CryptoError`] if the backend rejects the
    /// operation (e.g. the requested length exceeds the RFC 5869 maximum of
    /// 255 * 32 bytes for SHA-256).
    fn expand_key(
        &self,
        ikm: &[u8],
        salt: &[u8],
        info: &[u8],
        output: &mut [u8],
    ) -> KeyphraseResult<()>;
}

/// Default backend over the RustCrypto crates (`sha2`, `pbkdf2`, `hkdf`).
#[derive(Debug, Default, Clone, Copy)]
pub struct RustCryptoBackend;

impl CryptoBackend for RustCryptoBackend {
    fn digest(&self, data: &[u8]) -> [u8; 32] {
        use sha2::{Digest, Sha256};

        Sha256::digest(data).into()
    }

    fn stretch_key(
        &self,
        secret: &[u8],
        salt: &[u8],
        iterations: u32,
        output: &mut [u8],
    ) -> KeyphraseResult<()> {
        use hmac::Hmac;
        use sha2::Sha256;

        pbkdf2::pbkdf2::<Hmac<Sha256>>(secret, salt, iterations, output)
            .map_err(|_| KeyphraseError::KeyDerivationFailed)
    }

    fn expand_key(
        &self,
        ikm: &[u8],
        salt: &[u8],
        info: &[u8],
        output: &mut [u8],
    ) -> KeyphraseResult<()> {
        use hkdf::Hkdf;
        use sha2::Sha256;

        let hk = Hkdf::<Sha256>::new(Some(salt), ikm);
        hk.expand(info, output)
            .map_err(|_| KeyphraseError::CryptoError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_known_answer() {
        // SHA-256 of the empty string.
        let backend = RustCryptoBackend;
        let digest = backend.digest(b"");
        assert_eq!(
            hex::encode(digest),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_digest_deterministic() {
        let backend = RustCryptoBackend;
        assert_eq!(backend.digest(b"salt|example"), backend.digest(b"salt|example"));
        assert_ne!(backend.digest(b"salt|example"), backend.digest(b"hkdf|example"));
    }

    #[test]
    fn test_stretch_accepts_empty_secret() -> KeyphraseResult<()> {
        let backend = RustCryptoBackend;
        let mut out = [0u8; 32];
        backend.stretch_key(b"", b"some salt", 10, &mut out)?;
        assert_ne!(out, [0u8; 32]);
        Ok(())
    }

    #[test]
    fn test_expand_rejects_oversized_output() {
        // RFC 5869 caps HKDF-SHA-256 output at 255 * 32 bytes.
        let backend = RustCryptoBackend;
        let mut out = vec![0u8; 255 * 32 + 1];
        let result = backend.expand_key(b"ikm", b"salt", b"info", &mut out);
        assert!(matches!(result, Err(KeyphraseError::CryptoError)));
    }

    #[test]
    fn test_expand_prefix_property() -> KeyphraseResult<()> {
        // HKDF output for a shorter length is a prefix of the longer one.
        let backend = RustCryptoBackend;
        let mut short = [0u8; 8];
        let mut long = [0u8; 16];
        backend.expand_key(b"ikm", b"salt", b"info", &mut short)?;
        backend.expand_key(b"ikm", b"salt", b"info", &mut long)?;
        assert_eq!(short, long[..8]);
        Ok(())
    }

    #[test]
    fn test_expand_info_separates() -> KeyphraseResult<()> {
        let backend = RustCryptoBackend;
        let mut a = [0u8; 16];
        let mut b = [0u8; 16];
        backend.expand_key(b"ikm", b"salt", b"password", &mut a)?;
        backend.expand_key(b"ikm", b"salt", b"compliance", &mut b)?;
        assert_ne!(a, b);
        Ok(())
    }
}
