//! Derivation configuration.
//!
//! Every tunable of the scheme lives in one of the structs below, with its
//! default enumerated. The defaults are *published parameters*: two
//! implementations only reproduce each other's passphrases when every field
//! matches, so changing a default here is a breaking change to every derived
//! passphrase.

use crate::core::error::{KeyphraseError, KeyphraseResult};

/// Purpose label for the passphrase-body keystream.
pub const PURPOSE_PASSWORD: &str = "password";

/// Purpose label for the digit-tail keystream.
pub const PURPOSE_COMPLIANCE: &str = "compliance";

/// Default separator between the word body and the digit tail.
pub const DEFAULT_SEPARATOR: &str = "-";

/// Default number of tail digits.
pub const DEFAULT_DIGITS: usize = 4;

/// Key-stretching parameters (PBKDF2-HMAC-SHA-256).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StretchParams {
    /// Number of PBKDF2 iterations. Must be at least 1.
    pub iterations: u32,

    /// Site-key length in bytes. Must be nonzero.
    pub output_length: usize,
}

impl Default for StretchParams {
    fn default() -> Self {
        Self::standard()
    }
}

impl StretchParams {
    /// Interactive profile: the scheme's calibration floor.
    /// - Iterations: 150,000
    #[must_use]
    pub const fn interactive() -> Self {
        Self {
            iterations: 150_000,
            output_length: 32,
        }
    }

    /// Standard profile: the published parameterization of the scheme.
    /// - Iterations: 3,000,000
    ///
    /// Deliberately slow (hundreds of milliseconds on commodity hardware) to
    /// impose cost on exhaustive guessing. This is a correctness parameter,
    /// not a performance knob: every conforming implementation must use the
    /// same count or derived passphrases will not match.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            iterations: 3_000_000,
            output_length: 32,
        }
    }

    /// Validates the parameters, failing fast on out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns [`KeyphraseError::InvalidParameter`] if `iterations` is zero
    /// or `output_length` is zero.
    pub fn validate(&self) -> KeyphraseResult<()> {
        if self.iterations < 1 {
            return Err(KeyphraseError::InvalidParameter(
                "stretch iterations must be >= 1".to_string(),
            ));
        }
        if self.output_length == 0 {
            return Err(KeyphraseError::InvalidParameter(
                "stretch output length must be nonzero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parameters for one purpose-scoped key expansion.
///
/// The output length is a required, validated field. The reference this
/// scheme descends from could silently fall back to a default length when a
/// call site misspelled the option key; that behavior is not reproduced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandParams {
    /// Context-separation info string ("password", "compliance", ...).
    pub purpose: String,

    /// Keystream length in bytes. Must be nonzero.
    pub length: usize,
}

impl ExpandParams {
    /// Creates expansion parameters for a purpose.
    #[must_use]
    pub fn new(purpose: impl Into<String>, length: usize) -> Self {
        Self {
            purpose: purpose.into(),
            length,
        }
    }

    /// Default parameters for the passphrase-body keystream: 8 bytes under
    /// the "password" purpose.
    #[must_use]
    pub fn password() -> Self {
        Self::new(PURPOSE_PASSWORD, 8)
    }

    /// Default parameters for the digit-tail keystream: 10 bytes under the
    /// "compliance" purpose.
    #[must_use]
    pub fn compliance() -> Self {
        Self::new(PURPOSE_COMPLIANCE, 10)
    }

    /// Validates the parameters, failing fast on out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns [`KeyphraseError::InvalidParameter`] if `length` is zero.
    pub fn validate(&self) -> KeyphraseResult<()> {
        if self.length == 0 {
            return Err(KeyphraseError::InvalidParameter(format!(
                "expansion length for purpose {:?} must be nonzero",
                self.purpose
            )));
        }
        Ok(())
    }
}

/// Full pipeline configuration.
///
/// # Example
///
/// ```rust
/// use keyphrase::DeriveConfig;
///
/// let config = DeriveConfig::default();
/// assert_eq!(config.stretch.iterations, 3_000_000);
/// assert_eq!(config.body.purpose, "password");
/// assert_eq!(config.tail.purpose, "compliance");
/// assert_eq!(config.digits, 4);
/// assert_eq!(config.separator, "-");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeriveConfig {
    /// Key-stretching parameters.
    pub stretch: StretchParams,

    /// Expansion parameters for the word-encoded body.
    pub body: ExpandParams,

    /// Expansion parameters for the digit tail.
    pub tail: ExpandParams,

    /// Number of decimal digits appended after the separator.
    ///
    /// Zero is allowed: the result is the body followed by the bare
    /// separator.
    pub digits: usize,

    /// Separator between body and tail.
    pub separator: String,
}

impl Default for DeriveConfig {
    fn default() -> Self {
        Self {
            stretch: StretchParams::standard(),
            body: ExpandParams::password(),
            tail: ExpandParams::compliance(),
            digits: DEFAULT_DIGITS,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl DeriveConfig {
    /// Validates every field, failing fast on the first out-of-range value.
    ///
    /// # Errors
    ///
    /// Returns [`KeyphraseError::InvalidParameter`] for any zero iteration
    /// count or output length.
    pub fn validate(&self) -> KeyphraseResult<()> {
        self.stretch.validate()?;
        self.body.validate()?;
        self.tail.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stretch_presets() {
        let interactive = StretchParams::interactive();
        assert_eq!(interactive.iterations, 150_000);
        assert_eq!(interactive.output_length, 32);

        let standard = StretchParams::standard();
        assert_eq!(standard.iterations, 3_000_000);
        assert_eq!(standard.output_length, 32);

        assert_eq!(StretchParams::default(), StretchParams::standard());
    }

    #[test]
    fn test_stretch_validate_rejects_zero_iterations() {
        let params = StretchParams {
            iterations: 0,
            output_length: 32,
        };
        assert!(matches!(
            params.validate(),
            Err(KeyphraseError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_stretch_validate_rejects_zero_length() {
        let params = StretchParams {
            iterations: 1000,
            output_length: 0,
        };
        assert!(matches!(
            params.validate(),
            Err(KeyphraseError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_expand_defaults() {
        let body = ExpandParams::password();
        assert_eq!(body.purpose, "password");
        assert_eq!(body.length, 8);

        let tail = ExpandParams::compliance();
        assert_eq!(tail.purpose, "compliance");
        assert_eq!(tail.length, 10);
    }

    #[test]
    fn test_expand_validate_rejects_zero_length() {
        let params = ExpandParams::new("password", 0);
        assert!(matches!(
            params.validate(),
            Err(KeyphraseError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_config_default_is_valid() -> KeyphraseResult<()> {
        DeriveConfig::default().validate()
    }

    #[test]
    fn test_config_validate_propagates_nested_failure() {
        let mut config = DeriveConfig::default();
        config.tail.length = 0;
        assert!(matches!(
            config.validate(),
            Err(KeyphraseError::InvalidParameter(_))
        ));
    }
}
