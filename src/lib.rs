//! Deterministic passphrase derivation.
//!
//! `keyphrase` derives a human-memorable passphrase from two secrets: a
//! master passphrase and an application/site label. The same inputs always
//! reproduce the identical passphrase — there is no stored state anywhere,
//! so nothing can be lost or synchronized. Every derivation is a pure
//! function of its inputs and the published configuration.
//!
//! # Quick Start
//!
//! ```rust
//! use keyphrase::{derive_passphrase, DeriveConfig, StretchParams};
//!
//! // The default profile runs 3,000,000 PBKDF2 iterations and takes a
//! // deliberate fraction of a second; this example uses a fast profile.
//! let config = DeriveConfig {
//!     stretch: StretchParams { iterations: 1000, output_length: 32 },
//!     ..DeriveConfig::default()
//! };
//!
//! let passphrase = derive_passphrase("correct horse battery staple", "example", &config)?;
//! assert_eq!(passphrase, "toriz-hotos-zorum-holuk-8616");
//! # Ok::<(), keyphrase::KeyphraseError>(())
//! ```
//!
//! # Pipeline
//!
//! | Stage | Primitive | Output |
//! |-------|-----------|--------|
//! | Stretch | PBKDF2-HMAC-SHA-256, salt `SHA256("salt\|" + label)` | site key |
//! | Expand | HKDF-SHA-256, salt `SHA256("hkdf\|" + label)`, per-purpose info | keystreams |
//! | Encode | word encoder over the "password" keystream | passphrase body |
//! | Tail | rejection sampler over the "compliance" keystream | digit tail |
//!
//! The iteration count, output lengths, purpose labels, digit count and
//! separator are published parameters: every conforming implementation must
//! use the same values or derived passphrases will not match. See
//! [`DeriveConfig`] for the defaults.
//!
//! # Security
//!
//! - Derived secrets ([`SiteKey`], [`Keystream`]) are zeroized on drop and
//!   redacted in Debug output
//! - The stretching cost is deliberate and must not be tuned down in
//!   deployment; it is the only brute-force protection a stolen label list
//!   leaves you
//! - No key storage, no network use, no defense against a compromised
//!   master passphrase or timing side channels
//! - No unsafe code
//!
//! # Modules
//!
//! - [`core`] - Core types and operations
//! - [`prelude`] - Ergonomic imports

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod core;
pub mod prelude;

// Re-export commonly used items at crate root
pub use core::backend::{CryptoBackend, RustCryptoBackend};
pub use core::config::{
    DeriveConfig, ExpandParams, StretchParams, DEFAULT_DIGITS, DEFAULT_SEPARATOR,
    PURPOSE_COMPLIANCE, PURPOSE_PASSWORD,
};
pub use core::encoder::{Proquint, WordEncoder};
pub use core::error::{KeyphraseError, KeyphraseResult};
pub use core::label::{is_normalized, normalize_label};
pub use core::operations::derive::{derive_passphrase, derive_passphrase_with};
pub use core::types::{Keystream, SiteKey};
