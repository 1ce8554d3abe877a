//! Ergonomic imports for passphrase derivation.
//!
//! # Usage
//!
//! ```rust
//! use keyphrase::prelude::*;
//! ```

pub use crate::core::backend::{CryptoBackend, RustCryptoBackend};
pub use crate::core::config::{
    DeriveConfig, ExpandParams, StretchParams, DEFAULT_DIGITS, DEFAULT_SEPARATOR,
    PURPOSE_COMPLIANCE, PURPOSE_PASSWORD,
};
pub use crate::core::encoder::{Proquint, WordEncoder};
pub use crate::core::error::{KeyphraseError, KeyphraseResult};
pub use crate::core::label::{is_normalized, normalize_label};
pub use crate::core::operations::derive::{derive_passphrase, derive_passphrase_with};
pub use crate::core::operations::expand::expand_keystream;
pub use crate::core::operations::sampler::Sampler;
pub use crate::core::operations::stretch::stretch_site_key;
pub use crate::core::operations::tail::append_tail;
pub use crate::core::types::{Keystream, SiteKey};
