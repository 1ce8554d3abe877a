//! Digit-tail appending.
//!
//! Turns the compliance keystream into a short decimal tail and attaches it
//! to the word-encoded passphrase body. The tail exists to satisfy password
//! policies that demand digits; its entropy contribution is secondary.

use crate::core::error::KeyphraseResult;
use crate::core::operations::sampler::Sampler;

/// Appends `digits` sampled decimal digits to `body`, joined by `separator`.
///
/// Digits are drawn in order from a [`Sampler`] over `keystream` with
/// `n = 10`. With `digits == 0` the result is `body + separator` — the
/// separator is always present.
///
/// # Errors
///
/// Returns [`KeyphraseError::InvalidParameter`](crate::KeyphraseError::InvalidParameter)
/// if `keystream` is empty.
pub fn append_tail(
    body: &str,
    keystream: &[u8],
    digits: usize,
    separator: &str,
) -> KeyphraseResult<String> {
    let mut sampler = Sampler::new(keystream)?;

    let mut tail = String::with_capacity(digits);
    for _ in 0..digits {
        let digit = sampler.sample(10)?;
        tail.push(char::from(b'0' + digit as u8));
    }

    Ok(format!("{body}{separator}{tail}"))
}
