//! Deterministic bias-free integer sampling.
//!
//! A [`Sampler`] is bound to a fixed byte buffer and turns it into a
//! reproducible sequence of uniform integers. Each draw consumes four bytes,
//! assembled big-endian into a `u32`; the cursor is an explicit index
//! reduced modulo the buffer length, so reading past the end wraps back to
//! the start and the buffer is reused cyclically rather than re-requested.
//!
//! Draws use 32-bit rejection sampling to avoid modulo bias: values at or
//! above `floor(2^32 / n) * n` are discarded and the next four bytes drawn
//! instead. For small `n` the rejection region is tiny (for `n = 10` it is
//! 6 values out of 2^32), so the expected number of retries per draw is
//! negligible. Because the cursor state repeats after at most `len` draws
//! from the same offset, a buffer whose cycle never yields an in-range value
//! would loop forever; draws are therefore capped at one full cycle before
//! failing, which makes termination unconditional.

use crate::core::error::{KeyphraseError, KeyphraseResult};

/// Deterministic sampler over a fixed byte buffer.
///
/// For a fixed buffer, the sequence of values returned by successive
/// [`sample`](Sampler::sample) calls is always identical. The whole
/// derivation pipeline's reproducibility rests on this property.
#[derive(Debug)]
pub struct Sampler<'a> {
    bytes: &'a [u8],
    cursor: usize,
}

impl<'a> Sampler<'a> {
    /// Creates a sampler over `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyphraseError::InvalidParameter`] if the buffer is empty.
    pub fn new(bytes: &'a [u8]) -> KeyphraseResult<Self> {
        if bytes.is_empty() {
            return Err(KeyphraseError::InvalidParameter(
                "sampler buffer must be nonempty".to_string(),
            ));
        }
        Ok(Self { bytes, cursor: 0 })
    }

    /// Reads the next four bytes (cyclically) as a big-endian `u32`.
    fn next_u32(&mut self) -> u32 {
        let mut x: u32 = 0;
        for _ in 0..4 {
            x = (x << 8) | u32::from(self.bytes[self.cursor % self.bytes.len()]);
            self.cursor = self.cursor.wrapping_add(1);
        }
        x
    }

    /// Draws a uniform integer in `[0, n)`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyphraseError::InvalidParameter`] if `n < 2` (a degenerate
    /// range is a configuration bug, not a request for zero), or if the
    /// buffer's full cycle cannot produce an in-range value.
    pub fn sample(&mut self, n: u32) -> KeyphraseResult<u32> {
        if n < 2 {
            return Err(KeyphraseError::InvalidParameter(
                "sample range must be >= 2".to_string(),
            ));
        }

        const RANGE: u64 = 1 << 32;
        let limit = RANGE / u64::from(n) * u64::from(n);

        // The cursor position modulo the buffer length fully determines the
        // rest of the sequence, so after `len` rejected draws the state has
        // repeated and no later draw can succeed either.
        for _ in 0..=self.bytes.len() {
            let x = u64::from(self.next_u32());
            if x < limit {
                return Ok((x % u64::from(n)) as u32);
            }
        }

        Err(KeyphraseError::InvalidParameter(
            "sampler buffer cannot produce an in-range value".to_string(),
        ))
    }
}
