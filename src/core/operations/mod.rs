//! Derivation operations.
//!
//! The pipeline stages, leaf-first:
//!
//! - [`stretch`] - Password-based key stretching (PBKDF2)
//! - [`expand`] - Purpose-scoped key expansion (HKDF)
//! - [`sampler`] - Deterministic bias-free integer sampling
//! - [`tail`] - Digit-tail appending
//! - [`derive`] - The full pipeline

pub mod derive;
pub mod expand;
pub mod sampler;
pub mod stretch;
pub mod tail;
