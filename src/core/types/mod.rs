//! Value types flowing through the derivation pipeline.
//!
//! Every type here is transient: produced fresh per derivation call, never
//! cached or written anywhere, zeroized on drop.

mod keystream;
mod site_key;

pub use keystream::Keystream;
pub use site_key::SiteKey;
