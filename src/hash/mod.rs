//! Hash algorithms exposed by the crate.
//!
//! Currently includes Gimli-Hash, an extendable-output sponge hash built on
//! the Gimli permutation.

pub mod gimli;

/// Re-export of the Gimli-Hash convenience functions.
pub use gimli::{Hasher, hash, hash_array, try_hash};
