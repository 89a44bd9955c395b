//! Gimli sponge engine.
//!
//! A byte-oriented absorb/squeeze duplex built on the Gimli permutation,
//! with a 16-byte rate and a 32-byte capacity. Both the hash and the AEAD
//! mode own a [`Sponge`] and drive it through their own phase discipline;
//! the engine itself does not enforce any ordering between absorbing and
//! squeezing.

mod core;

pub use self::core::*;
