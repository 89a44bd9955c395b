//! Gimli-Hash.
//!
//! A sponge hash with arbitrary output length: the input is absorbed into a
//! zeroed Gimli sponge, the absorbing phase is closed with the sponge
//! padding, and as many output bytes as requested are squeezed.
//!
//! The API comes in two shapes:
//!
//! - one-shot [`hash`] / [`hash_array`] for input already in memory,
//! - the incremental [`Hasher`] for streamed input.
//!
//! Both produce identical output for the same input bytes regardless of
//! how the stream is split into chunks.

mod core;

pub use self::core::*;
