//! Authenticated encryption with associated data.
//!
//! This module exposes the Gimli duplex AEAD. Encryption and authentication
//! share one sponge transcript: associated data, then the plaintext, are
//! absorbed into the same state that produces the keystream and, at the
//! end, the authentication tag.

mod duplex;

/// Gimli duplex AEAD construction.
///
/// # Notes
///
/// - Nonce reuse with the same key reveals the XOR of plaintext prefixes
///   and must be avoided.
/// - The one-shot [`gimli_aead::decrypt`] zeroes its output on failure.
pub use duplex::core as gimli_aead;
