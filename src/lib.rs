//! Gimli and Curve25519 cryptographic primitives
//!
//! This crate provides a small, self-contained set of cryptographic
//! building blocks around a single 384-bit permutation (Gimli) and a
//! single elliptic curve (Curve25519).
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level cryptographic API. Every
//! algorithm is implemented in this crate; external crates are only used
//! for OS entropy, secret erasure, errors and logging.
//!
//! # Module overview
//!
//! - `permutation`
//!   The Gimli permutation: 24 rounds over twelve 32-bit words.
//!
//! - `sponge`
//!   The byte-oriented absorb/squeeze engine shared by every symmetric
//!   construction (16-byte rate, 32-byte capacity).
//!
//! - `hash`
//!   Gimli-Hash with arbitrary output length, one-shot or incremental.
//!
//! - `encryption`
//!   The Gimli duplex AEAD. Decryption verifies the tag in constant time
//!   and wipes the plaintext on failure.
//!
//! - `keys`
//!   Curve25519 field arithmetic and the X25519 Montgomery ladder
//!   (RFC 7748).
//!
//! - `signatures`
//!   Schnorr signatures over Curve25519 x-coordinates, with deterministic
//!   nonces and Gimli-Hash transcripts.
//!
//! - `random`
//!   Operating system randomness. Failure to obtain entropy panics.
//!
//! - `watchdog`
//!   Optional hook called once per permutation, for supervised embedded
//!   deployments (`watchdog` feature).
//!
//! # Design goals
//!
//! - No heap allocations in core primitives
//! - No secret-dependent branches or early exits
//! - Secret intermediates wiped through `zeroize`
//! - Fixed-size arrays wherever sizes are fixed
//!
//! # Example
//!
//! ```
//! use lithic::signatures::schnorr;
//!
//! let (public, secret) = schnorr::keypair_from_seed(&[7u8; 32]);
//! let signature = schnorr::sign(b"hello", &secret);
//!
//! assert!(schnorr::verify(&signature, b"hello", &public));
//! assert!(!schnorr::verify(&signature, b"hellO", &public));
//! ```

mod os;

pub mod encryption;
pub mod errors;
pub mod hash;
pub mod keys;
pub mod permutation;
pub mod random;
pub mod signatures;
pub mod sponge;
pub mod watchdog;

pub use errors::{Error, Result};
