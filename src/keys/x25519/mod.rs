//! X25519 key exchange and Curve25519 arithmetic.
//!
//! This module provides an implementation of the X25519 Diffie–Hellman
//! function as specified in RFC 7748, together with the x-only curve
//! machinery the Schnorr signature scheme is built on.
//!
//! ## Structure
//!
//! - `core`  
//!   Scalar clamping, the Montgomery ladder and the public scalar
//!   multiplication functions.
//! - `field`  
//!   Arithmetic modulo `2²⁵⁵ − 19` on four 64-bit limbs.
//! - `scalar`  
//!   Montgomery multiply-accumulate modulo the subgroup order `L`.
//!
//! The separation mirrors the structure used in other cryptographic
//! modules of the crate, keeping algorithmic details isolated while
//! exposing a small, explicit interface.

mod core;
pub(crate) mod field;
pub(crate) mod scalar;

// Re-export the public API at the `x25519` level.
pub use self::core::{BASE_POINT, X25519_LEN, clamp, exchange, scalar_mult, scalar_mult_base};

pub(crate) use self::core::{scalar_mult_unclamped, verify_ladders};
