//! Asymmetric key material and curve arithmetic.
//!
//! ## X25519
//!
//! The `x25519` module implements Curve25519 Diffie–Hellman key agreement
//! using the Montgomery ladder as specified in RFC 7748.
//!
//! It provides constant-time scalar multiplication on Montgomery
//! coordinates. The same ladder, run on unclamped scalars, backs the
//! x-only Schnorr signatures in `signatures::schnorr`.
//!
//! ## Constant-time helpers
//!
//! `ct` holds the comparison primitives used where secret-dependent data
//! is compared.

pub(crate) mod ct;
pub mod x25519;
