//! Schnorr signatures on Curve25519 with Gimli-Hash transcripts.
//!
//! ## Structure
//!
//! - `keypair`: seed expansion, key generation and key types,
//! - `core`: the signature type and the sign/verify algorithms,
//! - `stream`: incremental hashing of long messages.
//!
//! ## Clamping contract
//!
//! The signing scalar and the nonce are clamped. The challenge is not: it
//! enters both the response computation and the verification ladder as a
//! full 256-bit integer. Both sides use the unclamped ladder for `c · A`
//! and `S · B`.

mod core;
mod keypair;
mod stream;

pub use self::core::{
    PREHASH_LEN, SIGNATURE_LEN, Signature, sign, sign_prehashed, try_verify, verify,
    verify_prehashed,
};
pub use keypair::{
    PUBLIC_KEY_LEN, PublicKey, SECRET_KEY_LEN, SEED_LEN, SecretKey, generate_keypair,
    keypair_from_seed,
};
pub use stream::SignState;
