//! Streaming signing and verification.
//!
//! The message is absorbed into a Gimli-Hash state in as many chunks as
//! needed; finalization turns the running hash into the 64-byte prehash
//! that both signing and verification operate on.

use super::core::{PREHASH_LEN, Signature, sign_prehashed, verify_prehashed};
use super::keypair::{PublicKey, SecretKey};
use crate::hash::Hasher;

/// Incremental signing or verification state.
#[derive(Clone, Debug, Default)]
pub struct SignState {
    hasher: Hasher,
}

impl SignState {
    pub fn new() -> Self {
        Self {
            hasher: Hasher::new(),
        }
    }

    /// Absorbs a chunk of the message.
    pub fn update(&mut self, message: &[u8]) -> &mut Self {
        self.hasher.update(message);
        self
    }

    /// Returns the 64-byte prehash of the absorbed message.
    pub fn finalize_prehash(self) -> [u8; PREHASH_LEN] {
        self.hasher.finalize_array()
    }

    /// Signs the absorbed message.
    pub fn finalize_sign(self, secret: &SecretKey) -> Signature {
        let prehash = self.finalize_prehash();
        sign_prehashed(&prehash, secret)
    }

    /// Verifies `signature` over the absorbed message.
    pub fn finalize_verify(self, signature: &Signature, public: &PublicKey) -> bool {
        let prehash = self.finalize_prehash();
        verify_prehashed(signature, &prehash, public)
    }
}
