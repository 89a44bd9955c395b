//! Incremental Gimli AEAD.
//!
//! The transcript moves through four phases: initialization, associated
//! data, payload, finalization. Each phase is a distinct type, so the
//! compiler rejects any call sequence that would absorb associated data
//! after the payload or squeeze a tag twice.

use zeroize::Zeroize;

use crate::sponge::Sponge;

use super::core::{KEY_LEN, NONCE_LEN};

/// Associated-data phase of an AEAD transcript.
#[derive(Debug)]
pub struct AeadState {
    sponge: Sponge,
}

/// Payload phase of an encryption transcript.
#[derive(Debug)]
pub struct Encryptor {
    sponge: Sponge,
}

/// Payload phase of a decryption transcript.
///
/// Plaintext released by [`Decryptor::update`] is not authenticated until
/// [`Decryptor::finalize`] returns `true`; unlike the one-shot
/// [`decrypt`](super::core::decrypt), already released bytes cannot be
/// wiped on failure, so callers must discard them themselves.
#[derive(Debug)]
pub struct Decryptor {
    sponge: Sponge,
}

impl AeadState {
    /// Loads nonce and key and applies the initial permutation.
    ///
    /// Words `0..4` receive the nonce and words `4..12` the key, both read
    /// little-endian.
    pub fn new(nonce: &[u8; NONCE_LEN], key: &[u8; KEY_LEN]) -> Self {
        let mut state = [0u32; 12];

        for (word, bytes) in state[..4].iter_mut().zip(nonce.chunks_exact(4)) {
            *word = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        }
        for (word, bytes) in state[4..].iter_mut().zip(key.chunks_exact(4)) {
            *word = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        }

        let mut sponge = Sponge::from_state(state);
        state.zeroize();
        sponge.permute();

        Self { sponge }
    }

    /// Absorbs a chunk of associated data.
    pub fn update_ad(&mut self, ad: &[u8]) -> &mut Self {
        self.sponge.absorb(ad);
        self
    }

    /// Closes the associated data and starts an encryption payload.
    pub fn encrypt(mut self) -> Encryptor {
        self.sponge.pad();
        Encryptor {
            sponge: self.sponge,
        }
    }

    /// Closes the associated data and starts a decryption payload.
    pub fn decrypt(mut self) -> Decryptor {
        self.sponge.pad();
        Decryptor {
            sponge: self.sponge,
        }
    }
}

impl Encryptor {
    /// Encrypts `plaintext` into `ciphertext`.
    ///
    /// Every plaintext byte is absorbed before the ciphertext byte is read
    /// back, so the ciphertext byte is `m ^ keystream`.
    ///
    /// # Panics
    ///
    /// Panics if the two buffers differ in length.
    pub fn update(&mut self, ciphertext: &mut [u8], plaintext: &[u8]) {
        assert_eq!(
            ciphertext.len(),
            plaintext.len(),
            "ciphertext and plaintext lengths differ"
        );

        for (c, &m) in ciphertext.iter_mut().zip(plaintext) {
            self.sponge.absorb_byte(m);
            *c = self.sponge.squeeze_byte();
            self.sponge.advance();
        }
    }

    /// Closes the payload and writes the tag. The tag length is `tag.len()`.
    pub fn finalize(mut self, tag: &mut [u8]) {
        self.sponge.pad();
        self.sponge.squeeze(tag);
    }
}

impl Decryptor {
    /// Decrypts `ciphertext` into `plaintext`.
    ///
    /// The recovered plaintext byte is absorbed back, keeping the
    /// transcript identical to the encryptor's.
    ///
    /// # Panics
    ///
    /// Panics if the two buffers differ in length.
    pub fn update(&mut self, plaintext: &mut [u8], ciphertext: &[u8]) {
        assert_eq!(
            plaintext.len(),
            ciphertext.len(),
            "plaintext and ciphertext lengths differ"
        );

        for (m, &c) in plaintext.iter_mut().zip(ciphertext) {
            *m = c ^ self.sponge.squeeze_byte();
            self.sponge.absorb_byte(*m);
            self.sponge.advance();
        }
    }

    /// Closes the payload and checks `tag` in constant time.
    ///
    /// Only `tag.len()` bytes are checked; an empty tag always passes.
    pub fn finalize(self, tag: &[u8]) -> bool {
        self.verify_mask(tag) != 0
    }

    /// Closes the payload and returns `0xff` if `tag` matches, `0x00`
    /// otherwise.
    ///
    /// Every tag byte is compared; differences are OR-accumulated and the
    /// mask is derived arithmetically from the accumulator.
    pub(crate) fn verify_mask(mut self, tag: &[u8]) -> u8 {
        self.sponge.pad();

        let mut diff = 0u8;
        for &t in tag {
            diff |= t ^ self.sponge.squeeze_byte();
            self.sponge.advance();
        }

        // diff == 0 -> 0xff, anything else -> 0x00
        ((diff as u32).wrapping_sub(1) >> 8) as u8
    }
}
