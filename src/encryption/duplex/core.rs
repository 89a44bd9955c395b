//! Gimli duplex AEAD.
//!
//! ## Construction
//!
//! 1. Load the 16-byte nonce and the 32-byte key into the state, permute.
//! 2. Absorb the associated data, pad.
//! 3. Duplex the payload byte by byte: the plaintext byte is absorbed and
//!    the resulting state byte is the ciphertext byte.
//! 4. Pad, squeeze the tag.
//!
//! ## Security notes
//!
//! - Tag comparison never exits early.
//! - When authentication fails, [`decrypt`] overwrites the whole output
//!   buffer with zeros using an arithmetic mask, so the failing path does
//!   the same work as the succeeding one.
//! - `(key, nonce)` MUST be unique per encryption.

use crate::errors::{Error, Result};

pub use super::stream::{AeadState, Decryptor, Encryptor};

/// Nonce length in bytes.
pub const NONCE_LEN: usize = 16;

/// Key length in bytes.
pub const KEY_LEN: usize = 32;

/// Default tag length in bytes.
pub const TAG_LEN: usize = 16;

/// Encrypts and authenticates `plaintext`.
///
/// # Parameters
///
/// - `ciphertext`: output buffer, same length as `plaintext`
/// - `tag`: output tag; its length selects the tag length
///   (normally [`TAG_LEN`])
/// - `plaintext`: message to encrypt
/// - `ad`: associated data, authenticated but not encrypted
/// - `nonce`: 128-bit nonce
/// - `key`: 256-bit key
///
/// # Panics
///
/// Panics if `plaintext.len() != ciphertext.len()`.
pub fn encrypt(
    ciphertext: &mut [u8],
    tag: &mut [u8],
    plaintext: &[u8],
    ad: &[u8],
    nonce: &[u8; NONCE_LEN],
    key: &[u8; KEY_LEN],
) {
    let mut state = AeadState::new(nonce, key);
    state.update_ad(ad);

    let mut enc = state.encrypt();
    enc.update(ciphertext, plaintext);
    enc.finalize(tag);
}

/// Decrypts and verifies `ciphertext`.
///
/// Returns `true` if the tag is valid. On `false`, every byte of
/// `plaintext` has been overwritten with zero and must not be used.
///
/// The tag is compared over `tag.len()` bytes only. An empty `tag`
/// authenticates nothing and always returns `true`; callers taking the
/// tag from untrusted input must enforce their own minimum length.
///
/// # Panics
///
/// Panics if `plaintext.len() != ciphertext.len()`.
#[must_use]
pub fn decrypt(
    plaintext: &mut [u8],
    ciphertext: &[u8],
    tag: &[u8],
    ad: &[u8],
    nonce: &[u8; NONCE_LEN],
    key: &[u8; KEY_LEN],
) -> bool {
    let mut state = AeadState::new(nonce, key);
    state.update_ad(ad);

    let mut dec = state.decrypt();
    dec.update(plaintext, ciphertext);

    let mask = dec.verify_mask(tag);
    for m in plaintext.iter_mut() {
        *m &= mask;
    }

    let ok = mask != 0;
    if !ok {
        tracing::debug!(len = ciphertext.len(), "gimli aead: tag mismatch");
    }
    ok
}

/// Encrypts `plaintext` and returns `ciphertext || tag` with a
/// [`TAG_LEN`]-byte tag.
pub fn seal(plaintext: &[u8], ad: &[u8], nonce: &[u8; NONCE_LEN], key: &[u8; KEY_LEN]) -> Vec<u8> {
    let mut out = vec![0u8; plaintext.len() + TAG_LEN];
    let (ciphertext, tag) = out.split_at_mut(plaintext.len());

    encrypt(ciphertext, tag, plaintext, ad, nonce, key);
    out
}

/// Verifies and decrypts the output of [`seal`].
///
/// # Errors
///
/// - `Error::InvalidLength` if `sealed` is shorter than a tag
/// - `Error::AuthenticationFailed` if the tag does not verify
pub fn open(sealed: &[u8], ad: &[u8], nonce: &[u8; NONCE_LEN], key: &[u8; KEY_LEN]) -> Result<Vec<u8>> {
    if sealed.len() < TAG_LEN {
        return Err(Error::InvalidLength {
            expected: TAG_LEN,
            got: sealed.len(),
        });
    }

    let (ciphertext, tag) = sealed.split_at(sealed.len() - TAG_LEN);
    let mut plaintext = vec![0u8; ciphertext.len()];

    if decrypt(&mut plaintext, ciphertext, tag, ad, nonce, key) {
        Ok(plaintext)
    } else {
        Err(Error::AuthenticationFailed)
    }
}
