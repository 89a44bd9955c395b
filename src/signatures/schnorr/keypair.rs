//! Schnorr key material.
//!
//! A secret key is the 32-byte random seed followed by a copy of the
//! public key, so signing never needs the public key passed separately.
//! The signing scalar is re-derived from the seed on every use and wiped
//! right after.

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::errors::{Error, Result};
use crate::hash::Hasher;
use crate::keys::x25519::{X25519_LEN, clamp, scalar_mult_base};
use crate::random::fill_random;

/// Public key length in bytes.
pub const PUBLIC_KEY_LEN: usize = X25519_LEN;

/// Secret key length in bytes.
pub const SECRET_KEY_LEN: usize = 2 * X25519_LEN;

/// Seed length in bytes.
pub const SEED_LEN: usize = X25519_LEN;

/// A Schnorr public key: the Curve25519 u-coordinate of `a · B`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; PUBLIC_KEY_LEN]);

impl PublicKey {
    /// Wraps a raw 32-byte public key.
    ///
    /// No validation is performed; malformed keys simply fail verification.
    #[inline]
    pub fn from_bytes(bytes: [u8; PUBLIC_KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Parses a public key from a slice of exactly 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; PUBLIC_KEY_LEN] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: PUBLIC_KEY_LEN,
            got: bytes.len(),
        })?;
        Ok(Self(bytes))
    }

    /// Returns the encoded key.
    #[inline]
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_LEN] {
        self.0
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LEN] {
        &self.0
    }
}

/// A Schnorr secret key: `seed || public_key`.
///
/// The bytes are wiped when the key is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    seed: [u8; SEED_LEN],
    public: [u8; PUBLIC_KEY_LEN],
}

impl SecretKey {
    /// Wraps a raw 64-byte secret key.
    ///
    /// The embedded public key is trusted as-is; a mismatching copy yields
    /// signatures that fail verification.
    pub fn from_bytes(mut bytes: [u8; SECRET_KEY_LEN]) -> Self {
        let key = Self::split(&bytes);
        bytes.zeroize();
        key
    }

    /// Parses a secret key from a slice of exactly 64 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SECRET_KEY_LEN {
            return Err(Error::InvalidLength {
                expected: SECRET_KEY_LEN,
                got: bytes.len(),
            });
        }

        Ok(Self::split(bytes))
    }

    fn split(bytes: &[u8]) -> Self {
        let mut key = Self {
            seed: [0u8; SEED_LEN],
            public: [0u8; PUBLIC_KEY_LEN],
        };
        key.seed.copy_from_slice(&bytes[..SEED_LEN]);
        key.public.copy_from_slice(&bytes[SEED_LEN..]);
        key
    }

    /// Returns the encoded key `seed || public_key`.
    ///
    /// The caller becomes responsible for wiping the returned copy.
    pub fn to_bytes(&self) -> [u8; SECRET_KEY_LEN] {
        let mut out = [0u8; SECRET_KEY_LEN];
        out[..SEED_LEN].copy_from_slice(&self.seed);
        out[SEED_LEN..].copy_from_slice(&self.public);
        out
    }

    /// The public key stored in the second half of the secret key.
    #[inline]
    pub fn public_key(&self) -> PublicKey {
        PublicKey(self.public)
    }

    #[inline]
    pub(crate) fn seed(&self) -> &[u8; SEED_LEN] {
        &self.seed
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretKey")
            .field("public_key", &self.public_key())
            .finish_non_exhaustive()
    }
}

/// Expanded secret `az = Gimli-Hash₆₄(seed)`, split in two halves.
///
/// `az[0]` is the clamped signing scalar, `az[1]` keys the deterministic
/// nonce derivation.
pub(crate) type ExpandedSecret = [[u8; X25519_LEN]; 2];

/// Expands a seed into `az`, clamping the signing scalar.
pub(crate) fn expand_seed(seed: &[u8; SEED_LEN]) -> Zeroizing<ExpandedSecret> {
    let mut hasher = Hasher::new();
    hasher.update(seed);

    let mut az = Zeroizing::new([[0u8; X25519_LEN]; 2]);
    hasher.finalize(az.as_flattened_mut());
    clamp(&mut az[0]);

    az
}

/// Derives the keypair belonging to `seed`.
///
/// The process is:
/// - Hash the seed to 64 bytes with Gimli-Hash
/// - Clamp the first half into the signing scalar `a`
/// - Compute the public key as `a · B`
/// - Store `seed || public_key` as the secret key
pub fn keypair_from_seed(seed: &[u8; SEED_LEN]) -> (PublicKey, SecretKey) {
    let az = expand_seed(seed);
    let public = PublicKey(scalar_mult_base(&az[0]));

    let secret = SecretKey {
        seed: *seed,
        public: public.0,
    };

    (public, secret)
}

/// Generates a fresh keypair from operating system randomness.
///
/// # Panics
/// Panics if the operating system cannot provide secure randomness.
pub fn generate_keypair() -> (PublicKey, SecretKey) {
    let mut seed = Zeroizing::new([0u8; SEED_LEN]);
    fill_random(&mut seed[..]);

    let keys = keypair_from_seed(&seed);
    tracing::trace!("generated schnorr keypair");
    keys
}
