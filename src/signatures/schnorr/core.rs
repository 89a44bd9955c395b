//! Schnorr signatures over Curve25519 x-coordinates.
//!
//! Unlike Ed25519, this scheme never leaves the Montgomery form: keys and
//! nonce points are X25519 u-coordinates, and verification checks an
//! x-only equation between two ladder outputs instead of comparing
//! decompressed Edwards points.
//!
//! All transcripts use Gimli-Hash:
//!
//! ```text
//! prehash   = H₆₄(message)
//! r         = clamp(H₃₂(az[32..64] || prehash))
//! R         = r · B
//! c         = H₃₂(R || A || prehash)
//! S         = r + a · c  mod L
//! signature = R || S
//! ```
//!
//! The nonce is derived deterministically from secret material and the
//! message, so signing needs no randomness and the same message always
//! yields the same signature.

use zeroize::Zeroizing;

use super::keypair::{PUBLIC_KEY_LEN, PublicKey, SecretKey, expand_seed};
use super::stream::SignState;
use crate::errors::{Error, Result};
use crate::hash::Hasher;
use crate::keys::ct::ConstantTimeEq;
use crate::keys::x25519::field::FieldElement;
use crate::keys::x25519::scalar::mul_add;
use crate::keys::x25519::{
    BASE_POINT, X25519_LEN, clamp, scalar_mult_base, scalar_mult_unclamped, verify_ladders,
};

/// Signature length in bytes.
pub const SIGNATURE_LEN: usize = 2 * X25519_LEN;

/// Prehash length in bytes.
pub const PREHASH_LEN: usize = 64;

/// A Schnorr signature: nonce point `R` followed by response `S`.
///
/// Equality is tested in constant time.
#[derive(Clone, Copy, Debug, Eq)]
pub struct Signature {
    r: [u8; X25519_LEN],
    s: [u8; X25519_LEN],
}

impl Signature {
    /// Constructs a signature from its raw 64-byte representation.
    ///
    /// No validation is performed at construction time; validity is
    /// decided by verification.
    pub fn from_bytes(bytes: [u8; SIGNATURE_LEN]) -> Self {
        let mut sig = Self {
            r: [0u8; X25519_LEN],
            s: [0u8; X25519_LEN],
        };
        sig.r.copy_from_slice(&bytes[..X25519_LEN]);
        sig.s.copy_from_slice(&bytes[X25519_LEN..]);
        sig
    }

    /// Parses a signature from a slice of exactly 64 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; SIGNATURE_LEN] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: SIGNATURE_LEN,
            got: bytes.len(),
        })?;
        Ok(Self::from_bytes(bytes))
    }

    /// Returns the raw byte encoding `R || S`.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LEN] {
        let mut out = [0u8; SIGNATURE_LEN];
        out[..X25519_LEN].copy_from_slice(&self.r);
        out[X25519_LEN..].copy_from_slice(&self.s);
        out
    }

    /// The nonce point `R` (a u-coordinate).
    #[inline]
    pub fn r_bytes(&self) -> &[u8; X25519_LEN] {
        &self.r
    }

    /// The response scalar `S`.
    #[inline]
    pub fn s_bytes(&self) -> &[u8; X25519_LEN] {
        &self.s
    }
}

impl PartialEq for Signature {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes().ct_eq(&other.to_bytes())
    }
}

/// Computes the challenge `c = H₃₂(R || A || prehash)`.
///
/// The challenge is used unclamped: it is a uniform 256-bit integer and
/// the ladder and the scalar arithmetic both take it as-is.
fn challenge(
    r: &[u8; X25519_LEN],
    public: &[u8; PUBLIC_KEY_LEN],
    prehash: &[u8; PREHASH_LEN],
) -> [u8; X25519_LEN] {
    let mut hasher = Hasher::new();
    hasher.update(r).update(public).update(prehash);
    hasher.finalize_array()
}

/// Signs a 64-byte prehash.
///
/// This is the final step of [`sign`]. Callers that already hold a
/// Gimli-Hash₆₄ of their message (e.g. from [`SignState::finalize_prehash`])
/// can sign it directly.
pub fn sign_prehashed(prehash: &[u8; PREHASH_LEN], secret: &SecretKey) -> Signature {
    let az = expand_seed(secret.seed());
    let public = secret.public_key();

    let mut nonce = Zeroizing::new([0u8; X25519_LEN]);
    let mut hasher = Hasher::new();
    hasher.update(&az[1]).update(prehash);
    hasher.finalize(&mut nonce[..]);
    clamp(&mut nonce);

    let r = scalar_mult_base(&nonce);
    let c = challenge(&r, public.as_bytes(), prehash);
    let s = mul_add(&c, &az[0], &nonce);

    Signature { r, s }
}

/// Verifies a signature over a 64-byte prehash.
///
/// Returns `true` iff `R` is the x-coordinate of `S·B − c·A`, checked on
/// the projective ladder outputs without recovering full points.
pub fn verify_prehashed(signature: &Signature, prehash: &[u8; PREHASH_LEN], public: &PublicKey) -> bool {
    let (r, s) = (signature.r_bytes(), signature.s_bytes());
    let c = challenge(r, public.as_bytes(), prehash);

    let challenge_ladder = scalar_mult_unclamped(&c, public.as_bytes());
    let response_ladder = scalar_mult_unclamped(s, &BASE_POINT);

    let ok = verify_ladders(response_ladder, &challenge_ladder, &FieldElement::from_bytes(r));
    if !ok {
        tracing::debug!("schnorr: signature rejected");
    }
    ok
}

/// Computes a Schnorr signature over a message.
///
/// Signing is deterministic: the nonce is derived from the secret key and
/// the message, so the same inputs always produce the same signature.
pub fn sign(message: &[u8], secret: &SecretKey) -> Signature {
    let mut state = SignState::new();
    state.update(message);
    state.finalize_sign(secret)
}

/// Verifies a Schnorr signature.
///
/// The function returns `true` if and only if the signature is valid.
/// Any malformed input or verification failure results in `false`; it
/// never panics on correctly-sized input.
pub fn verify(signature: &Signature, message: &[u8], public: &PublicKey) -> bool {
    let mut state = SignState::new();
    state.update(message);
    state.finalize_verify(signature, public)
}

/// Like [`verify`], but reports failure as `Error::InvalidSignature`.
pub fn try_verify(signature: &Signature, message: &[u8], public: &PublicKey) -> Result<()> {
    if verify(signature, message, public) {
        Ok(())
    } else {
        Err(Error::InvalidSignature)
    }
}
