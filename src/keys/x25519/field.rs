//! Finite field arithmetic for Curve25519.
//!
//! This module implements arithmetic in the prime field
//!
//! ```text
//! 𝔽ₚ where p = 2²⁵⁵ − 19
//! ```
//!
//! ## Representation
//!
//! Field elements are four 64-bit little-endian limbs holding a value in
//! the relaxed range
//!
//! ```text
//! 0 ≤ x < 2²⁵⁵ + 2⁶⁴
//! ```
//!
//! Every operation accepts and produces values in that range. Only
//! [`FieldElement::canon`] reduces to the least residue `[0, p)`, and every
//! encoding or equality test goes through it.
//!
//! Reduction uses `2²⁵⁵ ≡ 19 (mod p)`: the bit that overflows position 255
//! is folded back as `19`, and the upper half of a double-width product is
//! folded back as `38` (`2²⁵⁶ ≡ 38`).
//!
//! ## Design goals
//!
//! - **Constant-time execution**: loops and branches depend only on the
//!   fixed limb count and on public constants.
//! - **Lazy reduction**: results are only brought below `2²⁵⁵ + 2⁶⁴`.

use std::ops::{Add, Mul, Sub};

/// Number of limbs in a field element.
pub(crate) const NLIMBS: usize = 4;

/// Bits per limb.
const WBITS: u32 = 64;

/// Multiply-accumulate: returns the low limb of `a * b + acc + carry`
/// and stores the high limb in `carry`.
#[inline(always)]
pub(crate) fn mac(carry: &mut u64, acc: u64, a: u64, b: u64) -> u64 {
    let t = (a as u128) * (b as u128) + (acc as u128) + (*carry as u128);
    *carry = (t >> WBITS) as u64;
    t as u64
}

/// Add with carry.
#[inline(always)]
pub(crate) fn adc(carry: &mut u64, a: u64, b: u64) -> u64 {
    let t = (a as u128) + (b as u128) + (*carry as u128);
    *carry = (t >> WBITS) as u64;
    t as u64
}

/// Reads four little-endian limbs from 32 bytes.
#[inline(always)]
pub(crate) fn read_limbs(bytes: &[u8; 32]) -> [u64; NLIMBS] {
    let mut out = [0u64; NLIMBS];
    for (limb, chunk) in out.iter_mut().zip(bytes.chunks_exact(8)) {
        let mut word = [0u8; 8];
        word.copy_from_slice(chunk);
        *limb = u64::from_le_bytes(word);
    }
    out
}

/// Writes four limbs as 32 little-endian bytes.
#[inline(always)]
pub(crate) fn write_limbs(limbs: &[u64; NLIMBS]) -> [u8; 32] {
    let mut out = [0u8; 32];
    for (chunk, limb) in out.chunks_exact_mut(8).zip(limbs) {
        chunk.copy_from_slice(&limb.to_le_bytes());
    }
    out
}

/// Field element modulo `2^255 - 19`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FieldElement(pub(crate) [u64; NLIMBS]);

impl FieldElement {
    /// The additive identity (0).
    pub(crate) const ZERO: Self = FieldElement([0; NLIMBS]);

    /// The multiplicative identity (1).
    pub(crate) const ONE: Self = FieldElement([1, 0, 0, 0]);

    /// Decodes 32 little-endian bytes.
    ///
    /// Bit 255 is ignored, as RFC 7748 requires for u-coordinates. The
    /// remaining value may be non-canonical (`p ≤ x < 2²⁵⁵`), which is
    /// within the relaxed range.
    pub(crate) fn from_bytes(bytes: &[u8; 32]) -> Self {
        let mut limbs = read_limbs(bytes);
        limbs[NLIMBS - 1] &= !(1u64 << (WBITS - 1));
        FieldElement(limbs)
    }

    /// Encodes the canonical residue as 32 little-endian bytes.
    pub(crate) fn to_bytes(mut self) -> [u8; 32] {
        self.canon();
        write_limbs(&self.0)
    }

    /// Folds bit 255 and the extra carry `over` back into the low limbs.
    ///
    /// Precondition: `over` is small.
    /// Postcondition: the value is below `2²⁵⁵ + 2⁶⁴`, and is at least
    /// `min(x, 19)`.
    #[inline(always)]
    fn propagate(&mut self, over: u64) {
        let over = (self.0[NLIMBS - 1] >> (WBITS - 1)) | (over << 1);
        self.0[NLIMBS - 1] &= !(1u64 << (WBITS - 1));

        let mut carry = over * 19;
        for limb in self.0.iter_mut() {
            *limb = adc(&mut carry, *limb, 0);
        }
    }

    /// Multiplies by the first `nb` limbs of `b`.
    ///
    /// Schoolbook multiplication into a double-width accumulator; the high
    /// half is then folded into the low half with a factor of 38.
    fn mul_limbs(&self, b: &[u64]) -> Self {
        let mut accum = [0u64; 2 * NLIMBS];

        for (i, &mand) in b.iter().enumerate() {
            let mut carry = 0;
            for j in 0..NLIMBS {
                accum[i + j] = mac(&mut carry, accum[i + j], mand, self.0[j]);
            }
            accum[i + NLIMBS] = carry;
        }

        let mut out = [0u64; NLIMBS];
        let mut carry = 0;
        for j in 0..NLIMBS {
            out[j] = mac(&mut carry, accum[j], 38, accum[j + NLIMBS]);
        }

        let mut out = FieldElement(out);
        out.propagate(carry);
        out
    }

    /// Multiplies by a single-limb constant.
    #[inline]
    pub(crate) fn mul_word(&self, b: u64) -> Self {
        self.mul_limbs(&[b])
    }

    /// Computes `self²`.
    #[inline]
    pub(crate) fn square(&self) -> Self {
        self.mul_limbs(&self.0)
    }

    /// Reduces `self` to the least residue in `[0, p)`.
    ///
    /// Returns an all-ones mask if the residue is zero and `0` otherwise.
    /// The mask is meant for constant-time equality tests, never for
    /// ordinary control flow on secret values.
    pub(crate) fn canon(&mut self) -> u64 {
        // Add 19: afterwards 19 <= x < 2^255, since propagate adds 19
        // whenever it folds anything back.
        let mut carry = 19;
        for limb in self.0.iter_mut() {
            *limb = adc(&mut carry, *limb, 0);
        }
        self.propagate(carry);

        // Subtracting 19 lands in [0, 2^255 - 19).
        let mut borrow: i128 = -19;
        let mut res = 0u64;
        for limb in self.0.iter_mut() {
            borrow += *limb as i128;
            *limb = borrow as u64;
            res |= *limb;
            borrow >>= WBITS;
        }

        ((res as u128).wrapping_sub(1) >> WBITS) as u64
    }

    /// Computes the inverse `self^(p-2)`.
    ///
    /// The exponent `0x7fff…ffeb` is public, so branching on its bits does
    /// not leak anything about `self`. The inverse of zero is zero.
    pub(crate) fn invert(&self) -> Self {
        let mut t = Self::ONE;

        for i in (0..255).rev() {
            t = t.square();
            if i >= 8 || ((0xeb >> i) & 1) == 1 {
                t = t * *self;
            }
        }

        t
    }

    /// Constant-time conditional swap.
    ///
    /// `mask` must be `0` (no swap) or `u64::MAX` (swap).
    #[inline(always)]
    pub(crate) fn swap(&mut self, other: &mut Self, mask: u64) {
        for (a, b) in self.0.iter_mut().zip(other.0.iter_mut()) {
            let t = (*a ^ *b) & mask;
            *a ^= t;
            *b ^= t;
        }
    }
}

impl Add for FieldElement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut out = [0u64; NLIMBS];
        let mut carry = 0;

        for i in 0..NLIMBS {
            out[i] = adc(&mut carry, self.0[i], rhs.0[i]);
        }

        let mut out = FieldElement(out);
        out.propagate(carry);
        out
    }
}

impl Sub for FieldElement {
    type Output = Self;

    /// Computes `self - rhs`.
    ///
    /// The borrow chain starts at `-38` so the final carry is `-1` or `0`;
    /// `1 + carry` is then folded back as `2 · 19 · (1 + carry)`, which
    /// restores the 38 and turns the borrow into a multiple of `p`.
    fn sub(self, rhs: Self) -> Self {
        let mut out = [0u64; NLIMBS];
        let mut carry: i128 = -38;

        for i in 0..NLIMBS {
            carry = carry + self.0[i] as i128 - rhs.0[i] as i128;
            out[i] = carry as u64;
            carry >>= WBITS;
        }

        let mut out = FieldElement(out);
        out.propagate((1 + carry) as u64);
        out
    }
}

impl Mul for FieldElement {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.mul_limbs(&rhs.0)
    }
}
