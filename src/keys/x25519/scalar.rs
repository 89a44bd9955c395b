//! Scalar arithmetic modulo the Curve25519 prime subgroup order.
//!
//! ```text
//! L = 2²⁵² + 27742317777372353535851937790883648493
//! ```
//!
//! Only one operation is needed by the signature scheme: the response
//! `r + a·c mod L`. It is computed with two Montgomery multiplications
//! (`M = 2²⁵⁶`), using the Montgomery accumulator to absorb the addend:
//!
//! ```text
//! t = (r + a·c) · M⁻¹      (montmul with accumulator r)
//! s = t · (M² mod L) · M⁻¹ = r + a·c
//! ```
//!
//! Inputs do not need to be reduced below `L`; any 256-bit values are
//! accepted.

use zeroize::Zeroize;

use super::field::{NLIMBS, adc, mac, read_limbs, write_limbs};

/// `-L⁻¹ mod 2⁶⁴`.
const MONTGOMERY_FACTOR: u64 = 0xd2b5_1da3_1254_7e1b;

/// L, little-endian limbs.
const L: [u64; NLIMBS] = [
    0x5812_631a_5cf5_d3ed,
    0x14de_f9de_a2f7_9cd6,
    0x0000_0000_0000_0000,
    0x1000_0000_0000_0000,
];

/// `M² mod L` with `M = 2²⁵⁶`.
const R2: [u64; NLIMBS] = [
    0xa406_11e3_449c_0f01,
    0xd00e_1ba7_6885_9347,
    0xceec_73d2_17f5_be65,
    0x0399_411b_7c30_9a3d,
];

/// Montgomery multiply-accumulate: `out ← (out + a·b) · M⁻¹ mod L`.
///
/// A high carry register lets the inputs stay unreduced. After the first
/// call the result is below `M`; after a second call by `R2 < L` it is
/// below `L`.
fn montmul(out: &mut [u64; NLIMBS], a: &[u64; NLIMBS], b: &[u64; NLIMBS]) {
    let mut hic = 0u64;

    for &mand in a.iter() {
        let mut carry = 0u64;
        let mut carry2 = 0u64;
        let mut mand2 = MONTGOMERY_FACTOR;

        for j in 0..NLIMBS {
            let mut acc = out[j];
            acc = mac(&mut carry, acc, mand, b[j]);
            if j == 0 {
                mand2 = mand2.wrapping_mul(acc);
            }
            acc = mac(&mut carry2, acc, mand2, L[j]);
            if j > 0 {
                out[j - 1] = acc;
            }
        }

        out[NLIMBS - 1] = adc(&mut hic, carry, carry2);
    }

    // Subtract L, then add it back if that borrowed more than the high
    // carry covers.
    let mut borrow: i128 = 0;
    for (limb, &l) in out.iter_mut().zip(L.iter()) {
        borrow = borrow + *limb as i128 - l as i128;
        *limb = borrow as u64;
        borrow >>= 64;
    }

    let need_add = (-(borrow + hic as i128)) as u64;

    let mut carry = 0u64;
    for (limb, &l) in out.iter_mut().zip(L.iter()) {
        *limb = mac(&mut carry, *limb, need_add, l);
    }
}

/// Computes `nonce + secret · challenge mod L`.
///
/// All three inputs are 32-byte little-endian integers. The intermediate
/// limbs are wiped before returning.
pub(crate) fn mul_add(challenge: &[u8; 32], secret: &[u8; 32], nonce: &[u8; 32]) -> [u8; 32] {
    let mut acc = read_limbs(nonce);
    let mut a = read_limbs(secret);
    let c = read_limbs(challenge);

    montmul(&mut acc, &a, &c);
    a.zeroize();

    let mut out = [0u64; NLIMBS];
    montmul(&mut out, &acc, &R2);
    acc.zeroize();

    let bytes = write_limbs(&out);
    out.zeroize();
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small(n: u64) -> [u8; 32] {
        write_limbs(&[n, 0, 0, 0])
    }

    fn l_minus(n: u64) -> [u8; 32] {
        let mut l = L;
        l[0] -= n;
        write_limbs(&l)
    }

    #[test]
    fn small_values() {
        assert_eq!(mul_add(&small(7), &small(3), &small(5)), small(26));
        assert_eq!(mul_add(&small(0), &small(3), &small(5)), small(5));
        assert_eq!(mul_add(&small(1), &small(1), &small(0)), small(1));
    }

    #[test]
    fn result_is_reduced() {
        // (L - 1) * 1 + 1 = L ≡ 0
        assert_eq!(mul_add(&small(1), &l_minus(1), &small(1)), small(0));
        // (L - 1)^2 ≡ 1
        assert_eq!(mul_add(&l_minus(1), &l_minus(1), &small(0)), small(1));
        // L + 5 ≡ 5
        let mut l_plus_5 = L;
        l_plus_5[0] += 5;
        assert_eq!(mul_add(&small(0), &small(0), &write_limbs(&l_plus_5)), small(5));
    }

    #[test]
    fn unreduced_challenge() {
        // 2^256 - 1 ≡ M - 1; multiplying by zero secret leaves the nonce.
        let max = [0xffu8; 32];
        assert_eq!(mul_add(&max, &small(0), &small(9)), small(9));

        // 1 * (2^256 - 1) mod L is below L
        let out = read_limbs(&mul_add(&max, &small(1), &small(0)));
        assert!(out[3] <= L[3]);
    }
}
